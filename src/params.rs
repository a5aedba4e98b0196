//! Window layout parameters.
//!
//! A window is laid out as `forward primer | probe | reverse primer tail`,
//! starting at the window offset. Whatever is left of the amplicon after the
//! three segments is unused spacer:
//!
//! ```text
//! |<------------------------ amplicon_length ------------------------>|
//! |<- primer ->|<---- probe ---->|<- primer ->|........................|
//! ```
use core::fmt;
use core::ops::RangeInclusive;

use crate::error::{Result, ScanError};

/// Primer length range offered by interactive front-ends (bp).
pub const PRIMER_LENGTH_RANGE: RangeInclusive<usize> = 10..=50;
/// Probe length range offered by interactive front-ends (bp).
pub const PROBE_LENGTH_RANGE: RangeInclusive<usize> = 20..=100;
/// Amplicon length range offered by interactive front-ends (bp).
pub const AMPLICON_LENGTH_RANGE: RangeInclusive<usize> = 50..=500;

/// Explicit scan configuration passed by the caller.
///
/// The UI ranges above are a caller-side concern; [`WindowParameters::validate`]
/// only checks that the layout is well formed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WindowParameters {
    /// Length of both the forward and the reverse primer.
    pub primer_length: usize,
    /// Length of the probe between the primers.
    pub probe_length: usize,
    /// Total window width.
    pub amplicon_length: usize,
}

impl Default for WindowParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "primer={}bp probe={}bp amplicon={}bp",
            self.primer_length, self.probe_length, self.amplicon_length
        )
    }
}

impl WindowParameters {
    /// 32 bp primers, 54 bp probe, 190 bp amplicon.
    pub const DEFAULT: Self = Self { primer_length: 32, probe_length: 54, amplicon_length: 190 };

    pub fn new(primer_length: usize, probe_length: usize, amplicon_length: usize) -> Self {
        Self { primer_length, probe_length, amplicon_length }
    }

    /// Shortest amplicon that holds both primers and the probe (`2*primer + probe`).
    pub fn min_amplicon_length(&self) -> usize {
        self.primer_length
            .saturating_mul(2)
            .saturating_add(self.probe_length)
    }

    /// Reject zero lengths and layouts that do not fit inside the amplicon.
    ///
    /// # Examples
    /// ```
    /// use primerprobe::WindowParameters;
    /// assert!(WindowParameters::default().validate().is_ok());
    /// assert!(WindowParameters::new(40, 60, 100).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("primer_length", self.primer_length),
            ("probe_length", self.probe_length),
            ("amplicon_length", self.amplicon_length),
        ] {
            if v == 0 {
                return Err(ScanError::MalformedParameters(format!("{name} must be greater than 0")));
            }
        }
        let need = self.min_amplicon_length();
        if need > self.amplicon_length {
            return Err(ScanError::MalformedParameters(format!(
                "2*primer_length + probe_length = {need} exceeds amplicon_length = {}",
                self.amplicon_length
            )));
        }
        Ok(())
    }

    /// `true` when every value lies inside the interactive UI ranges.
    pub fn within_ui_ranges(&self) -> bool {
        PRIMER_LENGTH_RANGE.contains(&self.primer_length)
            && PROBE_LENGTH_RANGE.contains(&self.probe_length)
            && AMPLICON_LENGTH_RANGE.contains(&self.amplicon_length)
    }
}
