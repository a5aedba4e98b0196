#![forbid(unsafe_code)]
//! # primerprobe
//!
//! Candidate generator for hydrolysis-probe (qPCR) assays. A fixed-width
//! **amplicon window** slides one base at a time across a DNA sequence and every
//! position yields a **forward primer**, a **probe** and a **reverse primer**
//! (reverse complement of the segment after the probe).
//!
//! ## Highlights
//! - 🧬 **Pure core**: [`scan`] and [`generate_triplets`] are deterministic and
//!   side-effect free; independent inputs can be processed concurrently.
//! - 🧾 **Typed failures**: [`ScanError::InvalidSequence`] and
//!   [`ScanError::MalformedParameters`]; "no window fits" is an empty result.
//! - 💤 **Lazy option**: [`Triplets`] is a finite, restartable iterator for very
//!   long sequences.
//! - 🚫 **No filtering**: candidates are not scored or rejected (Tm, GC bounds,
//!   self-complementarity and off-target checks are out of scope).
//!
//! ## Examples
//! ```rust
//! use primerprobe::{calculate_gc_content, generate_triplets};
//! let seq = b"AAAACCCCGGGGTTTT";
//! assert_eq!(calculate_gc_content(seq).unwrap(), 50.0);
//! let t = generate_triplets(seq, 2, 2, 8).unwrap();
//! assert_eq!(t.len(), 9);
//! assert_eq!(t[0].reverse_primer, "GG");
//! ```

pub mod error;
pub mod sequence;
pub mod params;
pub mod scan;
pub mod seqio;
pub mod design;
pub mod report;
pub mod run;

pub use design::{design_all, design_record, Design};
pub use error::ScanError;
pub use params::WindowParameters;
pub use scan::{generate_triplets, scan, window_count, Triplet, Triplets, Validation};
pub use sequence::{calculate_gc_content, reverse_complement, sequence_stats, SequenceStats};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience: `(forward_primer, probe, reverse_primer)` rows for a sequence,
/// in window order, with strict parameter validation.
///
/// # Examples
/// ```
/// let rows = primerprobe::triplet_rows(b"AAAACCCCGGGGTTTT", &primerprobe::WindowParameters::new(2, 2, 8)).unwrap();
/// assert_eq!(rows[0], ("AA".to_string(), "AA".to_string(), "GG".to_string()));
/// ```
pub fn triplet_rows(seq: &[u8], params: &WindowParameters) -> Result<Vec<(String, String, String)>, ScanError> {
    Ok(scan(seq, params, Validation::Strict)?
        .map(|t| (t.forward_primer, t.probe, t.reverse_primer))
        .collect())
}
