//! Sliding-window primer/probe scanner.
//!
//! A window of `amplicon_length` bases is moved one base at a time across the
//! sequence. At each offset `i` the scanner slices
//!
//! - the forward primer `seq[i .. i+primer]`,
//! - the probe `seq[i+primer .. i+primer+probe]`,
//! - the tail `seq[i+primer+probe .. i+2*primer+probe]`, emitted as its
//!   reverse complement (the reverse primer reads 5'→3' on the other strand).
//!
//! Forward primer and probe are literal substrings of the input strand.
//!
//! # Examples
//! ```
//! use primerprobe::{scan, Validation, WindowParameters};
//! let params = WindowParameters::new(2, 2, 8);
//! let first = scan(b"AAAACCCCGGGGTTTT", &params, Validation::Strict).unwrap().next().unwrap();
//! assert_eq!((first.forward_primer.as_str(), first.probe.as_str(), first.reverse_primer.as_str()), ("AA", "AA", "GG"));
//! ```
use crate::error::Result;
use crate::params::WindowParameters;
use crate::sequence::reverse_complement;

/// One candidate assay: forward primer, probe and reverse primer.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Triplet {
    /// 0-based start of the window (and of the forward primer).
    pub offset: usize,
    /// Literal substring at the window start.
    pub forward_primer: String,
    /// Literal substring right after the forward primer.
    pub probe: String,
    /// Reverse complement of the segment right after the probe.
    pub reverse_primer: String,
}

/// Whether parameters are checked before scanning.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Validation {
    /// Reject zero lengths and `2*primer + probe > amplicon` up front.
    #[default]
    Strict,
    /// Scan whatever was passed; segments running past the sequence end are
    /// truncated (possibly to empty) instead of failing.
    Lenient,
}

/// Number of window start offsets: `seq_len - amplicon_length + 1`, or 0 when
/// the amplicon is longer than the sequence.
#[inline]
pub fn window_count(seq_len: usize, amplicon_length: usize) -> usize {
    if amplicon_length > seq_len { 0 } else { seq_len - amplicon_length + 1 }
}

/// Clamp `[start, start+len)` to the slice bounds.
#[inline]
fn clamped(seq: &[u8], start: usize, len: usize) -> &[u8] {
    let s = start.min(seq.len());
    let e = start.saturating_add(len).min(seq.len());
    &seq[s..e]
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Lazy, finite producer of [`Triplet`]s in increasing offset order.
///
/// Cloning yields an independent producer positioned at the same offset, so a
/// fresh clone taken before iteration restarts the scan.
#[derive(Clone, Debug)]
pub struct Triplets<'a> {
    seq: &'a [u8],
    params: WindowParameters,
    next: usize,
    end: usize,
}

impl<'a> Triplets<'a> {
    fn new(seq: &'a [u8], params: WindowParameters) -> Self {
        let end = window_count(seq.len(), params.amplicon_length);
        Self { seq, params, next: 0, end }
    }

    /// Build the triplet for window `offset` (no bounds requirement on `offset`).
    pub fn triplet_at(&self, offset: usize) -> Triplet {
        let p = &self.params;
        let probe_start = offset.saturating_add(p.primer_length);
        let tail_start = probe_start.saturating_add(p.probe_length);
        Triplet {
            offset,
            forward_primer: lossy(clamped(self.seq, offset, p.primer_length)),
            probe: lossy(clamped(self.seq, probe_start, p.probe_length)),
            reverse_primer: lossy(&reverse_complement(clamped(self.seq, tail_start, p.primer_length))),
        }
    }

    /// Total number of windows, independent of how far iteration has advanced.
    pub fn window_count(&self) -> usize {
        self.end
    }
}

impl Iterator for Triplets<'_> {
    type Item = Triplet;

    fn next(&mut self) -> Option<Triplet> {
        if self.next >= self.end {
            return None;
        }
        let t = self.triplet_at(self.next);
        self.next += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Triplets<'_> {}

impl core::iter::FusedIterator for Triplets<'_> {}

/// Prepare a scan of `seq`.
///
/// With [`Validation::Strict`] malformed parameters fail here, before any
/// triplet is produced. A sequence shorter than the amplicon is not an error:
/// the producer is simply empty.
pub fn scan<'a>(seq: &'a [u8], params: &WindowParameters, validation: Validation) -> Result<Triplets<'a>> {
    match validation {
        Validation::Strict => params.validate()?,
        Validation::Lenient => {
            let n = window_count(seq.len(), params.amplicon_length);
            if n > 0 && (n - 1).saturating_add(params.min_amplicon_length()) > seq.len() {
                log::warn!(
                    "{params}: segments of the last windows run past the sequence end ({} bp) and will be truncated",
                    seq.len()
                );
            }
        }
    }
    let it = Triplets::new(seq, *params);
    log::debug!("scan: {} bp, {params}, {} window(s)", seq.len(), it.window_count());
    Ok(it)
}

/// Eagerly generate every triplet with strict validation.
///
/// # Examples
/// ```
/// let t = primerprobe::generate_triplets(b"AAAACCCCGGGGTTTT", 2, 2, 8).unwrap();
/// assert_eq!(t.len(), 9);
/// assert!(primerprobe::generate_triplets(b"ACGTA", 2, 2, 8).unwrap().is_empty());
/// ```
pub fn generate_triplets(
    seq: &[u8],
    primer_length: usize,
    probe_length: usize,
    amplicon_length: usize,
) -> Result<Vec<Triplet>> {
    let params = WindowParameters::new(primer_length, probe_length, amplicon_length);
    Ok(scan(seq, &params, Validation::Strict)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;

    const SEQ: &[u8] = b"AAAACCCCGGGGTTTT";

    #[test]
    fn sixteen_mer_gives_nine_windows() {
        let t = generate_triplets(SEQ, 2, 2, 8).unwrap();
        assert_eq!(t.len(), 9);
        assert_eq!(t[0], Triplet { offset: 0, forward_primer: "AA".into(), probe: "AA".into(), reverse_primer: "GG".into() });
        // offset 8: GG | GG | TT -> AA
        assert_eq!((t[8].forward_primer.as_str(), t[8].probe.as_str(), t[8].reverse_primer.as_str()), ("GG", "GG", "AA"));
    }

    #[test]
    fn short_sequence_gives_no_triplets() {
        assert!(generate_triplets(b"ACGTA", 2, 2, 8).unwrap().is_empty());
        assert_eq!(window_count(5, 8), 0);
    }

    #[test]
    fn amplicon_equal_to_sequence_gives_one_window() {
        let t = generate_triplets(b"ACGTACGT", 2, 2, 8).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].reverse_primer, "GT"); // tail AC
    }

    #[test]
    fn strict_rejects_overflowing_layout() {
        let p = WindowParameters::new(3, 3, 6);
        assert!(matches!(scan(b"ACGTACGT", &p, Validation::Strict), Err(ScanError::MalformedParameters(_))));
        assert!(matches!(generate_triplets(b"ACGT", 0, 2, 4), Err(ScanError::MalformedParameters(_))));
    }

    #[test]
    fn lenient_truncates_tail_near_the_end() {
        let p = WindowParameters::new(3, 3, 6);
        let t: Vec<_> = scan(b"ACGTACGT", &p, Validation::Lenient).unwrap().collect();
        assert_eq!(t.len(), 3);
        assert_eq!(t[0].reverse_primer, "AC"); // tail GT
        assert_eq!(t[1].reverse_primer, "A"); // tail T
        assert_eq!(t[2].forward_primer, "GTA");
        assert_eq!(t[2].probe, "CGT");
        assert_eq!(t[2].reverse_primer, "");
    }

    #[test]
    fn lenient_zero_amplicon_yields_empty_segments_at_the_end() {
        let p = WindowParameters::new(1, 1, 0);
        let t: Vec<_> = scan(b"AC", &p, Validation::Lenient).unwrap().collect();
        assert_eq!(t.len(), 3);
        assert_eq!(t[2].forward_primer, "");
        assert_eq!(t[0].reverse_primer, "");
    }

    #[test]
    fn producer_is_exact_size_and_restartable() {
        let p = WindowParameters::new(2, 2, 8);
        let mut it = scan(SEQ, &p, Validation::Strict).unwrap();
        let fresh = it.clone();
        assert_eq!(it.len(), 9);
        it.next();
        assert_eq!(it.len(), 8);
        assert_eq!(it.window_count(), 9);
        assert_eq!(fresh.count(), 9);
    }

    #[test]
    fn lowercase_input_is_kept_literal() {
        let t = generate_triplets(b"aaccggtt", 2, 2, 6).unwrap();
        assert_eq!(t[0].forward_primer, "aa");
        assert_eq!(t[0].reverse_primer, "cc"); // tail gg
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    fn layout() -> impl Strategy<Value = WindowParameters> {
        (1usize..6, 1usize..8, 0usize..10)
            .prop_map(|(pr, pb, spare)| WindowParameters::new(pr, pb, 2 * pr + pb + spare))
    }

    proptest! {
        #[test]
        fn count_matches_window_formula(s in dna_seq(120), p in layout()) {
            let t: Vec<_> = scan(&s, &p, Validation::Strict).unwrap().collect();
            if p.amplicon_length > s.len() {
                prop_assert!(t.is_empty());
            } else {
                prop_assert_eq!(t.len(), s.len() - p.amplicon_length + 1);
            }
        }

        #[test]
        fn offsets_are_contiguous_and_segments_full_length(s in dna_seq(120), p in layout()) {
            let t: Vec<_> = scan(&s, &p, Validation::Strict).unwrap().collect();
            for (k, tr) in t.iter().enumerate() {
                prop_assert_eq!(tr.offset, k);
                prop_assert_eq!(tr.forward_primer.as_bytes(), &s[k..k + p.primer_length]);
                prop_assert_eq!(tr.probe.len(), p.probe_length);
                prop_assert_eq!(tr.reverse_primer.len(), p.primer_length);
            }
        }

        #[test]
        fn reverse_primer_undoes_to_the_tail(s in dna_seq(120), p in layout()) {
            for tr in scan(&s, &p, Validation::Strict).unwrap() {
                let start = tr.offset + p.primer_length + p.probe_length;
                prop_assert_eq!(reverse_complement(tr.reverse_primer.as_bytes()), s[start..start + p.primer_length].to_vec());
            }
        }
    }
}
