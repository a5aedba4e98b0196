//! Nucleotide helpers: GC content, reverse complement and summary statistics.
//!
//! Sequences are plain byte slices as read from FASTA. Nothing here rewrites the
//! input; GC counting is literal on uppercase `G`/`C` so that soft-masked
//! (lowercase) stretches and ambiguity codes are not counted.
//!
//! # Examples
//! ```
//! use primerprobe::sequence::{calculate_gc_content, reverse_complement};
//! assert_eq!(calculate_gc_content(b"GGCC").unwrap(), 100.0);
//! assert_eq!(reverse_complement(b"AACG"), b"CGTT".to_vec());
//! ```
use crate::error::{Result, ScanError};

/// Length and GC percentage of one sequence, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceStats {
    /// Length in bp.
    pub length: usize,
    /// GC content in percent (0.0..=100.0).
    pub gc_percent: f64,
}

/// Percentage of symbols equal to `G` or `C` (uppercase only).
///
/// Returns [`ScanError::InvalidSequence`] for an empty sequence.
pub fn calculate_gc_content(seq: &[u8]) -> Result<f64> {
    if seq.is_empty() {
        return Err(ScanError::InvalidSequence("cannot compute GC content of an empty sequence".into()));
    }
    let gc = seq.iter().filter(|&&b| b == b'G' || b == b'C').count();
    Ok(gc as f64 / seq.len() as f64 * 100.0)
}

/// Reverse complement (A↔T, C↔G, N↔N, IUPAC codes paired, case preserved).
///
/// Bytes outside the IUPAC alphabet are carried over unchanged.
#[inline]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    bio::alphabets::dna::revcomp(seq)
}

/// Length and GC content in one call.
pub fn sequence_stats(seq: &[u8]) -> Result<SequenceStats> {
    let gc_percent = calculate_gc_content(seq)?;
    Ok(SequenceStats { length: seq.len(), gc_percent })
}

/// Uppercase a sequence (ASCII only).
pub fn normalize(seq: &[u8]) -> Vec<u8> {
    seq.to_ascii_uppercase()
}
