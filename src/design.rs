//! Per-record driver: statistics plus the full triplet list for each sequence.
//!
//! Records are independent, so [`design_all`] fans them out over a local Rayon
//! pool (`threads = None` or `Some(0)` uses all logical cores). A single scan
//! always runs on one thread. Output order follows input order.
use anyhow::Result;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::ScanError;
use crate::params::WindowParameters;
use crate::scan::{scan, Triplet, Validation};
use crate::seqio::SeqRecord;
use crate::sequence::{sequence_stats, SequenceStats};

/// Everything produced for one sequence record.
#[derive(Clone, Debug, PartialEq)]
pub struct Design {
    pub id: String,
    pub stats: SequenceStats,
    pub params: WindowParameters,
    pub triplets: Vec<Triplet>,
}

impl Design {
    /// `true` when no window fit the sequence.
    pub fn is_empty(&self) -> bool {
        self.triplets.is_empty()
    }
}

/// Compute stats and triplets for one sequence.
///
/// Fails with [`ScanError::InvalidSequence`] for an empty sequence and
/// [`ScanError::MalformedParameters`] under strict validation; either way no
/// partial result is returned.
pub fn design_record(
    id: &str,
    seq: &[u8],
    params: &WindowParameters,
    validation: Validation,
) -> Result<Design, ScanError> {
    let stats = sequence_stats(seq).map_err(|e| match e {
        ScanError::InvalidSequence(msg) => ScanError::InvalidSequence(format!("record '{id}': {msg}")),
        other => other,
    })?;
    let triplets: Vec<Triplet> = scan(seq, params, validation)?.collect();
    log::info!(
        "{id}: {} bp, GC {:.2}%, {} triplet(s)",
        stats.length,
        stats.gc_percent,
        triplets.len()
    );
    Ok(Design { id: id.to_string(), stats, params: *params, triplets })
}

/// Design every record on a local thread pool, failing on the first bad record.
pub fn design_all(
    records: &[SeqRecord],
    params: &WindowParameters,
    validation: Validation,
    threads: Option<usize>,
) -> Result<Vec<Design>> {
    let n = match threads {
        None | Some(0) => num_cpus::get(),
        Some(t) => t,
    }
    .max(1);
    let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
    log::debug!("designing {} record(s) on {n} thread(s)", records.len());

    let designs = pool.install(|| {
        records
            .par_iter()
            .map(|r| design_record(&r.id, &r.seq, params, validation))
            .collect::<Result<Vec<_>, ScanError>>()
    })?;
    Ok(designs)
}
