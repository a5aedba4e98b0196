//! Command drivers behind the `primerprobe` binary.
//!
//! `design` = load FASTA -> design records -> write one CSV per record.
//! `stats` = load FASTA -> print id, length and GC content.
//!
//! Failures anywhere in the per-file pipeline are reported as
//! `Error processing the file <path>: ...`.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::design::{design_all, Design};
use crate::params::WindowParameters;
use crate::report::{default_output_name, format_summary, write_design_csv};
use crate::scan::Validation;
use crate::seqio::{self, SeqRecord};
use crate::sequence::{normalize, sequence_stats, SequenceStats};

/// Where `design` writes its CSV output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// One CSV on stdout (single record only).
    Stdout,
    /// Exactly this file (single record only).
    File(PathBuf),
    /// `<dir>/<id>_primers_probes.csv` per record.
    Dir(PathBuf),
}

impl Default for OutputTarget {
    fn default() -> Self {
        OutputTarget::Dir(PathBuf::from("."))
    }
}

/// Options of the `design` command.
#[derive(Clone, Debug)]
pub struct DesignOpts {
    pub file: PathBuf,
    pub all_records: bool,
    pub uppercase: bool,
    pub params: WindowParameters,
    pub validation: Validation,
    pub threads: Option<usize>,
    pub target: OutputTarget,
    pub header: bool,
}

/// Read the first (or every) record of a supported FASTA file.
pub fn load_records(path: &Path, all_records: bool, uppercase: bool) -> Result<Vec<SeqRecord>> {
    if !seqio::is_supported_path(path) {
        bail!(
            "Unsupported file type: {}\nAllowed: {}",
            path.display(),
            seqio::SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    let mut records = if all_records {
        seqio::read_records(path)?
    } else {
        vec![seqio::read_first_record(path)?]
    };
    if uppercase {
        for r in records.iter_mut() {
            r.seq = normalize(&r.seq);
        }
    }
    Ok(records)
}

/// Resolve one output path per record. Fails instead of letting two records
/// write the same file.
pub fn output_paths(ids: &[&str], target: &OutputTarget) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = match target {
        OutputTarget::Stdout => {
            if ids.len() > 1 {
                bail!("--stdout takes a single record; got {} (use --output-dir)", ids.len());
            }
            return Ok(Vec::new());
        }
        OutputTarget::File(p) => {
            if ids.len() > 1 {
                bail!("--output takes a single record; got {} (use --output-dir)", ids.len());
            }
            ids.iter().map(|_| p.clone()).collect()
        }
        OutputTarget::Dir(dir) => ids.iter().map(|id| dir.join(default_output_name(id))).collect(),
    };
    let mut seen = HashSet::new();
    for (id, p) in ids.iter().zip(&paths) {
        if !seen.insert(p) {
            bail!("duplicate record id '{id}': {} would be written twice", p.display());
        }
    }
    Ok(paths)
}

fn design_file(opts: &DesignOpts) -> Result<(Vec<Design>, Vec<PathBuf>)> {
    let records = load_records(&opts.file, opts.all_records, opts.uppercase)?;
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    let paths = output_paths(&ids, &opts.target)?;
    let designs = design_all(&records, &opts.params, opts.validation, opts.threads)?;
    Ok((designs, paths))
}

/// Run `design`; CSV for [`OutputTarget::Stdout`] goes to `stdout`.
pub fn run_design<W: Write>(opts: &DesignOpts, mut stdout: W) -> Result<Vec<Design>> {
    if !opts.params.within_ui_ranges() {
        log::warn!("{}: outside the usual primer/probe/amplicon ranges", opts.params);
    }
    log::info!("design: {}, {}", opts.file.display(), opts.params);
    let (designs, paths) = design_file(opts)
        .with_context(|| format!("Error processing the file {}", opts.file.display()))?;

    for d in &designs {
        eprintln!("{}", format_summary(d));
    }
    if opts.target == OutputTarget::Stdout {
        for d in &designs {
            write_design_csv(&mut stdout, d, opts.header)?;
        }
    } else {
        for (d, path) in designs.iter().zip(&paths) {
            let f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_design_csv(BufWriter::new(f), d, opts.header)?;
            log::info!("wrote {} triplet(s) to {}", d.triplets.len(), path.display());
        }
    }
    Ok(designs)
}

/// Run `stats`: a tab-separated `id, length_bp, gc_percent` table.
pub fn run_stats<W: Write>(file: &Path, all_records: bool, uppercase: bool, mut out: W) -> Result<()> {
    let rows = load_records(file, all_records, uppercase)
        .and_then(|records| {
            records
                .iter()
                .map(|r| -> Result<(String, SequenceStats)> {
                    let s = sequence_stats(&r.seq).with_context(|| format!("record '{}'", r.id))?;
                    Ok((r.id.clone(), s))
                })
                .collect::<Result<Vec<_>>>()
        })
        .with_context(|| format!("Error processing the file {}", file.display()))?;
    writeln!(out, "id\tlength_bp\tgc_percent")?;
    for (id, s) in rows {
        writeln!(out, "{id}\t{}\t{:.2}", s.length, s.gc_percent)?;
    }
    Ok(())
}
