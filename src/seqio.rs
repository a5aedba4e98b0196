//! Sequence-record input for **FASTA / FASTA.GZ** (`.fna`, `.fasta`, `.fa`).
//!
//! ### Design
//! - Parsing with `needletail`; gzip is detected from the content, so `.gz`
//!   variants need no special handling.
//! - Sequence lines are joined, bytes are kept as-is (no uppercasing).
//! - The record id is the header up to the first whitespace.
//!
//! ### Errors
//! Parsing/IO errors are bubbled via `anyhow::Result` to the caller, with the
//! offending path attached as context.
//!
//! ### Example
//! ```no_run
//! use primerprobe::seqio;
//! let rec = seqio::read_first_record("gene.fna").unwrap();
//! println!("{}: {} bp", rec.id, rec.seq.len());
//! ```
use std::path::Path;

use anyhow::{Context, Result};
use needletail::parse_fastx_file;

/// One parsed sequence record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

/// Extensions accepted on the command line (a trailing `.gz` is allowed).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["fna", "fasta", "fa"];

/// `true` if the file name ends in one of [`SUPPORTED_EXTENSIONS`], optionally
/// followed by `.gz`. Case-insensitive.
pub fn is_supported_path<P: AsRef<Path>>(path: P) -> bool {
    let name = path
        .as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| stem.len() > ext.len() + 1 && stem.ends_with(&format!(".{ext}")))
}

fn record_id(header: &[u8]) -> String {
    let full = String::from_utf8_lossy(header);
    full.split_whitespace().next().unwrap_or("").to_string()
}

/// Parse every record in `path`, in file order.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<SeqRecord>> {
    let p = path.as_ref();
    let mut reader = parse_fastx_file(p).with_context(|| format!("opening {}", p.display()))?;
    let mut out = Vec::new();
    while let Some(record) = reader.next() {
        let rec = record.with_context(|| format!("parsing record {} of {}", out.len() + 1, p.display()))?;
        out.push(SeqRecord { id: record_id(rec.id()), seq: rec.seq().into_owned() });
    }
    log::debug!("read {} record(s) from {}", out.len(), p.display());
    Ok(out)
}

/// Parse only the first record of `path`.
pub fn read_first_record<P: AsRef<Path>>(path: P) -> Result<SeqRecord> {
    let p = path.as_ref();
    let mut reader = parse_fastx_file(p).with_context(|| format!("opening {}", p.display()))?;
    match reader.next() {
        Some(record) => {
            let rec = record.with_context(|| format!("parsing {}", p.display()))?;
            Ok(SeqRecord { id: record_id(rec.id()), seq: rec.seq().into_owned() })
        }
        None => anyhow::bail!("{} contains no sequence records", p.display()),
    }
}
