//! Typed failures raised by the core (sequence utilities and window scanner).
//!
//! File and CLI plumbing wraps these in `anyhow::Error`; the core itself never
//! prints or recovers, it only returns a [`ScanError`] to the immediate caller.
use thiserror::Error;

/// Failure kinds of the core.
///
/// "No window fits the sequence" is deliberately **not** represented here: it
/// is a valid outcome reported as zero triplets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Empty (zero-length) input sequence.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// Non-positive or inconsistent window lengths.
    #[error("malformed parameters: {0}")]
    MalformedParameters(String),
}

/// Result alias used by the core modules.
pub type Result<T> = std::result::Result<T, ScanError>;
