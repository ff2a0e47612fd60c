//! Crate-wide error taxonomy.
//!
//! Mirrors the flat, per-domain error enums the scheduler subsystem this
//! crate is grounded on uses internally (`IpcError`, `ShmemError`): one
//! variant per failure mode, matched by the CLI driver to produce a single
//! human-readable diagnostic line. `thiserror` stands in for the manual
//! `Display` impls those enums wrote by hand, since this crate is hosted
//! (`std`) rather than `no_std`.

use thiserror::Error;

/// Errors that can terminate a run, per spec §7.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A workload row failed to parse or validate.
    #[error("invalid workload: {0}")]
    InvalidWorkload(String),

    /// An algorithm parameter is out of range or unrecognized.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The input could not be read or the output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV workload could not be read or parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A run result could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
