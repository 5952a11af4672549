//! Error taxonomy.
//!
//! The simulation core itself is total once it holds a validated,
//! non-empty workload; every error here originates at ingestion,
//! configuration, or the I/O boundary.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::validation::ValidationError;

/// Errors surfaced to the caller.
#[derive(Debug)]
pub enum SimError {
    /// No processes were supplied.
    EmptyWorkload,
    /// Process records failed validation.
    InvalidWorkload(Vec<ValidationError>),
    /// Simulation settings failed validation.
    InvalidConfig(Vec<ValidationError>),
    /// Input text could not be parsed into process triples.
    Parse {
        /// Offending token (empty when input ended mid-triple).
        token: String,
        /// Zero-based index of the token in the input.
        position: usize,
        /// What was expected.
        message: String,
    },
    /// Input source could not be read.
    UnreadableSource {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Output sink could not be written.
    UnwritableSink {
        /// Sink path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorkload => f.write_str("no processes to schedule"),
            Self::InvalidWorkload(errors) => write!(f, "invalid workload: {}", join(errors)),
            Self::InvalidConfig(errors) => write!(f, "invalid configuration: {}", join(errors)),
            Self::Parse {
                token,
                position,
                message,
            } => write!(f, "parse error at token {position} ({token:?}): {message}"),
            Self::UnreadableSource { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::UnwritableSink { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnreadableSource { source, .. } | Self::UnwritableSink { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
