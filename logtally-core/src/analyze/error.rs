use crate::analyze::period::InvalidPeriod;
use std::path::PathBuf;
use thiserror::Error;

/// A single line that could not become a [`crate::analyze::LogEntry`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match the access log pattern")]
    Pattern,

    #[error("bad timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Error)]
pub enum AggregateError {
    // Range validation, raised before the input is opened
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriod),

    // IO
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing; aborts the file, earlier lines stay counted
    #[error("{path}:{line}: {source}")]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseError,
    },
}

impl AggregateError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, line: usize, source: ParseError) -> Self {
        Self::Malformed {
            path: path.into(),
            line,
            source,
        }
    }
}
