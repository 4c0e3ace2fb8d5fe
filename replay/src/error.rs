use std::io;

use eloboard::OrderingViolation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("line {line}: {reason}")]
    Schema { line: u64, reason: String },
    #[error("line {line}: invalid scheduled time {value:?}")]
    Timestamp {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error(transparent)]
    Ordering(#[from] OrderingViolation),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn schema(line: u64, reason: impl Into<String>) -> Error {
        Error::Schema {
            line,
            reason: reason.into(),
        }
    }
}
