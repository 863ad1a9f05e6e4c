//! Shuttle-service error type.

use thiserror::Error;

use campus_core::CampusError;

/// Errors produced by `campus-shuttle`.
#[derive(Debug, Error)]
pub enum ShuttleError {
    #[error("no passengers waiting at {station:?}")]
    EmptyQueue { station: String },

    #[error("{passenger:?} is not on board")]
    NotOnBoard { passenger: String },

    #[error("cannot store shuttle data: {0}")]
    Unstorable(#[source] CampusError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ShuttleResult<T> = Result<T, ShuttleError>;
