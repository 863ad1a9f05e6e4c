//! Navigation-subsystem error type.

use thiserror::Error;

use campus_core::CampusError;

/// Errors produced by `campus-nav`.
///
/// An unknown endpoint or an unreachable destination is *not* an error:
/// routing reports both as an empty [`Route`](crate::Route).
#[derive(Debug, Error)]
pub enum NavError {
    #[error("edge {from:?} -> {to:?} has non-finite weight {weight}")]
    NonFiniteWeight { from: String, to: String, weight: f64 },

    #[error("place name cannot be stored: {0}")]
    Unstorable(#[source] CampusError),

    #[error("cannot add {name:?}: node handles exhausted")]
    NodeLimit { name: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NavResult<T> = Result<T, NavError>;
