//! Workspace error type.
//!
//! Sub-crates define their own error enums and convert `CampusError` into
//! them via `From` impls, so a bad time string surfaces with the same
//! variant whichever engine rejected it.

use thiserror::Error;

/// The base error type for `campus-core` and a common source for sub-crates.
#[derive(Debug, Error)]
pub enum CampusError {
    #[error("invalid time {input:?} (expected YYYY-MM-DD HH:MM): {reason}")]
    InvalidTimeFormat { input: String, reason: &'static str },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{field} {value:?} contains {found:?}, which cannot be stored in a data file")]
    UnstorableField { field: &'static str, value: String, found: char },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CampusError {
    /// `true` for the time-format variant, regardless of its payload.
    pub fn is_invalid_time(&self) -> bool {
        matches!(self, CampusError::InvalidTimeFormat { .. })
    }

    /// `true` for the field-content variants.
    pub fn is_unstorable(&self) -> bool {
        matches!(self, CampusError::UnstorableField { .. } | CampusError::EmptyField { .. })
    }
}

/// Shorthand result type for all `campus-*` crates.
pub type CampusResult<T> = Result<T, CampusError>;
