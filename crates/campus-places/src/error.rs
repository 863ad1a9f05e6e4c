//! Place-store error type.

use thiserror::Error;

use campus_core::{CampusError, LocationId};

/// Errors produced by `campus-places`.
///
/// A failed lookup by id is reported with [`PlaceError::NotFound`]; searches
/// and rankings never fail, they just return fewer places.
#[derive(Debug, Error)]
pub enum PlaceError {
    #[error("a place with {0} already exists")]
    DuplicateId(LocationId),

    #[error("no place with {0}")]
    NotFound(LocationId),

    #[error("place {id}: {source}")]
    Unstorable { id: LocationId, source: CampusError },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlaceResult<T> = Result<T, PlaceError>;
