use thiserror::Error;

use campus_core::{ActivityId, CampusError};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid time {input:?}: {reason}")]
    InvalidTimeFormat { input: String, reason: &'static str },

    #[error("activity {id}: {source}")]
    Unstorable { id: ActivityId, source: CampusError },

    #[error(transparent)]
    Core(CampusError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CampusError> for ScheduleError {
    fn from(err: CampusError) -> Self {
        match err {
            CampusError::InvalidTimeFormat { input, reason } => {
                ScheduleError::InvalidTimeFormat { input, reason }
            }
            CampusError::Io(e) => ScheduleError::Io(e),
            other => ScheduleError::Core(other),
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
