//! Top-level error type for the assistant: wraps every component error plus
//! filesystem failures on the data directory itself.

use campus_core::CampusError;
use campus_nav::NavError;
use campus_places::PlaceError;
use campus_schedule::ScheduleError;
use campus_shuttle::ShuttleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error(transparent)]
    Core(#[from] CampusError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("navigation error: {0}")]
    Nav(#[from] NavError),

    #[error("place error: {0}")]
    Places(#[from] PlaceError),

    #[error("shuttle error: {0}")]
    Shuttle(#[from] ShuttleError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path:   std::path::PathBuf,
        source: std::io::Error,
    },
}

pub type AssistantResult<T> = Result<T, AssistantError>;
