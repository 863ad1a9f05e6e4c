//! `campus-assistant` — ties places, shuttle queues, the schedule index and
//! the route graph to a data directory.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`assistant`] | `CampusAssistant`, `LoadSummary`                      |
//! | [`error`]     | `AssistantError`, `AssistantResult<T>`                |
//!
//! # Files
//!
//! ```text
//! <data_dir>/locations.txt    id|name|type|description|popularity
//! <data_dir>/shuttle.txt      Q|station|a,b  then  O|a,b  and  D|a,b
//! <data_dir>/schedule.txt     id|title|location|start|description
//! <data_dir>/navigation.txt   N|name  and  E|from|to|weight
//! ```
//!
//! The stores themselves never open files; this crate decides which file
//! each one is read from and saved to.

pub mod assistant;
pub mod error;


pub use assistant::{CampusAssistant, LoadSummary};
pub use error::{AssistantError, AssistantResult};
