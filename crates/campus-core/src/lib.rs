//! `campus-core` — foundational types for the campus assistant workspace.
//!
//! This crate is a dependency of every other `campus-*` crate.  It has no
//! `campus-*` dependencies and only `thiserror` (plus optional `serde`) from
//! outside.
//!
//! # What lives here
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`ids`]        | `ActivityId`, `LocationId`, `NodeId`                   |
//! | [`time`]       | `TimeKey` (`YYYY-MM-DD HH:MM` → ordered integer)       |
//! | [`activity`]   | `Activity` event record                                |
//! | [`config`]     | `AssistantConfig`                                      |
//! | [`field`]      | `check_field` for `|`-separated data-file text         |
//! | [`error`]      | `CampusError`, `CampusResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod activity;
pub mod config;
pub mod error;
pub mod field;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use config::AssistantConfig;
pub use error::{CampusError, CampusResult};
pub use field::{check_field, check_name, FIELD_SEPARATOR};
pub use ids::{ActivityId, LocationId, NodeId};
pub use time::TimeKey;
