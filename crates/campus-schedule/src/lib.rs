//! `campus-schedule` — the time-ordered activity index and its file codec.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`index`]  | `TemporalIndex` (unbalanced BST keyed by `(TimeKey, id)`)     |
//! | [`codec`]  | `read_activities`, `write_activities`, file helpers           |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`                          |
//!
//! # Operations (summary)
//!
//! ```text
//! insert(a)            O(depth)   rejects unparsable start times
//! ordered_sequence()   O(n)       ascending (time, id)
//! snapshot_pre_order() O(n)       root, left, right — shape-preserving backup
//! remove_expired(t)    O(n)       drops every key < t, merges orphaned subtrees
//! ```

pub mod codec;
pub mod error;
pub mod index;


pub use codec::{load_activities, read_activities, save_activities, write_activities, ActivityLoad};
pub use error::{ScheduleError, ScheduleResult};
pub use index::{Iter, TemporalIndex};
