//! `campus-shuttle` — campus shuttle queues and the shuttle file codec.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`service`] | `ShuttleService` (per-station FIFO queues), `ShuttleState` |
//! | [`codec`]   | `read_shuttle`, `write_shuttle`, file helpers              |
//! | [`error`]   | `ShuttleError`, `ShuttleResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `ShuttleState`. |

pub mod codec;
pub mod error;
pub mod service;

#[cfg(test)]
mod tests;

pub use codec::{load_shuttle, read_shuttle, save_shuttle, write_shuttle, ShuttleLoad};
pub use error::{ShuttleError, ShuttleResult};
pub use service::{ShuttleService, ShuttleState};
