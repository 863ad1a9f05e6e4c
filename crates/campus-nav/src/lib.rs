//! `campus-nav` — walkable route graph, routing, and the navigation codec.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `RouteGraph` (interned names + adjacency lists), `Neighbor` |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`                   |
//! | [`codec`]   | `read_graph`, `write_graph`, file helpers                   |
//! | [`error`]   | `NavError`, `NavResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route` and `Neighbor`. |

pub mod codec;
pub mod error;
pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

pub use codec::{load_graph, read_graph, save_graph, write_graph};
pub use error::{NavError, NavResult};
pub use graph::{Edge, Neighbor, RouteGraph};
pub use router::{DijkstraRouter, Route, Router};
