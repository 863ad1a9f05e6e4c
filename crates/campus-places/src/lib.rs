//! `campus-places` — the campus place records and the locations file codec.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`location`] | `Location` record                                         |
//! | [`store`]    | `PlaceStore`: CRUD by id, name search, popularity ranking |
//! | [`codec`]    | `read_locations`, `write_locations`, file helpers         |
//! | [`error`]    | `PlaceError`, `PlaceResult<T>`                            |
//!
//! Place names are also the node names of the route graph: the assistant
//! seeds one graph node per stored place on every load.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                           |
//! |---------|--------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Location`. |

pub mod codec;
pub mod error;
pub mod location;
pub mod store;


pub use codec::{load_locations, read_locations, save_locations, write_locations, LocationLoad};
pub use error::{PlaceError, PlaceResult};
pub use location::Location;
pub use store::PlaceStore;
