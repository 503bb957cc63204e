//! Domain types for the transit network.
//!
//! Small value types shared by the graph builder and the router. Station
//! names are matched case-insensitively through [`StationKey`]; positions
//! live on a flat plane and distances are Euclidean.

mod position;
mod station;

pub use position::Position;
pub use station::{StationId, StationKey};
