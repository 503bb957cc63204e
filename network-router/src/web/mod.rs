//! Web layer for the network router.
//!
//! Provides HTTP endpoints for route queries and read-only station and
//! line lookups.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
