//! Route planner using A* search.
//!
//! This module answers: "what is the quickest way from this station to
//! that one?" Names resolve case-insensitively; failures come back as
//! [`RouteError`] values rather than panics.
//!
//! Each query allocates its own frontier and cost tables, so one
//! [`Network`](crate::network::Network) can serve queries from many threads
//! at once.

mod error;
mod route;
mod search;

pub use error::RouteError;
pub use route::{Leg, Route};
pub use search::{Planner, RouteResult};
