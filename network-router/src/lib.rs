//! Transit network router.
//!
//! Builds an immutable graph of stations joined by directional lines and
//! answers "what is the quickest way from here to there?" with A* search.
//! A small HTTP server exposes the same queries.

pub mod config;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod web;

#[cfg(test)]
mod fixtures;
