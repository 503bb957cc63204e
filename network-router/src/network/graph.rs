//! Stations and the connections between them.

use crate::domain::{Position, StationId};

/// Handle to a station inside one [`Network`](super::Network).
///
/// Only meaningful for the network that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIndex(pub(crate) usize);

/// A named node in the network.
#[derive(Debug, Clone)]
pub struct Station {
    pub(crate) index: StationIndex,
    pub(crate) id: StationId,
    pub(crate) name: String,
    pub(crate) position: Position,
    pub(crate) connections: Vec<Connection>,
}

impl Station {
    pub fn index(&self) -> StationIndex {
        self.index
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    /// The station name in its original case.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn lng(&self) -> f64 {
        self.position.lng
    }

    pub fn lat(&self) -> f64 {
        self.position.lat
    }

    /// Outgoing edges, in the order the lines were processed.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// A directed, weighted edge leaving a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub(crate) line: String,
    pub(crate) direction: String,
    pub(crate) dest: StationIndex,
    pub(crate) weight: f64,
}

impl Connection {
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Destination handle; resolve with [`Network::destination`](super::Network::destination).
    pub fn dest(&self) -> StationIndex {
        self.dest
    }

    /// Travel time along this edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
