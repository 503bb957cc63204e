//! The transit network graph.
//!
//! A [`Network`] is built once from station and line records and is
//! immutable afterwards. Stations live in an arena owned by the network;
//! connections refer to their destination by [`StationIndex`], and names
//! resolve case-insensitively through a normalized-key map.
//!
//! ```
//! use network_router::network::{LineMetadata, LineRecord, Network, SegmentRecord, StationRecord};
//!
//! let network = Network::new(
//!     vec![
//!         StationRecord::new(0, "a", 20.0, 5.0),
//!         StationRecord::new(1, "b", 32.0, 5.0),
//!     ],
//!     vec![LineRecord::new(
//!         "Alpha",
//!         LineMetadata::new(),
//!         vec![SegmentRecord::new("E", "W", &[0, 1])],
//!     )],
//! );
//!
//! let route = network.route("A", "B").unwrap();
//! assert_eq!(route.names(), vec!["a", "b"]);
//! assert_eq!(route.total_time(), 12.0);
//! ```

mod build;
mod graph;
mod records;

use std::collections::HashMap;

use crate::domain::{StationId, StationKey};
use crate::planner::{Planner, RouteResult};

pub use build::BuildStats;
pub use graph::{Connection, Station, StationIndex};
pub use records::{LineMetadata, LineRecord, SegmentRecord, StationRecord};

/// An immutable transit network.
///
/// Safe to share between threads; every routing query keeps its own search
/// state.
#[derive(Debug)]
pub struct Network {
    stations: Vec<Station>,
    by_key: HashMap<StationKey, StationIndex>,
    by_id: HashMap<StationId, StationIndex>,
    line_data: HashMap<String, LineMetadata>,
    stats: BuildStats,
}

impl Network {
    /// Build a network from raw records.
    ///
    /// Never fails: unknown station ids in segments are skipped and
    /// duplicate stations keep the last record. See [`BuildStats`] for what
    /// was dropped.
    pub fn new(stations: Vec<StationRecord>, lines: Vec<LineRecord>) -> Self {
        build::build(stations, lines)
    }

    /// Look up a station by name, ignoring case.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.resolve(name).map(|index| self.get(index))
    }

    pub fn station_by_id(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&index| self.get(index))
    }

    /// Resolve a station handle.
    ///
    /// # Panics
    ///
    /// If `index` came from a different network.
    pub fn get(&self, index: StationIndex) -> &Station {
        &self.stations[index.0]
    }

    /// The station a connection leads to.
    pub fn destination(&self, connection: &Connection) -> &Station {
        self.get(connection.dest)
    }

    /// Metadata recorded for a line, by exact line name.
    pub fn line_data(&self, line: &str) -> Option<&LineMetadata> {
        self.line_data.get(line)
    }

    /// All lines and their metadata, in no particular order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &LineMetadata)> {
        self.line_data.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// All stations, in input order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn build_stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Straight-line travel time between two stations.
    pub fn travel_time(&self, from: &Station, to: &Station) -> f64 {
        from.position.distance_to(&to.position)
    }

    /// Find the shortest-time route between two named stations.
    ///
    /// Names are matched case-insensitively. Unknown stations and
    /// unreachable destinations come back as [`RouteError`] values.
    ///
    /// [`RouteError`]: crate::planner::RouteError
    pub fn route(&self, from: &str, to: &str) -> RouteResult<'_> {
        Planner::new(self).route(from, to)
    }

    pub(crate) fn resolve(&self, name: &str) -> Option<StationIndex> {
        self.by_key.get(&StationKey::new(name)).copied()
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::new(Vec::new(), Vec::new())
    }
}
