//! Graph construction from raw records.
//!
//! Construction never fails. Malformed input is logged and left out:
//! segment pairs naming an unknown station id are skipped, and a station
//! record whose name (case-insensitively) or id repeats an earlier one
//! replaces it, so the last record wins.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::domain::{StationId, StationKey};

use super::graph::{Connection, Station, StationIndex};
use super::records::{LineMetadata, LineRecord, StationRecord};
use super::Network;

/// Counters describing what construction kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Stations in the finished graph.
    pub stations: usize,

    /// Directed connections in the finished graph.
    pub connections: usize,

    /// Adjacent pairs skipped because an id did not resolve.
    pub skipped_edges: usize,

    /// Station records replaced by a later record with the same name or id.
    pub replaced_stations: usize,
}

pub(super) fn build(station_records: Vec<StationRecord>, line_records: Vec<LineRecord>) -> Network {
    let mut stats = BuildStats::default();

    let kept = dedupe_stations(station_records, &mut stats);

    let mut stations = Vec::with_capacity(kept.len());
    let mut by_key = HashMap::with_capacity(kept.len());
    let mut by_id = HashMap::with_capacity(kept.len());

    for (i, record) in kept.into_iter().enumerate() {
        let index = StationIndex(i);
        by_key.insert(StationKey::new(&record.name), index);
        by_id.insert(record.id, index);
        stations.push(Station {
            index,
            id: record.id,
            position: record.position(),
            name: record.name,
            connections: Vec::new(),
        });
    }

    let mut line_data: HashMap<String, LineMetadata> = HashMap::with_capacity(line_records.len());

    for line in line_records {
        if line_data.insert(line.name.clone(), line.metadata).is_some() {
            warn!(line = %line.name, "duplicate line name, keeping the last metadata");
        }

        for segment in &line.segments {
            for pair in segment.connections.windows(2) {
                let (from_id, to_id) = (pair[0], pair[1]);
                let (Some(&from), Some(&to)) = (by_id.get(&from_id), by_id.get(&to_id)) else {
                    warn!(
                        line = %line.name,
                        from = %from_id,
                        to = %to_id,
                        "segment names an unknown station, skipping edge"
                    );
                    stats.skipped_edges += 1;
                    continue;
                };

                let weight = stations[from.0]
                    .position
                    .distance_to(&stations[to.0].position);

                stations[from.0].connections.push(Connection {
                    line: line.name.clone(),
                    direction: segment.direction.clone(),
                    dest: to,
                    weight,
                });
                stations[to.0].connections.push(Connection {
                    line: line.name.clone(),
                    direction: segment.opposing_direction.clone(),
                    dest: from,
                    weight,
                });
                stats.connections += 2;
            }
        }

        debug!(line = %line.name, segments = line.segments.len(), "line processed");
    }

    stats.stations = stations.len();

    info!(
        stations = stats.stations,
        connections = stats.connections,
        lines = line_data.len(),
        skipped_edges = stats.skipped_edges,
        replaced_stations = stats.replaced_stations,
        "network built"
    );

    Network {
        stations,
        by_key,
        by_id,
        line_data,
        stats,
    }
}

/// Drop station records shadowed by a later record with the same
/// normalized name or the same id. Survivors keep their input order.
fn dedupe_stations(records: Vec<StationRecord>, stats: &mut BuildStats) -> Vec<StationRecord> {
    let mut slots: Vec<Option<StationRecord>> = Vec::with_capacity(records.len());
    let mut by_key: HashMap<StationKey, usize> = HashMap::with_capacity(records.len());
    let mut by_id: HashMap<StationId, usize> = HashMap::with_capacity(records.len());

    for record in records {
        let slot = slots.len();
        let previous = [
            by_key.insert(StationKey::new(&record.name), slot),
            by_id.insert(record.id, slot),
        ];

        for prev in previous.into_iter().flatten() {
            // Entries left behind by an earlier replacement point at empty slots.
            if let Some(replaced) = slots[prev].take() {
                warn!(
                    id = %record.id,
                    name = %record.name,
                    replaced_id = %replaced.id,
                    replaced_name = %replaced.name,
                    "duplicate station, keeping the later record"
                );
                stats.replaced_stations += 1;
            }
        }

        slots.push(Some(record));
    }

    slots.into_iter().flatten().collect()
}
