//! Shared test network.
//!
//! A 23-station grid with seven lines. Psi and Psi2 overlap on the cluster
//! n/v/w, where v and w sit at the same position, so two different lines
//! connect the same stations at different costs.

use serde_json::json;

use crate::network::{LineMetadata, LineRecord, Network, SegmentRecord, StationRecord};

pub fn stations() -> Vec<StationRecord> {
    [
        (0, "a", 20.0, 5.0),
        (1, "b", 32.0, 5.0),
        (2, "c", 40.0, 10.0),
        (3, "d", 7.0, 20.0),
        (4, "e", 20.0, 20.0),
        (5, "f", 32.0, 20.0),
        (6, "g", 52.0, 20.0),
        (7, "h", 20.0, 30.0),
        (8, "i", 32.0, 30.0),
        (9, "j", 40.0, 30.0),
        (10, "k", 7.0, 40.0),
        (11, "l", 20.0, 40.0),
        (12, "m", 32.0, 40.0),
        (13, "n", 50.0, 40.0),
        (14, "o", 14.0, 50.0),
        (15, "p", 20.0, 55.0),
        (16, "q", 32.0, 55.0),
        (17, "r", 50.0, 50.0),
        (18, "s", 50.0, 55.0),
        (19, "t", 60.0, 60.0),
        (20, "u", 50.0, 65.0),
        (21, "v", 50.0, 70.0),
        (22, "w", 50.0, 70.0),
    ]
    .into_iter()
    .map(|(id, name, lng, lat)| StationRecord::new(id, name, lng, lat))
    .collect()
}

pub fn lines() -> Vec<LineRecord> {
    let mut alpha = LineMetadata::new();
    alpha.insert("colour".to_string(), json!("red"));

    vec![
        LineRecord::new(
            "Alpha",
            alpha,
            vec![SegmentRecord::new("S", "N", &[0, 4, 7, 11, 15])],
        ),
        LineRecord::new(
            "Beta",
            LineMetadata::new(),
            vec![
                SegmentRecord::new("S", "N", &[1, 5, 8, 12, 16]),
                SegmentRecord::new("S", "N", &[5, 9]),
            ],
        ),
        LineRecord::new(
            "Delta",
            LineMetadata::new(),
            vec![SegmentRecord::new("E", "W", &[3, 4, 5, 6])],
        ),
        LineRecord::new(
            "Kappa",
            LineMetadata::new(),
            vec![SegmentRecord::new("E", "W", &[10, 11, 12, 13])],
        ),
        LineRecord::new(
            "Omicron",
            LineMetadata::new(),
            vec![SegmentRecord::new("N", "S", &[14, 11, 5, 2])],
        ),
        LineRecord::new(
            "Psi",
            LineMetadata::new(),
            vec![SegmentRecord::new("N", "S", &[22, 21, 20, 19, 18, 17, 13])],
        ),
        LineRecord::new(
            "Psi2",
            LineMetadata::new(),
            vec![SegmentRecord::new("N", "S", &[21, 22, 13])],
        ),
    ]
}

pub fn network() -> Network {
    Network::new(stations(), lines())
}

/// The same network as a JSON document, in the positional form.
pub fn network_json() -> serde_json::Value {
    json!({
        "stations": [
            [0, "a", 20, 5], [1, "b", 32, 5], [2, "c", 40, 10], [3, "d", 7, 20],
            [4, "e", 20, 20], [5, "f", 32, 20], [6, "g", 52, 20], [7, "h", 20, 30],
            [8, "i", 32, 30], [9, "j", 40, 30], [10, "k", 7, 40], [11, "l", 20, 40],
            [12, "m", 32, 40], [13, "n", 50, 40], [14, "o", 14, 50], [15, "p", 20, 55],
            [16, "q", 32, 55], [17, "r", 50, 50], [18, "s", 50, 55], [19, "t", 60, 60],
            [20, "u", 50, 65], [21, "v", 50, 70], [22, "w", 50, 70]
        ],
        "lines": [
            ["Alpha", {"colour": "red"},
                {"direction": "S", "opposingDirection": "N", "connections": [0, 4, 7, 11, 15]}],
            ["Beta", {},
                {"direction": "S", "opposingDirection": "N", "connections": [1, 5, 8, 12, 16]},
                {"direction": "S", "opposingDirection": "N", "connections": [5, 9]}],
            ["Delta", {},
                {"direction": "E", "opposingDirection": "W", "connections": [3, 4, 5, 6]}],
            ["Kappa", {},
                {"direction": "E", "opposingDirection": "W", "connections": [10, 11, 12, 13]}],
            ["Omicron", {},
                {"direction": "N", "opposingDirection": "S", "connections": [14, 11, 5, 2]}],
            ["Psi", {},
                {"direction": "N", "opposingDirection": "S", "connections": [22, 21, 20, 19, 18, 17, 13]}],
            ["Psi2", {},
                {"direction": "N", "opposingDirection": "S", "connections": [21, 22, 13]}]
        ]
    })
}
