//! Raw construction input.
//!
//! These are the shapes an external loader hands to [`Network::new`]. Both
//! stations and lines accept either a positional array, as produced by the
//! original data files, or a keyed object.
//!
//! [`Network::new`]: super::Network::new

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::domain::{Position, StationId};

/// Open set of line-level attributes (display colour and the like).
///
/// Kept alongside the graph for callers; routing never looks at it.
pub type LineMetadata = serde_json::Map<String, serde_json::Value>;

/// One station: `[id, name, lng, lat]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub lng: f64,
    pub lat: f64,
}

impl StationRecord {
    pub fn new(id: i64, name: impl Into<String>, lng: f64, lat: f64) -> Self {
        Self {
            id: StationId(id),
            name: name.into(),
            lng,
            lat,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.lng, self.lat)
    }
}

/// One directional chain of stations within a line.
///
/// Each adjacent pair in `connections` becomes an edge tagged `direction`
/// and a reverse edge tagged `opposing_direction`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub direction: String,
    pub opposing_direction: String,
    #[serde(default)]
    pub connections: Vec<StationId>,
}

impl SegmentRecord {
    pub fn new(
        direction: impl Into<String>,
        opposing_direction: impl Into<String>,
        connections: &[i64],
    ) -> Self {
        Self {
            direction: direction.into(),
            opposing_direction: opposing_direction.into(),
            connections: connections.iter().copied().map(StationId).collect(),
        }
    }
}

/// A named line: `[name, {metadata}, segment, segment, ...]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub name: String,
    pub metadata: LineMetadata,
    pub segments: Vec<SegmentRecord>,
}

impl LineRecord {
    pub fn new(
        name: impl Into<String>,
        metadata: LineMetadata,
        segments: Vec<SegmentRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            metadata,
            segments,
        }
    }
}

impl<'de> Deserialize<'de> for LineRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LineRecordVisitor)
    }
}

struct LineRecordVisitor;

/// Keyed form of a line record.
#[derive(Deserialize)]
struct KeyedLine {
    name: String,
    #[serde(default)]
    metadata: LineMetadata,
    #[serde(default)]
    segments: Vec<SegmentRecord>,
}

impl<'de> Visitor<'de> for LineRecordVisitor {
    type Value = LineRecord;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a line as [name, metadata, ...segments] or {name, metadata, segments}")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<LineRecord, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let name: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let metadata: LineMetadata = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;

        let mut segments = Vec::new();
        while let Some(segment) = seq.next_element::<SegmentRecord>()? {
            segments.push(segment);
        }

        Ok(LineRecord {
            name,
            metadata,
            segments,
        })
    }

    fn visit_map<A>(self, map: A) -> Result<LineRecord, A::Error>
    where
        A: MapAccess<'de>,
    {
        let keyed = KeyedLine::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(LineRecord {
            name: keyed.name,
            metadata: keyed.metadata,
            segments: keyed.segments,
        })
    }
}
