//! Network document loading.
//!
//! Reads the station and line records from a JSON document of the form
//! `{ "stations": [...], "lines": [...] }`, where each station is
//! `[id, name, lng, lat]` and each line is `[name, {metadata}, ...segments]`.
//! The keyed object forms are accepted too.

mod error;

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::network::{LineRecord, Network, StationRecord};

pub use error::LoadError;

/// Parsed construction input, ready to build a [`Network`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkData {
    #[serde(default)]
    pub stations: Vec<StationRecord>,

    #[serde(default)]
    pub lines: Vec<LineRecord>,
}

impl NetworkData {
    /// Parse a network document from a string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a network document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            stations = data.stations.len(),
            lines = data.lines.len(),
            "loaded network document"
        );

        Ok(data)
    }

    /// Build the network graph.
    pub fn into_network(self) -> Network {
        Network::new(self.stations, self.lines)
    }
}
