//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A source-assigned station identifier.
///
/// Line segments refer to stations by id; the id carries no ordering or
/// positional meaning beyond that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub i64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for StationId {
    fn from(id: i64) -> Self {
        StationId(id)
    }
}

/// A case-normalized station name, used as the lookup key for stations.
///
/// Station names are matched case-insensitively everywhere a caller supplies
/// one. The original spelling is kept on the station itself; this key only
/// exists for lookup.
///
/// # Examples
///
/// ```
/// use network_router::domain::StationKey;
///
/// let key = StationKey::new("Kings Cross");
/// assert_eq!(key.as_str(), "kings cross");
/// assert_eq!(key, StationKey::new("KINGS CROSS"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationKey(String);

impl StationKey {
    /// Normalize a station name into a lookup key.
    pub fn new(name: &str) -> Self {
        StationKey(name.to_lowercase())
    }

    /// Returns the normalized key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lowercases() {
        assert_eq!(StationKey::new("ABC").as_str(), "abc");
        assert_eq!(StationKey::new("aBc").as_str(), "abc");
        assert_eq!(StationKey::new("abc").as_str(), "abc");
    }

    #[test]
    fn key_keeps_spacing_and_punctuation() {
        assert_eq!(
            StationKey::new("St. Pancras International").as_str(),
            "st. pancras international"
        );
    }

    #[test]
    fn key_equality_ignores_case() {
        assert_eq!(StationKey::new("Euston"), StationKey::new("EUSTON"));
        assert_ne!(StationKey::new("Euston"), StationKey::new("Euston Square"));
    }

    #[test]
    fn key_handles_non_ascii() {
        assert_eq!(StationKey::new("ÖSTERPORT"), StationKey::new("österport"));
    }

    #[test]
    fn id_display_and_debug() {
        let id = StationId(42);
        assert_eq!(format!("{}", id), "42");
        assert_eq!(format!("{:?}", id), "StationId(42)");
    }

    #[test]
    fn id_deserializes_from_bare_integer() {
        let id: StationId = serde_json::from_str("7").unwrap();
        assert_eq!(id, StationId(7));
    }
}
