//! Planar station positions.

use serde::{Deserialize, Serialize};

/// A station's position on the network plane.
///
/// The coordinates are treated as a flat Cartesian plane: distances are plain
/// Euclidean distances in whatever unit the source data uses. There is no
/// geographic projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Straight-line distance to another position.
    ///
    /// This is both the travel time of an edge and the search heuristic, so
    /// the heuristic never overestimates.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.lng - other.lng).hypot(self.lat - other.lat)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn position() -> impl Strategy<Value = Position> {
        (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(|(lng, lat)| Position::new(lng, lat))
    }

    proptest! {
        #[test]
        fn symmetric(a in position(), b in position()) {
            prop_assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }

        #[test]
        fn non_negative(a in position(), b in position()) {
            prop_assert!(a.distance_to(&b) >= 0.0);
        }

        /// The triangle inequality is what makes the heuristic consistent
        #[test]
        fn triangle_inequality(a in position(), b in position(), c in position()) {
            let direct = a.distance_to(&c);
            let via = a.distance_to(&b) + b.distance_to(&c);
            prop_assert!(direct <= via + 1e-9);
        }
    }
}
