//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{LineMetadata, Network, Station};
use crate::planner::{Route, RouteResult};

/// Query for a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Starting station name (any case)
    pub from: String,

    /// Destination station name (any case)
    pub to: String,
}

/// Outcome of a routing query.
///
/// Exactly one of `path` and `message` is present.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Whether a route was found
    pub success: bool,

    /// Station names along the route, start and destination included
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,

    /// Legs taken, in travel order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legs: Option<Vec<LegResult>>,

    /// Total travel time along the route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,

    /// Why no route was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One leg of a route.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LegResult {
    /// Line the leg travels on
    pub line: String,

    /// Direction label along the line
    pub direction: String,

    /// Station the leg starts at
    pub from: String,

    /// Station the leg ends at
    pub to: String,

    /// Travel time for this leg
    pub travel_time: f64,
}

/// A station and its outgoing connections.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Source-assigned id
    pub id: i64,

    /// Name in original case
    pub name: String,

    pub lng: f64,
    pub lat: f64,

    /// Outgoing connections, in network order
    pub connections: Vec<ConnectionResult>,
}

/// A directed connection leaving a station.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub line: String,
    pub direction: String,

    /// Destination station name
    pub dest: String,

    /// Travel time along the connection
    pub weight: f64,
}

/// A line and its metadata.
#[derive(Debug, Serialize)]
pub struct LineResult {
    pub name: String,
    pub metadata: LineMetadata,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResponse {
    /// Create from a routing outcome.
    pub fn from_result(result: &RouteResult<'_>) -> Self {
        match result {
            Ok(route) => Self::from_route(route),
            Err(e) => Self {
                success: false,
                path: None,
                legs: None,
                total_time: None,
                message: Some(e.to_string()),
            },
        }
    }

    fn from_route(route: &Route<'_>) -> Self {
        let legs = route
            .legs()
            .iter()
            .map(|leg| LegResult {
                line: leg.line().to_string(),
                direction: leg.direction().to_string(),
                from: leg.from.name().to_string(),
                to: leg.to.name().to_string(),
                travel_time: leg.travel_time(),
            })
            .collect();

        Self {
            success: true,
            path: Some(route.names().into_iter().map(String::from).collect()),
            legs: Some(legs),
            total_time: Some(route.total_time()),
            message: None,
        }
    }
}

impl StationResult {
    /// Create from a station, resolving connection destinations.
    pub fn from_station(station: &Station, network: &Network) -> Self {
        let connections = station
            .connections()
            .iter()
            .map(|c| ConnectionResult {
                line: c.line().to_string(),
                direction: c.direction().to_string(),
                dest: network.destination(c).name().to_string(),
                weight: c.weight(),
            })
            .collect();

        Self {
            id: station.id().0,
            name: station.name().to_string(),
            lng: station.lng(),
            lat: station.lat(),
            connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use serde_json::json;

    #[test]
    fn route_response_from_success() {
        let network = fixtures::network();
        let response = RouteResponse::from_result(&network.route("A", "I"));

        assert!(response.success);
        assert_eq!(
            response.path,
            Some(vec!["a".to_string(), "e".to_string(), "f".to_string(), "i".to_string()])
        );
        assert_eq!(response.total_time, Some(37.0));
        assert!(response.message.is_none());

        let legs = response.legs.unwrap();
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[1].line, "Delta");
        assert_eq!(legs[1].direction, "E");
        assert_eq!(legs[1].from, "e");
        assert_eq!(legs[1].to, "f");
    }

    #[test]
    fn route_response_from_failure() {
        let network = fixtures::network();
        let response = RouteResponse::from_result(&network.route("fakeStation1", "b"));

        assert!(!response.success);
        assert!(response.path.is_none());
        assert!(response.legs.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("unknown starting station: fakeStation1")
        );
    }

    #[test]
    fn failure_serializes_without_path() {
        let network = fixtures::network();
        let response = RouteResponse::from_result(&network.route("a", "fakeStation2"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": false,
                "message": "unknown destination station: fakeStation2"
            })
        );
    }

    #[test]
    fn success_serializes_without_message() {
        let network = fixtures::network();
        let response = RouteResponse::from_result(&network.route("a", "e"));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["path"], json!(["a", "e"]));
        assert_eq!(value["total_time"], json!(15.0));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn station_result_lists_connections() {
        let network = fixtures::network();
        let station = network.station("a").unwrap();
        let result = StationResult::from_station(station, &network);

        assert_eq!(result.id, 0);
        assert_eq!(result.name, "a");
        assert_eq!(result.lng, 20.0);
        assert_eq!(result.lat, 5.0);
        assert_eq!(result.connections.len(), 1);
        assert_eq!(result.connections[0].line, "Alpha");
        assert_eq!(result.connections[0].direction, "S");
        assert_eq!(result.connections[0].dest, "e");
        assert_eq!(result.connections[0].weight, 15.0);
    }
}
