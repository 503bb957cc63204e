//! Routing error types.

/// Why a routing query produced no route.
///
/// These are expected outcomes of user input, not faults. The display text
/// is meant to be shown to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The starting station name did not resolve.
    #[error("unknown starting station: {0}")]
    UnknownStart(String),

    /// The destination station name did not resolve.
    #[error("unknown destination station: {0}")]
    UnknownDestination(String),

    /// Both stations exist but are not connected.
    #[error("no route found from {from} to {to}")]
    NoRoute { from: String, to: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::UnknownStart("fakeStation1".into());
        assert_eq!(err.to_string(), "unknown starting station: fakeStation1");

        let err = RouteError::UnknownDestination("fakeStation2".into());
        assert_eq!(err.to_string(), "unknown destination station: fakeStation2");

        let err = RouteError::NoRoute {
            from: "a".into(),
            to: "z".into(),
        };
        assert_eq!(err.to_string(), "no route found from a to z");
    }
}
