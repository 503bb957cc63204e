//! The result of a successful routing query.

use std::fmt;

use crate::network::{Connection, Network, Station, StationIndex};

/// One traversed connection, identified by its source station and its
/// position in that station's connection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LegRef {
    pub(crate) from: StationIndex,
    pub(crate) connection: usize,
}

/// A single step of a route.
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    pub from: &'a Station,
    pub connection: &'a Connection,
    pub to: &'a Station,
}

impl Leg<'_> {
    pub fn line(&self) -> &str {
        self.connection.line()
    }

    pub fn direction(&self) -> &str {
        self.connection.direction()
    }

    pub fn travel_time(&self) -> f64 {
        self.connection.weight()
    }
}

/// An ordered path through a [`Network`], start and destination included.
///
/// A route from a station to itself has one station and no legs.
#[derive(Clone)]
pub struct Route<'a> {
    network: &'a Network,
    start: StationIndex,
    legs: Vec<LegRef>,
}

impl<'a> Route<'a> {
    pub(crate) fn new(network: &'a Network, start: StationIndex, legs: Vec<LegRef>) -> Self {
        Self {
            network,
            start,
            legs,
        }
    }

    /// The stations along the route, in travel order.
    pub fn stations(&self) -> Vec<&'a Station> {
        let network = self.network;
        std::iter::once(network.get(self.start))
            .chain(self.legs().into_iter().map(|leg| leg.to))
            .collect()
    }

    /// Station names along the route, in their original case.
    pub fn names(&self) -> Vec<&'a str> {
        self.stations().into_iter().map(Station::name).collect()
    }

    /// The connections taken, in travel order.
    pub fn legs(&self) -> Vec<Leg<'a>> {
        let network = self.network;
        self.legs
            .iter()
            .map(|leg| {
                let from = network.get(leg.from);
                let connection = &from.connections()[leg.connection];
                Leg {
                    from,
                    connection,
                    to: network.destination(connection),
                }
            })
            .collect()
    }

    pub fn start(&self) -> &'a Station {
        self.network.get(self.start)
    }

    pub fn destination(&self) -> &'a Station {
        self.legs()
            .last()
            .map_or_else(|| self.start(), |leg| leg.to)
    }

    /// Sum of the travel times of every leg.
    pub fn total_time(&self) -> f64 {
        self.legs().iter().map(Leg::travel_time).sum()
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.legs.len() + 1
    }

    /// Always false: a route contains at least its start station.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl PartialEq for Route<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.network, other.network)
            && self.start == other.start
            && self.legs == other.legs
    }
}

impl fmt::Debug for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("stations", &self.names())
            .field("total_time", &self.total_time())
            .finish()
    }
}

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.start().name())?;
        for leg in self.legs() {
            write!(f, " -[{} {}]-> {}", leg.line(), leg.direction(), leg.to.name())?;
        }
        Ok(())
    }
}
