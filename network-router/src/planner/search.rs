//! A* route search.
//!
//! The heuristic is the straight-line distance to the goal, which is the
//! same function that weights every edge, so it never overestimates and the
//! first time the goal is popped its cost is optimal.
//!
//! The frontier orders entries by estimated total cost, then by cost so far,
//! then by discovery order. Ties between equal-cost paths therefore resolve
//! the same way on every run.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::network::{Network, StationIndex};

use super::error::RouteError;
use super::route::{LegRef, Route};

/// Outcome of a routing query.
pub type RouteResult<'a> = Result<Route<'a>, RouteError>;

/// Frontier entry.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Cost so far plus heuristic.
    estimate: f64,
    /// Cost so far.
    cost: f64,
    /// Discovery order.
    seq: u64,
    station: StationIndex,
}

// BinaryHeap is a max-heap; flip every comparison so the cheapest entry pops first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.cost.total_cmp(&self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Per-query search bookkeeping. Never shared between queries.
struct SearchState {
    frontier: BinaryHeap<Candidate>,
    best_cost: Vec<f64>,
    predecessor: Vec<Option<LegRef>>,
    next_seq: u64,
    expanded: usize,
}

impl SearchState {
    fn new(stations: usize) -> Self {
        Self {
            frontier: BinaryHeap::new(),
            best_cost: vec![f64::INFINITY; stations],
            predecessor: vec![None; stations],
            next_seq: 0,
            expanded: 0,
        }
    }

    fn push(&mut self, station: StationIndex, cost: f64, heuristic: f64) {
        self.frontier.push(Candidate {
            estimate: cost + heuristic,
            cost,
            seq: self.next_seq,
            station,
        });
        self.next_seq += 1;
    }

    /// Record a cheaper way to reach `station`. Returns false unless `cost`
    /// is strictly lower than the best seen so far.
    fn relax(&mut self, station: StationIndex, cost: f64, via: LegRef) -> bool {
        if cost < self.best_cost[station.0] {
            self.best_cost[station.0] = cost;
            self.predecessor[station.0] = Some(via);
            true
        } else {
            false
        }
    }

    /// Walk predecessors back from `goal`.
    fn legs_to(&self, goal: StationIndex) -> Vec<LegRef> {
        let mut legs = Vec::new();
        let mut current = goal;
        while let Some(leg) = self.predecessor[current.0] {
            legs.push(leg);
            current = leg.from;
        }
        legs.reverse();
        legs
    }
}

/// Route planner over a borrowed network.
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Find the shortest-time route between two station names.
    ///
    /// The start is resolved first, so when both names are unknown the
    /// error names the start.
    pub fn route(&self, from: &str, to: &str) -> RouteResult<'a> {
        let start = self
            .network
            .resolve(from)
            .ok_or_else(|| RouteError::UnknownStart(from.to_string()))?;
        let goal = self
            .network
            .resolve(to)
            .ok_or_else(|| RouteError::UnknownDestination(to.to_string()))?;

        self.search(start, goal).ok_or_else(|| RouteError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    fn search(&self, start: StationIndex, goal: StationIndex) -> Option<Route<'a>> {
        let network = self.network;
        let target = network.get(goal).position();
        let heuristic = |station: StationIndex| network.get(station).position().distance_to(&target);

        let mut state = SearchState::new(network.len());
        state.best_cost[start.0] = 0.0;
        state.push(start, 0.0, heuristic(start));

        while let Some(candidate) = state.frontier.pop() {
            // Superseded by a cheaper push of the same station.
            if candidate.cost > state.best_cost[candidate.station.0] {
                continue;
            }

            if candidate.station == goal {
                debug!(
                    expanded = state.expanded,
                    pushed = state.next_seq,
                    cost = candidate.cost,
                    "route found"
                );
                return Some(Route::new(network, start, state.legs_to(goal)));
            }

            state.expanded += 1;
            let station = network.get(candidate.station);
            trace!(station = %station.name(), cost = candidate.cost, "expanding");

            for (i, connection) in station.connections().iter().enumerate() {
                let next = connection.dest();
                let cost = candidate.cost + connection.weight();
                let via = LegRef {
                    from: candidate.station,
                    connection: i,
                };
                if state.relax(next, cost, via) {
                    state.push(next, cost, heuristic(next));
                }
            }
        }

        debug!(
            expanded = state.expanded,
            pushed = state.next_seq,
            "frontier exhausted without reaching destination"
        );
        None
    }
}
