//! Constrained route planning.
//!
//! This module implements the core route-search engine: build a
//! per-query adjacency index over the transport snapshot for the
//! requested weekday, then depth-first enumerate every itinerary that
//! uses at most three transports, exactly one of them a flight, with at
//! most one ground transfer on either side of the flight.

mod graph;
mod search;

pub use graph::RouteGraph;
pub use search::{MAX_LEGS, find_routes, is_valid_route};
