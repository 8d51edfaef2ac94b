//! Constrained depth-first route search.
//!
//! Enumerates every itinerary from an origin to a destination over a
//! [`RouteGraph`]. An itinerary is accepted when it has at most three
//! legs, exactly one of them a flight, with at most one ground transfer
//! before the flight and at most one after, and it never visits the same
//! location twice.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{Location, LocationId, Route, Transport};

use super::graph::RouteGraph;

/// Maximum number of legs in an accepted route.
pub const MAX_LEGS: usize = 3;

/// Find every valid route from `origin` to `destination`.
///
/// Routes are returned in depth-first discovery order, which follows the
/// per-origin transport order in `graph`; structurally distinct routes
/// are all returned, unranked and undeduplicated. An unreachable pair
/// yields an empty vector; the search itself never fails.
pub fn find_routes(graph: &RouteGraph, origin: &Location, destination: &Location) -> Vec<Route> {
    let mut results = Vec::new();
    let mut path: Vec<Arc<Transport>> = Vec::new();
    let mut visited: HashSet<LocationId> = HashSet::new();

    dfs(
        origin.id,
        destination.id,
        graph,
        &mut path,
        &mut visited,
        &mut results,
    );

    results
}

fn dfs(
    current: LocationId,
    target: LocationId,
    graph: &RouteGraph,
    path: &mut Vec<Arc<Transport>>,
    visited: &mut HashSet<LocationId>,
    results: &mut Vec<Route>,
) {
    if current == target {
        // A path that reaches the destination is never extended further,
        // valid or not.
        if is_valid_route(path) {
            if let Ok(route) = Route::new(path.clone()) {
                results.push(route);
            }
        }
        return;
    }

    // Prune: leg budget exhausted.
    if path.len() >= MAX_LEGS {
        return;
    }

    // Prune: a second flight can never become valid.
    let flight_count = path.iter().filter(|leg| leg.is_flight()).count();
    if flight_count > 1 {
        return;
    }

    visited.insert(current);

    for transport in graph.departures_from(current) {
        if visited.contains(&transport.destination.id) {
            continue;
        }
        path.push(Arc::clone(transport));
        dfs(transport.destination.id, target, graph, path, visited, results);
        path.pop();
    }

    visited.remove(&current);
}

/// Authoritative acceptance predicate for a candidate path that reached
/// the destination.
///
/// A path is valid when it has between one and three legs, exactly one
/// of them a flight, with at most one leg before the flight and at most
/// one after. The pruning in the traversal bounds the search space but
/// never substitutes for this check; both must be independently correct.
pub fn is_valid_route(path: &[Arc<Transport>]) -> bool {
    if path.len() > MAX_LEGS {
        return false;
    }

    let flight_count = path.iter().filter(|leg| leg.is_flight()).count();
    if flight_count != 1 {
        return false;
    }

    let Some(flight_index) = path.iter().position(|leg| leg.is_flight()) else {
        return false;
    };

    // At most one transfer on either side of the flight.
    flight_index <= 1 && path.len() - flight_index - 1 <= 1
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{DaySet, LocationCode, TransportId, TransportMode};
    use proptest::prelude::*;

    const LOCATION_COUNT: u64 = 6;

    fn location(id: u64) -> Arc<Location> {
        let code = format!("L{}", char::from(b'A' + id as u8));
        Arc::new(Location {
            id: LocationId(id),
            name: format!("{code} Terminal"),
            country: "Testland".to_owned(),
            city: code.clone(),
            code: LocationCode::parse(&code).unwrap(),
        })
    }

    fn arb_mode() -> impl Strategy<Value = TransportMode> {
        prop_oneof![
            Just(TransportMode::Flight),
            Just(TransportMode::Bus),
            Just(TransportMode::Subway),
            Just(TransportMode::Uber),
        ]
    }

    /// Edges as (origin index, destination index, mode, operating days).
    fn arb_edges() -> impl Strategy<Value = Vec<(u64, u64, TransportMode, Vec<u8>)>> {
        proptest::collection::vec(
            (
                0..LOCATION_COUNT,
                0..LOCATION_COUNT,
                arb_mode(),
                proptest::collection::vec(1u8..=7, 0..4),
            ),
            0..16,
        )
    }

    fn build_snapshot(edges: &[(u64, u64, TransportMode, Vec<u8>)]) -> Vec<Arc<Transport>> {
        let locations: Vec<Arc<Location>> = (0..LOCATION_COUNT).map(location).collect();

        edges
            .iter()
            .enumerate()
            .map(|(i, (from, to, mode, days))| {
                Arc::new(Transport {
                    id: TransportId(i as u64 + 1),
                    origin: Arc::clone(&locations[*from as usize]),
                    destination: Arc::clone(&locations[*to as usize]),
                    mode: *mode,
                    operating_days: DaySet::from_days(days).unwrap(),
                })
            })
            .collect()
    }

    proptest! {
        /// Every accepted route satisfies every structural invariant:
        /// bounded length, exactly one flight, flight position, simple
        /// path, connectivity, endpoints, and day filtering.
        #[test]
        fn accepted_routes_satisfy_invariants(edges in arb_edges(), day in 1u8..=7) {
            let snapshot = build_snapshot(&edges);
            let origin = location(0);
            let destination = location(1);

            let graph = RouteGraph::build(&snapshot, day);
            let routes = find_routes(&graph, &origin, &destination);

            for route in &routes {
                let legs = route.legs();

                // Bounded length
                prop_assert!((1..=MAX_LEGS).contains(&legs.len()));

                // Exactly one flight
                let flights = legs.iter().filter(|leg| leg.is_flight()).count();
                prop_assert_eq!(flights, 1);

                // Flight position: at most one leg on either side
                let flight_index = legs.iter().position(|leg| leg.is_flight()).unwrap();
                prop_assert!(flight_index <= 1);
                prop_assert!(legs.len() - flight_index - 1 <= 1);

                // Endpoints
                prop_assert_eq!(legs[0].origin.id, origin.id);
                prop_assert_eq!(legs[legs.len() - 1].destination.id, destination.id);

                // Connectivity
                for window in legs.windows(2) {
                    prop_assert_eq!(window[0].destination.id, window[1].origin.id);
                }

                // Simple path: no location appears twice
                let mut seen = std::collections::HashSet::new();
                prop_assert!(seen.insert(legs[0].origin.id));
                for leg in legs.iter() {
                    prop_assert!(seen.insert(leg.destination.id));
                }

                // Day filtering
                for leg in legs.iter() {
                    prop_assert!(leg.operates_on(day));
                }

                // The authoritative predicate agrees
                prop_assert!(is_valid_route(legs));
            }
        }

        /// Distinct transport sequences are never reported twice.
        #[test]
        fn no_duplicate_leg_sequences(edges in arb_edges(), day in 1u8..=7) {
            let snapshot = build_snapshot(&edges);
            let origin = location(0);
            let destination = location(1);

            let graph = RouteGraph::build(&snapshot, day);
            let routes = find_routes(&graph, &origin, &destination);

            let mut sequences = std::collections::HashSet::new();
            for route in &routes {
                let ids: Vec<u64> = route.legs().iter().map(|leg| leg.id.0).collect();
                prop_assert!(sequences.insert(ids));
            }
        }
    }
}
