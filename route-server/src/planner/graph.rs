//! Per-query adjacency index over the transport snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{LocationId, Transport};

/// Adjacency view for one route query: every transport operating on the
/// queried day, grouped by origin location.
///
/// Built fresh from the snapshot for each query and never mutated.
/// Within each origin the snapshot order is preserved, which fixes the
/// order in which the search discovers sibling routes.
#[derive(Debug, Default)]
pub struct RouteGraph {
    adjacency: HashMap<LocationId, Vec<Arc<Transport>>>,
}

impl RouteGraph {
    /// Build the index for `day` (Monday=1 through Sunday=7).
    ///
    /// Transports not operating on `day` are skipped, not an error. A
    /// day outside 1-7 matches no transport and yields an empty graph;
    /// validating the range is the caller's job.
    pub fn build(snapshot: &[Arc<Transport>], day: u8) -> Self {
        let mut adjacency: HashMap<LocationId, Vec<Arc<Transport>>> = HashMap::new();

        for transport in snapshot {
            if transport.operates_on(day) {
                adjacency
                    .entry(transport.origin.id)
                    .or_default()
                    .push(Arc::clone(transport));
            }
        }

        Self { adjacency }
    }

    /// Transports leaving `location` on the queried day, in snapshot
    /// order. Unknown locations have no departures.
    pub fn departures_from(&self, location: LocationId) -> &[Arc<Transport>] {
        self.adjacency
            .get(&location)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of locations with at least one departure.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }
}
