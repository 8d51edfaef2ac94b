//! Accepted route type.

use std::sync::Arc;

use super::{DomainError, Location, Transport};

/// An ordered, non-empty sequence of transports where each leg arrives
/// at the location the next one departs from.
///
/// `Route::new` validates the shape, so code holding a `Route` can rely
/// on `origin()` and `destination()` never failing. The search produces
/// routes as defensive copies, decoupled from its mutable traversal
/// state.
#[derive(Debug, Clone)]
pub struct Route {
    legs: Vec<Arc<Transport>>,
}

impl Route {
    /// Construct a route, validating non-emptiness and connectivity.
    ///
    /// # Errors
    ///
    /// Returns `EmptyRoute` for an empty leg list, and
    /// `DisconnectedRoute` when a leg's destination is not the next
    /// leg's origin. Connectivity is judged by location identity.
    pub fn new(legs: Vec<Arc<Transport>>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        for window in legs.windows(2) {
            if window[0].destination.id != window[1].origin.id {
                return Err(DomainError::DisconnectedRoute(
                    window[0].destination.code.clone(),
                    window[1].origin.code.clone(),
                ));
            }
        }

        Ok(Route { legs })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[Arc<Transport>] {
        &self.legs
    }

    /// Number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The route's origin: where its first leg departs from.
    pub fn origin(&self) -> &Arc<Location> {
        // Safe: validated non-empty at construction
        &self.legs.first().unwrap().origin
    }

    /// The route's destination: where its last leg arrives.
    pub fn destination(&self) -> &Arc<Location> {
        // Safe: validated non-empty at construction
        &self.legs.last().unwrap().destination
    }
}
