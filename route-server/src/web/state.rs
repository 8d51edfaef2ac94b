//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedRouteFinder;
use crate::store::Network;

/// Shared application state.
///
/// Contains the store and the cached route finder every handler needs.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory network of locations and transports
    pub network: Network,

    /// Cached route finder over the same network
    pub finder: Arc<CachedRouteFinder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: Network, finder: CachedRouteFinder) -> Self {
        Self {
            network,
            finder: Arc::new(finder),
        }
    }
}
