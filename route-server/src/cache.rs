//! Route computation caching.
//!
//! Route search is the only expensive operation the server performs, and
//! its inputs change only when the network is edited. Computed route
//! sets are cached by (origin code, destination code, day), and the web
//! layer drops the whole cache after every mutation.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{LocationCode, Route};
use crate::planner::{self, RouteGraph};
use crate::store::{Network, StoreError};

/// Cache key: (origin code, destination code, weekday).
type RouteKey = (LocationCode, LocationCode, u8);

/// Cached route set for one query.
type RouteEntry = Arc<Vec<Route>>;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for computed route sets.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached route set.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert a route set into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Route finder with caching.
///
/// Wraps the network with the full search pipeline: resolve the endpoint
/// codes, snapshot the transports, build the per-day graph, run the
/// constrained search.
pub struct CachedRouteFinder {
    network: Network,
    cache: RouteCache,
}

impl CachedRouteFinder {
    /// Create a new cached finder over `network`.
    pub fn new(network: Network, cache_config: &CacheConfig) -> Self {
        Self {
            network,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Find every valid route from `origin` to `destination` on `day`
    /// (Monday=1 through Sunday=7).
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` if either code does not resolve; resolution
    /// happens before any search runs. The search itself is infallible:
    /// an unreachable pair yields an empty route list, not an error.
    pub async fn find_routes(
        &self,
        origin: &LocationCode,
        destination: &LocationCode,
        day: u8,
    ) -> Result<RouteEntry, StoreError> {
        let key = (origin.clone(), destination.clone(), day);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let origin = self.network.location_by_code(origin).await?;
        let destination = self.network.location_by_code(destination).await?;

        let snapshot = self.network.transports().await;
        let graph = RouteGraph::build(&snapshot, day);
        let routes = planner::find_routes(&graph, &origin, &destination);

        tracing::debug!(
            origin = %origin.code,
            destination = %destination.code,
            day,
            found = routes.len(),
            "computed routes"
        );

        let entry = Arc::new(routes);
        self.cache.insert(key, entry.clone()).await;
        Ok(entry)
    }

    /// Drop every cached route set. Called after any network mutation.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}
