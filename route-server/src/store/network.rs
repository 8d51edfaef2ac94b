//! In-memory location and transport tables.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    DaySet, Location, LocationCode, LocationId, Transport, TransportId, TransportMode,
};

use super::StoreError;

/// Payload for creating or updating a location.
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

/// Payload for creating or updating a transport. Endpoints are given by
/// location id and resolved against the location table.
#[derive(Debug, Clone)]
pub struct NewTransport {
    pub origin: LocationId,
    pub destination: LocationId,
    pub mode: TransportMode,
    pub operating_days: DaySet,
}

#[derive(Debug, Default)]
struct NetworkInner {
    locations: BTreeMap<LocationId, Arc<Location>>,
    codes: HashMap<LocationCode, LocationId>,
    transports: BTreeMap<TransportId, Arc<Transport>>,
    next_location_id: u64,
    next_transport_id: u64,
}

impl NetworkInner {
    fn location(&self, id: LocationId) -> Result<&Arc<Location>, StoreError> {
        self.locations
            .get(&id)
            .ok_or(StoreError::LocationNotFound(id))
    }

    /// Reject a code already held by a location other than `owner`.
    fn check_code_free(
        &self,
        code: &LocationCode,
        owner: Option<LocationId>,
    ) -> Result<(), StoreError> {
        match self.codes.get(code) {
            Some(&holder) if Some(holder) != owner => {
                Err(StoreError::DuplicateCode(code.clone()))
            }
            _ => Ok(()),
        }
    }
}

/// Thread-safe in-memory network of locations and transports.
///
/// Cheap to clone; all clones share the same tables. Ids are assigned
/// monotonically and listings are in id order, so the transport snapshot
/// consumed by the planner is stable between calls, which is what makes
/// route discovery order reproducible.
#[derive(Clone, Default)]
pub struct Network {
    inner: Arc<RwLock<NetworkInner>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// All locations, in id order.
    pub async fn locations(&self) -> Vec<Arc<Location>> {
        let guard = self.inner.read().await;
        guard.locations.values().cloned().collect()
    }

    /// Look up a location by id.
    pub async fn location(&self, id: LocationId) -> Result<Arc<Location>, StoreError> {
        let guard = self.inner.read().await;
        guard.location(id).cloned()
    }

    /// Look up a location by its unique code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCode` if no location carries the code.
    pub async fn location_by_code(
        &self,
        code: &LocationCode,
    ) -> Result<Arc<Location>, StoreError> {
        let guard = self.inner.read().await;
        let id = guard
            .codes
            .get(code)
            .ok_or_else(|| StoreError::UnknownCode(code.clone()))?;
        guard.location(*id).cloned()
    }

    /// Create a location.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCode` if the code is already taken.
    pub async fn create_location(&self, new: NewLocation) -> Result<Arc<Location>, StoreError> {
        let mut guard = self.inner.write().await;
        guard.check_code_free(&new.code, None)?;

        guard.next_location_id += 1;
        let id = LocationId(guard.next_location_id);
        let location = Arc::new(Location {
            id,
            name: new.name,
            country: new.country,
            city: new.city,
            code: new.code.clone(),
        });

        guard.codes.insert(new.code, id);
        guard.locations.insert(id, Arc::clone(&location));
        Ok(location)
    }

    /// Replace a location's fields; its identity never changes.
    ///
    /// Transports referencing the location are re-pointed at the updated
    /// value, so later snapshots embed the fresh fields.
    ///
    /// # Errors
    ///
    /// Returns `LocationNotFound` for an unknown id and `DuplicateCode`
    /// when the new code belongs to a different location.
    pub async fn update_location(
        &self,
        id: LocationId,
        new: NewLocation,
    ) -> Result<Arc<Location>, StoreError> {
        let mut guard = self.inner.write().await;

        let old_code = guard.location(id)?.code.clone();
        guard.check_code_free(&new.code, Some(id))?;

        let updated = Arc::new(Location {
            id,
            name: new.name,
            country: new.country,
            city: new.city,
            code: new.code.clone(),
        });

        guard.codes.remove(&old_code);
        guard.codes.insert(new.code, id);
        guard.locations.insert(id, Arc::clone(&updated));

        let stale: Vec<Arc<Transport>> = guard
            .transports
            .values()
            .filter(|t| t.origin.id == id || t.destination.id == id)
            .cloned()
            .collect();
        for old in stale {
            let rebuilt = Arc::new(Transport {
                id: old.id,
                origin: if old.origin.id == id {
                    Arc::clone(&updated)
                } else {
                    Arc::clone(&old.origin)
                },
                destination: if old.destination.id == id {
                    Arc::clone(&updated)
                } else {
                    Arc::clone(&old.destination)
                },
                mode: old.mode,
                operating_days: old.operating_days,
            });
            guard.transports.insert(old.id, rebuilt);
        }

        Ok(updated)
    }

    /// Delete a location.
    ///
    /// # Errors
    ///
    /// Returns `LocationNotFound` for an unknown id and `LocationInUse`
    /// when transports still reference it.
    pub async fn delete_location(&self, id: LocationId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard.location(id)?;

        let in_use = guard
            .transports
            .values()
            .any(|t| t.origin.id == id || t.destination.id == id);
        if in_use {
            return Err(StoreError::LocationInUse(id));
        }

        if let Some(removed) = guard.locations.remove(&id) {
            guard.codes.remove(&removed.code);
        }
        Ok(())
    }

    /// Full snapshot of all transports, in id order. This is the input
    /// the planner builds its per-day graph from.
    pub async fn transports(&self) -> Vec<Arc<Transport>> {
        let guard = self.inner.read().await;
        guard.transports.values().cloned().collect()
    }

    /// Look up a transport by id.
    pub async fn transport(&self, id: TransportId) -> Result<Arc<Transport>, StoreError> {
        let guard = self.inner.read().await;
        guard
            .transports
            .get(&id)
            .cloned()
            .ok_or(StoreError::TransportNotFound(id))
    }

    /// Create a transport.
    ///
    /// # Errors
    ///
    /// Returns `LocationNotFound` if either endpoint id is unknown.
    pub async fn create_transport(&self, new: NewTransport) -> Result<Arc<Transport>, StoreError> {
        let mut guard = self.inner.write().await;
        let origin = guard.location(new.origin)?.clone();
        let destination = guard.location(new.destination)?.clone();

        guard.next_transport_id += 1;
        let id = TransportId(guard.next_transport_id);
        let transport = Arc::new(Transport {
            id,
            origin,
            destination,
            mode: new.mode,
            operating_days: new.operating_days,
        });

        guard.transports.insert(id, Arc::clone(&transport));
        Ok(transport)
    }

    /// Replace a transport's endpoints, mode and operating days.
    ///
    /// # Errors
    ///
    /// Returns `TransportNotFound` for an unknown id and
    /// `LocationNotFound` if either new endpoint id is unknown.
    pub async fn update_transport(
        &self,
        id: TransportId,
        new: NewTransport,
    ) -> Result<Arc<Transport>, StoreError> {
        let mut guard = self.inner.write().await;
        if !guard.transports.contains_key(&id) {
            return Err(StoreError::TransportNotFound(id));
        }
        let origin = guard.location(new.origin)?.clone();
        let destination = guard.location(new.destination)?.clone();

        let updated = Arc::new(Transport {
            id,
            origin,
            destination,
            mode: new.mode,
            operating_days: new.operating_days,
        });
        guard.transports.insert(id, Arc::clone(&updated));
        Ok(updated)
    }

    /// Delete a transport.
    ///
    /// # Errors
    ///
    /// Returns `TransportNotFound` for an unknown id.
    pub async fn delete_transport(&self, id: TransportId) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        guard
            .transports
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::TransportNotFound(id))
    }
}
