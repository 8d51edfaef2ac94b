//! Location identity and value types.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::LocationCode;

/// Opaque identifier for a stored location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named place that transports run between: an airport, a bus stop, a
/// city-center landmark.
///
/// Immutable value once created. Equality and hashing are by `id` alone,
/// never by code or name: the search's visited-set membership must follow
/// identity even if two records carry equal field values.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
