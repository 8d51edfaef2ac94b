//! Scheduled transport edges.
//!
//! A `Transport` is one directed, scheduled connection between two
//! locations. It uses `Arc<Location>` endpoints for cheap cloning in
//! the route search.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DaySet, Location};

/// Opaque identifier for a stored transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransportId(pub u64);

impl fmt::Display for TransportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a transport moves people.
///
/// Every accepted route contains exactly one `Flight`; all other modes
/// are ground transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportMode {
    Flight,
    Bus,
    Subway,
    Uber,
}

impl TransportMode {
    /// Whether this mode is the air leg of a route.
    pub fn is_flight(&self) -> bool {
        matches!(self, TransportMode::Flight)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportMode::Flight => "FLIGHT",
            TransportMode::Bus => "BUS",
            TransportMode::Subway => "SUBWAY",
            TransportMode::Uber => "UBER",
        };
        f.write_str(name)
    }
}

/// One scheduled, directed transport between two locations, active only
/// on its operating weekdays.
#[derive(Debug, Clone)]
pub struct Transport {
    pub id: TransportId,
    pub origin: Arc<Location>,
    pub destination: Arc<Location>,
    pub mode: TransportMode,
    pub operating_days: DaySet,
}

impl Transport {
    /// Whether this transport runs on the given weekday (Monday=1).
    pub fn operates_on(&self, day: u8) -> bool {
        self.operating_days.contains(day)
    }

    /// Whether this transport is a flight.
    pub fn is_flight(&self) -> bool {
        self.mode.is_flight()
    }
}
