//! Store error types.

use crate::domain::{LocationCode, LocationId, TransportId};

/// Errors from the in-memory network store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No location with this id
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// No transport with this id
    #[error("transport not found: {0}")]
    TransportNotFound(TransportId),

    /// No location carries this code; the resolution failure reported to
    /// route queries before any search runs
    #[error("no location with code {0}")]
    UnknownCode(LocationCode),

    /// Another location already carries this code
    #[error("location code {0} is already in use")]
    DuplicateCode(LocationCode),

    /// The location is still referenced by transports
    #[error("location {0} is referenced by existing transports")]
    LocationInUse(LocationId),
}
