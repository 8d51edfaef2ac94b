//! Domain error types.
//!
//! These errors represent validation failures in the domain layer,
//! distinct from store and web errors.

use super::LocationCode;

/// Domain-level validation failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no transports
    #[error("route must contain at least one transport")]
    EmptyRoute,

    /// Consecutive transports in a route don't connect
    #[error("transports do not connect: arrival at {0} followed by departure from {1}")]
    DisconnectedRoute(LocationCode, LocationCode),
}
