//! Web layer for the route finder.
//!
//! Provides the REST endpoints for managing locations and transports
//! and for searching routes between them.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
