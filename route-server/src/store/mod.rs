//! In-memory persistence for locations and transports.
//!
//! The store is the collaborator boundary the planner consumes from: a
//! lookup of locations by unique code and a full snapshot of scheduled
//! transports, plus the CRUD surface the web layer edits through.

mod error;
mod network;
pub mod seed;

pub use error::StoreError;
pub use network::{Network, NewLocation, NewTransport};
