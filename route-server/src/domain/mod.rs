//! Domain types for the route finder.
//!
//! This module contains the core domain model: locations, the scheduled
//! transports that connect them, and accepted routes. Types enforce their
//! invariants at construction time, so code that receives these values
//! can trust their validity.

mod code;
mod day;
mod error;
mod location;
mod route;
mod transport;

pub use code::{InvalidCode, LocationCode};
pub use day::{DaySet, InvalidDay};
pub use error::DomainError;
pub use location::{Location, LocationId};
pub use route::Route;
pub use transport::{Transport, TransportId, TransportMode};
