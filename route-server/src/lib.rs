//! Aviation route finder server.
//!
//! A web application that answers: "how do I get from here to there on
//! a given day?" where every itinerary must contain exactly one flight
//! and at most one ground transfer on each side of it.

pub mod cache;
pub mod domain;
pub mod planner;
pub mod store;
pub mod web;
