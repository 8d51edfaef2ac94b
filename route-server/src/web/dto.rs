//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DaySet, Location, LocationCode, Route, Transport, TransportMode};

/// Request body for creating or updating a location.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

/// A location in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: u64,
    pub name: String,
    pub country: String,
    pub city: String,
    pub code: LocationCode,
}

impl From<&Location> for LocationResponse {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id.0,
            name: location.name.clone(),
            country: location.country.clone(),
            city: location.city.clone(),
            code: location.code.clone(),
        }
    }
}

/// Request body for creating or updating a transport.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub origin_id: u64,
    pub destination_id: u64,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub operating_days: DaySet,
}

/// A transport in responses, with its endpoints embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportResponse {
    pub id: u64,
    pub origin: LocationResponse,
    pub destination: LocationResponse,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub operating_days: DaySet,
}

impl From<&Transport> for TransportResponse {
    fn from(transport: &Transport) -> Self {
        Self {
            id: transport.id.0,
            origin: LocationResponse::from(transport.origin.as_ref()),
            destination: LocationResponse::from(transport.destination.as_ref()),
            mode: transport.mode,
            operating_days: transport.operating_days,
        }
    }
}

/// One found route on the wire: the ordered transports to take.
pub type RouteResponse = Vec<TransportResponse>;

/// Render a route as its leg sequence.
pub fn route_to_response(route: &Route) -> RouteResponse {
    route
        .legs()
        .iter()
        .map(|leg| TransportResponse::from(leg.as_ref()))
        .collect()
}

/// Error body returned by all handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
