//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{Datelike, NaiveDate};
use tower_http::trace::TraceLayer;

use crate::domain::{LocationCode, LocationId, TransportId};
use crate::store::{NewLocation, NewTransport, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations", get(list_locations).post(create_location))
        .route(
            "/api/locations/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
        .route(
            "/api/transportations",
            get(list_transports).post(create_transport),
        )
        .route(
            "/api/transportations/:id",
            get(get_transport)
                .put(update_transport)
                .delete(delete_transport),
        )
        .route("/api/routes/:origin/:destination/:date", get(find_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn list_locations(State(state): State<AppState>) -> Json<Vec<LocationResponse>> {
    let locations = state.network.locations().await;
    Json(
        locations
            .iter()
            .map(|location| LocationResponse::from(location.as_ref()))
            .collect(),
    )
}

async fn create_location(
    State(state): State<AppState>,
    Json(req): Json<LocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    let created = state
        .network
        .create_location(NewLocation {
            name: req.name,
            country: req.country,
            city: req.city,
            code: req.code,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LocationResponse::from(created.as_ref())),
    ))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LocationResponse>, AppError> {
    let location = state.network.location(LocationId(id)).await?;
    Ok(Json(LocationResponse::from(location.as_ref())))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<LocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let updated = state
        .network
        .update_location(
            LocationId(id),
            NewLocation {
                name: req.name,
                country: req.country,
                city: req.city,
                code: req.code,
            },
        )
        .await?;

    // Routes may embed the old field values
    state.finder.invalidate_cache();

    Ok(Json(LocationResponse::from(updated.as_ref())))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.network.delete_location(LocationId(id)).await?;
    state.finder.invalidate_cache();
    Ok(StatusCode::NO_CONTENT)
}

async fn list_transports(State(state): State<AppState>) -> Json<Vec<TransportResponse>> {
    let transports = state.network.transports().await;
    Json(
        transports
            .iter()
            .map(|transport| TransportResponse::from(transport.as_ref()))
            .collect(),
    )
}

async fn create_transport(
    State(state): State<AppState>,
    Json(req): Json<TransportRequest>,
) -> Result<(StatusCode, Json<TransportResponse>), AppError> {
    let created = state
        .network
        .create_transport(NewTransport {
            origin: LocationId(req.origin_id),
            destination: LocationId(req.destination_id),
            mode: req.mode,
            operating_days: req.operating_days,
        })
        .await?;

    state.finder.invalidate_cache();

    Ok((
        StatusCode::CREATED,
        Json(TransportResponse::from(created.as_ref())),
    ))
}

async fn get_transport(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TransportResponse>, AppError> {
    let transport = state.network.transport(TransportId(id)).await?;
    Ok(Json(TransportResponse::from(transport.as_ref())))
}

async fn update_transport(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<TransportRequest>,
) -> Result<Json<TransportResponse>, AppError> {
    let updated = state
        .network
        .update_transport(
            TransportId(id),
            NewTransport {
                origin: LocationId(req.origin_id),
                destination: LocationId(req.destination_id),
                mode: req.mode,
                operating_days: req.operating_days,
            },
        )
        .await?;

    state.finder.invalidate_cache();

    Ok(Json(TransportResponse::from(updated.as_ref())))
}

async fn delete_transport(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.network.delete_transport(TransportId(id)).await?;
    state.finder.invalidate_cache();
    Ok(StatusCode::NO_CONTENT)
}

/// Search routes between two location codes on a calendar date.
async fn find_routes(
    State(state): State<AppState>,
    Path((origin, destination, date)): Path<(String, String, String)>,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    let origin_code =
        LocationCode::parse_normalized(&origin).map_err(|e| AppError::BadRequest {
            message: format!("invalid origin code {origin:?}: {e}"),
        })?;
    let destination_code =
        LocationCode::parse_normalized(&destination).map_err(|e| AppError::BadRequest {
            message: format!("invalid destination code {destination:?}: {e}"),
        })?;
    let day = parse_travel_day(&date)?;

    let routes = state
        .finder
        .find_routes(&origin_code, &destination_code, day)
        .await?;

    Ok(Json(routes.iter().map(route_to_response).collect()))
}

/// Parse an ISO `YYYY-MM-DD` date into a weekday number, Monday=1
/// through Sunday=7.
fn parse_travel_day(raw: &str) -> Result<u8, AppError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
        message: format!("invalid date {raw:?} (expected YYYY-MM-DD)"),
    })?;
    Ok(date.weekday().number_from_monday() as u8)
}

/// Error responses from web handlers.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match &e {
            StoreError::LocationNotFound(_)
            | StoreError::TransportNotFound(_)
            | StoreError::UnknownCode(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StoreError::DuplicateCode(_) | StoreError::LocationInUse(_) => AppError::Conflict {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(status = %status, message = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
