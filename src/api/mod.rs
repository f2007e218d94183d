//! API handlers for Ascent REST endpoints

pub mod booking;
pub mod calendar;
pub mod health;
pub mod members;
pub mod openapi;
pub mod slots;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Parse a `YYYY-MM-DD` parameter
pub(crate) fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Reference date given by the client, or the server's local date
pub(crate) fn today_or(state: &AppState, value: Option<&str>) -> AppResult<NaiveDate> {
    match value {
        Some(value) => parse_date(value),
        None => Ok(state.services.calendar.today()),
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Slots
        .route("/slots", get(slots::day_schedule))
        .route("/slots/:date/:slot_index", get(slots::slot_availability))
        // Calendar
        .route("/week", get(calendar::week))
        .route("/week/navigate", post(calendar::navigate))
        .route("/calendar/:year/:month", get(calendar::month))
        // Booking
        .route("/durations", get(booking::list_durations))
        .route("/booking-intents", post(booking::create_intent))
        .route("/booking-sessions/events", post(booking::session_event))
        .route("/registrations/checkout", post(booking::registration_checkout))
        // Members
        .route("/members/:member_id/pass", get(members::member_pass))
        .route("/check-ins", post(members::create_check_in))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
