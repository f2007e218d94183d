//! Booking endpoints (durations, intents, sessions, registration checkout)

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        booking::{
            BookingIntentResponse, CheckoutRequest, CreateBookingIntent, RegistrationCheckout,
            SessionEventRequest, SessionEventResponse,
        },
        duration::PriceTable,
    },
};

use super::parse_date;

/// Durations on offer and their prices
#[utoipa::path(
    get,
    path = "/durations",
    tag = "booking",
    responses(
        (status = 200, description = "Price table", body = PriceTable)
    )
)]
pub async fn list_durations(State(state): State<crate::AppState>) -> Json<PriceTable> {
    Json(state.services.booking.price_table().clone())
}

/// Build a booking intent and the checkout options for it
#[utoipa::path(
    post,
    path = "/booking-intents",
    tag = "booking",
    request_body = CreateBookingIntent,
    responses(
        (status = 201, description = "Intent created", body = BookingIntentResponse),
        (status = 400, description = "Missing slot or duration", body = crate::error::ErrorResponse),
        (status = 422, description = "Date is a holiday or slot is full", body = crate::error::ErrorResponse),
        (status = 503, description = "Checkout unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_intent(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBookingIntent>,
) -> AppResult<(StatusCode, Json<BookingIntentResponse>)> {
    data.validate()?;
    let date = parse_date(&data.date)?;
    let booking = &state.services.booking;

    let intent = booking.create_intent(date, data.slot_index, data.duration.as_deref())?;
    let checkout = booking.booking_checkout(&intent)?;

    Ok((StatusCode::CREATED, Json(BookingIntentResponse { intent, checkout })))
}

/// Apply one event to a client-held booking session
#[utoipa::path(
    post,
    path = "/booking-sessions/events",
    tag = "booking",
    request_body = SessionEventRequest,
    responses(
        (status = 200, description = "Updated session", body = SessionEventResponse),
        (status = 400, description = "Missing selection", body = crate::error::ErrorResponse),
        (status = 409, description = "Event not allowed in this stage", body = crate::error::ErrorResponse),
        (status = 422, description = "Date is a holiday or slot is full", body = crate::error::ErrorResponse)
    )
)]
pub async fn session_event(
    State(state): State<crate::AppState>,
    Json(request): Json<SessionEventRequest>,
) -> AppResult<Json<SessionEventResponse>> {
    let response = state
        .services
        .booking
        .apply_event(&request.session, request.event)?;
    Ok(Json(response))
}

/// Checkout options for the membership registration fee
#[utoipa::path(
    post,
    path = "/registrations/checkout",
    tag = "booking",
    request_body = RegistrationCheckout,
    responses(
        (status = 200, description = "Checkout options", body = CheckoutRequest),
        (status = 400, description = "Terms not accepted", body = crate::error::ErrorResponse),
        (status = 503, description = "Checkout unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn registration_checkout(
    State(state): State<crate::AppState>,
    Json(data): Json<RegistrationCheckout>,
) -> AppResult<Json<CheckoutRequest>> {
    let checkout = state
        .services
        .booking
        .registration_checkout(data.terms_accepted)?;
    Ok(Json(checkout))
}
