//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{booking, calendar, health, members, slots};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ascent API",
        version = "0.3.0",
        description = "Climbing slot booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Slots
        slots::day_schedule,
        slots::slot_availability,
        // Calendar
        calendar::week,
        calendar::navigate,
        calendar::month,
        // Booking
        booking::list_durations,
        booking::create_intent,
        booking::session_event,
        booking::registration_checkout,
        // Members
        members::member_pass,
        members::create_check_in,
    ),
    components(
        schemas(
            // Slots
            crate::models::slot::SlotTime,
            crate::models::slot::SlotTier,
            crate::models::slot::StatusWording,
            crate::models::slot::AccentColors,
            crate::models::slot::SlotAvailability,
            crate::models::slot::ScheduledSlot,
            crate::models::slot::DaySchedule,
            // Calendar
            crate::models::calendar::WeekDay,
            crate::models::calendar::WeekWindow,
            crate::models::calendar::NavigatorState,
            crate::models::calendar::NavigatorEvent,
            crate::models::calendar::NavigateRequest,
            crate::models::calendar::NavigateResponse,
            crate::models::calendar::CalendarDay,
            crate::models::calendar::MonthRef,
            crate::models::calendar::CalendarMonth,
            // Booking
            crate::models::duration::DurationOption,
            crate::models::duration::PriceEntry,
            crate::models::duration::PriceTable,
            crate::models::booking::BookingIntent,
            crate::models::booking::CreateBookingIntent,
            crate::models::booking::BookingIntentResponse,
            crate::models::booking::CheckoutRequest,
            crate::models::booking::PaymentOutcome,
            crate::models::booking::RegistrationCheckout,
            crate::models::booking::BookingStage,
            crate::models::booking::BookingSession,
            crate::models::booking::BookingEvent,
            crate::models::booking::SessionEventRequest,
            crate::models::booking::SessionEventResponse,
            // Members
            crate::models::member::MemberPass,
            crate::models::member::ScanOutcome,
            crate::models::member::CreateCheckIn,
            crate::models::member::CheckIn,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "slots", description = "Slot availability"),
        (name = "calendar", description = "Week strip and month grid"),
        (name = "booking", description = "Durations, booking intents and checkout"),
        (name = "members", description = "Member passes and check-ins")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/booking-intents"));
        assert!(doc.paths.paths.contains_key("/slots/{date}/{slot_index}"));
        assert!(doc.paths.paths.contains_key("/week/navigate"));
    }
}
