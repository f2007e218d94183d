//! API integration tests, run in-process against the router

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use ascent_server::{api, AppConfig, AppState};

const BASE_URL: &str = "/api/v1";

fn app_with(config: AppConfig) -> Router {
    let state = AppState::new(config).expect("Failed to build state");
    api::create_router(state)
}

/// Router with a checkout key configured
fn app() -> Router {
    let mut config = AppConfig::default();
    config.payment.key_id = "rzp_test_key".to_string();
    app_with(config)
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(format!("{}{}", BASE_URL, path))
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(format!("{}{}", BASE_URL, path))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_without_payment_key() {
    let (status, body) = get(app_with(AppConfig::default()), "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready (checkout disabled)");
}

#[tokio::test]
async fn test_day_schedule_on_open_day() {
    let (status, body) = get(app(), "/slots?date=2024-01-15").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holiday"], false);
    let slots = body["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), 4);

    let booked: Vec<u64> = slots
        .iter()
        .map(|slot| slot["availability"]["booked_count"].as_u64().unwrap())
        .collect();
    assert_eq!(booked, vec![8, 3, 39, 33]);
    assert_eq!(slots[1]["time"], "9:30");
    assert_eq!(slots[1]["period"], "AM");
}

#[tokio::test]
async fn test_day_schedule_on_holiday_is_empty() {
    // 2024-01-02 is a Tuesday
    let (status, body) = get(app(), "/slots?date=2024-01-02").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holiday"], true);
    assert_eq!(body["slots"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_day_schedule_rejects_bad_date() {
    let (status, body) = get(app(), "/slots?date=15-01-2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_full_slot_availability() {
    let (status, body) = get(app(), "/slots/2024-01-04/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booked_count"], 40);
    assert_eq!(body["remaining_count"], 0);
    assert_eq!(body["tier"], "full");
    assert_eq!(body["status_text"], "Full");

    let (_, body) = get(app(), "/slots/2024-01-04/2?wording=long").await;
    assert_eq!(body["status_text"], "Fully Booked");
}

#[tokio::test]
async fn test_slot_availability_on_holiday_is_flagged() {
    let (status, body) = get(app(), "/slots/2024-01-02/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holiday"], true);

    let (_, body) = get(app(), "/slots/2024-01-04/1").await;
    assert_eq!(body["holiday"], false);
}

#[tokio::test]
async fn test_almost_full_slot_availability() {
    let (status, body) = get(app(), "/slots/2024-01-05/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booked_count"], 38);
    assert_eq!(body["tier"], "almost_full");
    assert_eq!(body["accent"]["text"], "#D8D8D8");
}

#[tokio::test]
async fn test_slot_index_out_of_range() {
    let (status, _) = get(app(), "/slots/2024-01-15/4").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_week_rolls_into_next_month() {
    let (status, body) = get(app(), "/week?year=2024&month=1&offset=3&today=2024-01-31").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["center"], "2024-02-03");
    assert_eq!(body["month_label"], "February");

    let days = body["days"].as_array().expect("days array");
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-01-31");
    assert_eq!(days[0]["is_today"], true);
    assert_eq!(days[3]["is_center"], true);
    assert_eq!(days[6]["date"], "2024-02-06");
}

#[tokio::test]
async fn test_week_rejects_month_out_of_range() {
    let (status, _) = get(app(), "/week?year=2024&month=13").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_navigate_swipe_follows_center_into_next_month() {
    let (status, body) = post(
        app(),
        "/week/navigate",
        json!({
            "state": { "year": 2024, "month": 1, "day_offset": 0, "selected_date": "2024-01-31" },
            "event": { "type": "swipe", "offset_x": -80.0 },
            "today": "2024-01-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["year"], 2024);
    assert_eq!(body["state"]["month"], 2);
    assert_eq!(body["state"]["day_offset"], 0);
    assert_eq!(body["week"]["center"], "2024-02-01");
}

#[tokio::test]
async fn test_navigate_short_swipe_is_ignored() {
    let (status, body) = post(
        app(),
        "/week/navigate",
        json!({
            "state": { "year": 2024, "month": 3, "day_offset": 2, "selected_date": "2024-03-10" },
            "event": { "type": "swipe", "offset_x": 49.0 },
            "today": "2024-01-31"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["day_offset"], 2);
    assert_eq!(body["week"]["center"], "2024-03-03");
}

#[tokio::test]
async fn test_month_grid() {
    let (status, body) = get(app(), "/calendar/2024/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month_label"], "February");
    assert_eq!(body["days"].as_array().map(Vec::len), Some(42));
    // 2024-02-01 is a Thursday
    assert_eq!(body["days"][0]["date"], "2024-01-28");
    assert_eq!(body["previous"]["month"], 1);
    assert_eq!(body["next"]["month"], 3);
}

#[tokio::test]
async fn test_list_durations() {
    let (status, body) = get(app(), "/durations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "INR");
    let entries = body["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["duration"], "1 Month");
    assert_eq!(entries[0]["amount"], 750000);
}

#[tokio::test]
async fn test_create_intent() {
    let (status, body) = post(
        app(),
        "/booking-intents",
        json!({ "date": "2024-01-15", "slot_index": 1, "duration": "3 Months" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["intent"]["time"], "9:30 AM");
    assert_eq!(body["intent"]["amount"], 2250000);
    assert_eq!(body["checkout"]["key_id"], "rzp_test_key");
    assert_eq!(body["checkout"]["amount"], 2250000);
    assert_eq!(body["checkout"]["description"], "MSCA Slot Booking - 3 Months");
}

#[tokio::test]
async fn test_create_intent_without_slot() {
    let (status, body) = post(
        app(),
        "/booking-intents",
        json!({ "date": "2024-01-15", "duration": "3 Months" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MissingSelection");
    assert_eq!(body["message"], "Please select a slot first.");
}

#[tokio::test]
async fn test_create_intent_without_duration() {
    let (status, body) = post(app(), "/booking-intents", json!({ "date": "2024-01-15", "slot_index": 0 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please select a duration first.");
}

#[tokio::test]
async fn test_create_intent_unknown_duration_uses_first_price() {
    let (status, body) = post(
        app(),
        "/booking-intents",
        json!({ "date": "2024-01-15", "slot_index": 0, "duration": "2 Weeks" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["intent"]["amount"], 750000);
    assert_eq!(body["intent"]["duration"], "2 Weeks");
}

#[tokio::test]
async fn test_create_intent_on_holiday() {
    let (status, body) = post(
        app(),
        "/booking-intents",
        json!({ "date": "2024-01-02", "slot_index": 0, "duration": "1 Month" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NotBookable");
}

#[tokio::test]
async fn test_full_slot_cannot_be_booked() {
    let (status, body) = post(
        app(),
        "/booking-intents",
        json!({ "date": "2024-01-04", "slot_index": 2, "duration": "1 Month" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "NotBookable");

    let (status, _) = post(
        app(),
        "/booking-sessions/events",
        json!({
            "session": {
                "date": "2024-01-04",
                "slot_index": null,
                "duration": null,
                "stage": "no_slot_selected",
                "payment_id": null
            },
            "event": { "type": "select_slot", "slot_index": 2 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_intent_without_payment_key() {
    let (status, body) = post(
        app_with(AppConfig::default()),
        "/booking-intents",
        json!({ "date": "2024-01-15", "slot_index": 0, "duration": "1 Month" }),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "Payment gateway not loaded. Please refresh the page.");
}

#[tokio::test]
async fn test_session_confirm_returns_checkout() {
    let (status, body) = post(
        app(),
        "/booking-sessions/events",
        json!({
            "session": {
                "date": "2024-01-15",
                "slot_index": 2,
                "duration": "Yearly",
                "stage": "slot_and_duration_selected",
                "payment_id": null
            },
            "event": { "type": "confirm" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session"]["stage"], "awaiting_payment_widget");
    assert_eq!(body["checkout"]["amount"], 9000000);
}

#[tokio::test]
async fn test_session_confirm_without_slot() {
    let (status, body) = post(
        app(),
        "/booking-sessions/events",
        json!({
            "session": {
                "date": "2024-01-15",
                "slot_index": null,
                "duration": null,
                "stage": "no_slot_selected",
                "payment_id": null
            },
            "event": { "type": "confirm" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please select a slot first.");
}

#[tokio::test]
async fn test_session_payment_event_outside_widget_stage() {
    let (status, body) = post(
        app(),
        "/booking-sessions/events",
        json!({
            "session": {
                "date": "2024-01-15",
                "slot_index": 0,
                "duration": null,
                "stage": "slot_selected",
                "payment_id": null
            },
            "event": { "type": "payment_succeeded", "payment_id": "pay_123" }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "InvalidTransition");
}

#[tokio::test]
async fn test_registration_requires_terms() {
    let (status, body) = post(app(), "/registrations/checkout", json!({ "terms_accepted": false })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "TermsNotAccepted");
    assert_eq!(
        body["message"],
        "Please accept the Terms & Conditions to proceed with payment."
    );
}

#[tokio::test]
async fn test_registration_checkout() {
    let (status, body) = post(app(), "/registrations/checkout", json!({ "terms_accepted": true })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 10000);
    assert_eq!(body["name"], "MSCA Registration");
}

#[tokio::test]
async fn test_member_pass() {
    let (status, body) = get(app(), "/members/m-102/pass").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["member_id"], "m-102");
    let payload = body["payload"].as_str().expect("payload string");
    assert!(payload.starts_with("MSCA-USER-M-102-"));
}

#[tokio::test]
async fn test_check_in_echoes_decoded_text() {
    let (status, body) = post(app(), "/check-ins", json!({ "decoded_text": "MSCA-USER-M-102-1705276800000" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["decoded_text"], "MSCA-USER-M-102-1705276800000");
    assert!(body["scanned_at"].is_string());
}

#[tokio::test]
async fn test_check_in_keeps_surrounding_whitespace() {
    let (status, body) = post(app(), "/check-ins", json!({ "decoded_text": " code 42 " })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["decoded_text"], " code 42 ");
}

#[tokio::test]
async fn test_check_in_rejects_empty_text() {
    let (status, _) = post(app(), "/check-ins", json!({ "decoded_text": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Ascent API");
}
