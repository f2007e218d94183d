//! Slot availability endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::slot::{DaySchedule, DayScheduleQuery, SlotAvailability, StatusWording},
};

use super::parse_date;

/// Slots of a date with their availability (empty on holidays)
#[utoipa::path(
    get,
    path = "/slots",
    tag = "slots",
    params(DayScheduleQuery),
    responses(
        (status = 200, description = "Day schedule", body = DaySchedule),
        (status = 400, description = "Invalid date", body = crate::error::ErrorResponse)
    )
)]
pub async fn day_schedule(
    State(state): State<crate::AppState>,
    Query(query): Query<DayScheduleQuery>,
) -> AppResult<Json<DaySchedule>> {
    let date = parse_date(&query.date)?;
    Ok(Json(state.services.availability.day(date, query.wording)))
}

/// Simulated availability of one slot, flagged on holidays
#[utoipa::path(
    get,
    path = "/slots/{date}/{slot_index}",
    tag = "slots",
    params(
        ("date" = String, Path, description = "Date (YYYY-MM-DD)"),
        ("slot_index" = usize, Path, description = "Slot index (0-3)"),
        ("wording" = Option<StatusWording>, Query, description = "Label set for the Full tier")
    ),
    responses(
        (status = 200, description = "Slot availability", body = SlotAvailability),
        (status = 400, description = "Invalid date or slot", body = crate::error::ErrorResponse)
    )
)]
pub async fn slot_availability(
    State(state): State<crate::AppState>,
    Path((date, slot_index)): Path<(String, usize)>,
    Query(query): Query<WordingQuery>,
) -> AppResult<Json<SlotAvailability>> {
    let date = parse_date(&date)?;
    let slot = state.services.availability.slot(date, slot_index, query.wording)?;
    Ok(Json(slot))
}

#[derive(Debug, serde::Deserialize)]
pub struct WordingQuery {
    pub wording: Option<StatusWording>,
}
