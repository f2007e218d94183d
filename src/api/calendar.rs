//! Calendar endpoints (week strip and month grid)

use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::calendar::{CalendarMonth, NavigateRequest, NavigateResponse, WeekQuery, WeekWindow},
};

use super::today_or;

/// Seven-day strip around the anchor date plus offset
#[utoipa::path(
    get,
    path = "/week",
    tag = "calendar",
    params(WeekQuery),
    responses(
        (status = 200, description = "Week window", body = WeekWindow),
        (status = 400, description = "Invalid month or date", body = crate::error::ErrorResponse)
    )
)]
pub async fn week(
    State(state): State<crate::AppState>,
    Query(query): Query<WeekQuery>,
) -> AppResult<Json<WeekWindow>> {
    query.validate()?;
    let today = today_or(&state, query.today.as_deref())?;
    let window = state
        .services
        .calendar
        .week(today, query.year, query.month, query.offset)?;
    Ok(Json(window))
}

/// Apply a swipe, month pick or day tap to the strip state
#[utoipa::path(
    post,
    path = "/week/navigate",
    tag = "calendar",
    request_body = NavigateRequest,
    responses(
        (status = 200, description = "Updated strip state", body = NavigateResponse),
        (status = 400, description = "Invalid event", body = crate::error::ErrorResponse)
    )
)]
pub async fn navigate(
    State(state): State<crate::AppState>,
    Json(request): Json<NavigateRequest>,
) -> AppResult<Json<NavigateResponse>> {
    let today = today_or(&state, request.today.as_deref())?;
    let calendar = &state.services.calendar;

    let next = calendar.navigate(request.state, request.event, today)?;
    let week = calendar.week(today, next.year, next.month, next.day_offset)?;

    Ok(Json(NavigateResponse { state: next, week }))
}

/// Month grid (6 weeks, Sunday first)
#[utoipa::path(
    get,
    path = "/calendar/{year}/{month}",
    tag = "calendar",
    params(
        ("year" = i32, Path, description = "Year"),
        ("month" = u32, Path, description = "Month (1-12)")
    ),
    responses(
        (status = 200, description = "Month grid", body = CalendarMonth),
        (status = 400, description = "Invalid month", body = crate::error::ErrorResponse)
    )
)]
pub async fn month(
    State(state): State<crate::AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> AppResult<Json<CalendarMonth>> {
    let calendar = &state.services.calendar;
    let grid = calendar.month(calendar.today(), year, month)?;
    Ok(Json(grid))
}
