//! Member pass and check-in endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    models::member::{CheckIn, CreateCheckIn, MemberPass},
};

/// QR payload identifying a member
#[utoipa::path(
    get,
    path = "/members/{member_id}/pass",
    tag = "members",
    params(("member_id" = String, Path, description = "Member identifier")),
    responses(
        (status = 200, description = "Member pass", body = MemberPass),
        (status = 400, description = "Invalid member id", body = crate::error::ErrorResponse)
    )
)]
pub async fn member_pass(
    State(state): State<crate::AppState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<MemberPass>> {
    let pass = state.services.members.issue_pass(&member_id, Utc::now(), None)?;
    Ok(Json(pass))
}

/// Record a code decoded by the staff scanner
#[utoipa::path(
    post,
    path = "/check-ins",
    tag = "members",
    request_body = CreateCheckIn,
    responses(
        (status = 201, description = "Scanned code", body = CheckIn),
        (status = 400, description = "Empty code", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_check_in(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCheckIn>,
) -> AppResult<(StatusCode, Json<CheckIn>)> {
    data.validate()?;
    let check_in = state
        .services
        .members
        .record_check_in(&data.decoded_text, Utc::now())?;
    Ok((StatusCode::CREATED, Json(check_in)))
}
