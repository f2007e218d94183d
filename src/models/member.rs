//! Member pass and check-in models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// QR payload shown on the member's functions screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberPass {
    pub member_id: String,
    /// Opaque string encoded in the QR code (not signed)
    pub payload: String,
    pub issued_at: DateTime<Utc>,
    /// Rendered code, when a renderer is available
    pub rendered: Option<String>,
}

/// Result of a camera scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ScanOutcome {
    Decoded(String),
    Cancelled,
}

/// Check-in request from the staff scanner
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCheckIn {
    #[validate(length(min = 1, max = 512, message = "Decoded text must be 1 to 512 characters"))]
    pub decoded_text: String,
}

/// Scanned code as displayed to staff
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckIn {
    pub decoded_text: String,
    pub scanned_at: DateTime<Utc>,
}
