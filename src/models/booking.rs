//! Booking models (intents, sessions, checkout)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// ---------------------------------------------------------------------------
// BookingIntent
// ---------------------------------------------------------------------------

/// A confirmed selection handed to the payment widget. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingIntent {
    pub reference: Uuid,
    pub date: NaiveDate,
    pub slot_index: usize,
    /// Slot time as displayed (e.g. "9:30 AM")
    pub time: String,
    /// Duration label as selected
    pub duration: String,
    /// Amount in minor units
    pub amount: u64,
    pub currency: String,
}

/// Create booking intent request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingIntent {
    /// Date (YYYY-MM-DD)
    pub date: String,
    pub slot_index: Option<usize>,
    /// Duration label (e.g. "3 Months")
    #[validate(length(min = 1, message = "Duration must not be empty"))]
    pub duration: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingIntentResponse {
    pub intent: BookingIntent,
    pub checkout: CheckoutRequest,
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// Options for the hosted payment widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub key_id: String,
    /// Amount in minor units
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub theme_color: String,
}

/// What the payment widget reported back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    Succeeded { payment_id: String },
    Failed { reason: String },
    Dismissed,
}

/// Registration fee checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegistrationCheckout {
    #[serde(default)]
    pub terms_accepted: bool,
}

// ---------------------------------------------------------------------------
// Booking session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    #[default]
    NoSlotSelected,
    SlotSelected,
    SlotAndDurationSelected,
    AwaitingPaymentWidget,
    PaymentCallbackReceived,
}

/// Selections of one booking screen visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookingSession {
    pub date: NaiveDate,
    pub slot_index: Option<usize>,
    pub duration: Option<String>,
    pub stage: BookingStage,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookingEvent {
    SelectDate { date: NaiveDate },
    SelectSlot { slot_index: usize },
    SelectDuration { duration: String },
    Confirm,
    PaymentSucceeded { payment_id: String },
    PaymentFailed { reason: String },
    PaymentDismissed,
}

impl From<PaymentOutcome> for BookingEvent {
    fn from(outcome: PaymentOutcome) -> Self {
        match outcome {
            PaymentOutcome::Succeeded { payment_id } => BookingEvent::PaymentSucceeded { payment_id },
            PaymentOutcome::Failed { reason } => BookingEvent::PaymentFailed { reason },
            PaymentOutcome::Dismissed => BookingEvent::PaymentDismissed,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SessionEventRequest {
    pub session: BookingSession,
    pub event: BookingEvent,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionEventResponse {
    pub session: BookingSession,
    /// Present once the session is waiting on the payment widget
    pub checkout: Option<CheckoutRequest>,
}
