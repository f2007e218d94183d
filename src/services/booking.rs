//! Booking service (intent builder and booking session state machine)

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            BookingEvent, BookingIntent, BookingSession, BookingStage, CheckoutRequest,
            SessionEventResponse,
        },
        duration::PriceTable,
        slot::{SlotTier, SlotTime},
    },
    services::{
        availability::AvailabilityService,
        payment::{CheckoutBuilder, PaymentGateway},
    },
};

const SELECT_SLOT_FIRST: &str = "Please select a slot first.";
const SELECT_DURATION_FIRST: &str = "Please select a duration first.";

/// Assemble a booking intent from the screen selections
pub fn build_intent(
    date: NaiveDate,
    slot_index: Option<usize>,
    duration: Option<&str>,
    slot_times: &[SlotTime],
    prices: &PriceTable,
) -> AppResult<BookingIntent> {
    let slot_index = slot_index.ok_or_else(|| AppError::MissingSelection(SELECT_SLOT_FIRST.into()))?;
    let duration = duration
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::MissingSelection(SELECT_DURATION_FIRST.into()))?;
    let slot_time = slot_times.get(slot_index).ok_or_else(|| {
        AppError::Validation(format!("Unknown slot index: {}", slot_index))
    })?;

    Ok(BookingIntent {
        reference: Uuid::new_v4(),
        date,
        slot_index,
        time: slot_time.to_string(),
        duration: duration.to_string(),
        amount: prices.amount_for_label(duration),
        currency: prices.currency.clone(),
    })
}

impl BookingSession {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            slot_index: None,
            duration: None,
            stage: BookingStage::NoSlotSelected,
            payment_id: None,
        }
    }

    fn selection_stage(&self) -> BookingStage {
        match (self.slot_index, &self.duration) {
            (None, _) => BookingStage::NoSlotSelected,
            (Some(_), None) => BookingStage::SlotSelected,
            (Some(_), Some(_)) => BookingStage::SlotAndDurationSelected,
        }
    }

    fn is_selecting(&self) -> bool {
        matches!(
            self.stage,
            BookingStage::NoSlotSelected
                | BookingStage::SlotSelected
                | BookingStage::SlotAndDurationSelected
        )
    }

    /// Next session after `event`. A failed transition leaves `self` untouched
    /// for the caller.
    pub fn apply(&self, event: BookingEvent) -> AppResult<Self> {
        let mut next = self.clone();

        match event {
            BookingEvent::SelectDate { .. }
            | BookingEvent::SelectSlot { .. }
            | BookingEvent::SelectDuration { .. }
            | BookingEvent::Confirm
                if !self.is_selecting() =>
            {
                return Err(AppError::InvalidTransition(format!(
                    "Selections are locked while {:?}",
                    self.stage
                )));
            }
            BookingEvent::SelectDate { date } => {
                next.date = date;
                next.slot_index = None;
            }
            BookingEvent::SelectSlot { slot_index } => next.slot_index = Some(slot_index),
            BookingEvent::SelectDuration { duration } => next.duration = Some(duration),
            BookingEvent::Confirm => {
                if self.slot_index.is_none() {
                    return Err(AppError::MissingSelection(SELECT_SLOT_FIRST.into()));
                }
                if self.duration.is_none() {
                    return Err(AppError::MissingSelection(SELECT_DURATION_FIRST.into()));
                }
                next.stage = BookingStage::AwaitingPaymentWidget;
                return Ok(next);
            }
            BookingEvent::PaymentSucceeded { payment_id } => {
                self.expect_awaiting()?;
                next.payment_id = Some(payment_id);
                next.stage = BookingStage::PaymentCallbackReceived;
                return Ok(next);
            }
            BookingEvent::PaymentFailed { reason } => {
                self.expect_awaiting()?;
                tracing::warn!("Payment failed: {}", reason);
            }
            BookingEvent::PaymentDismissed => {
                self.expect_awaiting()?;
                tracing::debug!("Payment widget dismissed");
            }
        }

        next.stage = next.selection_stage();
        Ok(next)
    }

    fn expect_awaiting(&self) -> AppResult<()> {
        if self.stage != BookingStage::AwaitingPaymentWidget {
            return Err(AppError::InvalidTransition(format!(
                "No payment in progress ({:?})",
                self.stage
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct BookingService {
    availability: AvailabilityService,
    prices: PriceTable,
    checkout: CheckoutBuilder,
}

impl BookingService {
    pub fn new(availability: AvailabilityService, prices: PriceTable, checkout: CheckoutBuilder) -> Self {
        Self {
            availability,
            prices,
            checkout,
        }
    }

    pub fn price_table(&self) -> &PriceTable {
        &self.prices
    }

    fn ensure_open(&self, date: NaiveDate) -> AppResult<()> {
        if self.availability.is_holiday(date) {
            return Err(AppError::BusinessRule(format!("{} is a holiday", date)));
        }
        Ok(())
    }

    /// A Full slot cannot be picked
    fn ensure_bookable(&self, date: NaiveDate, slot_index: usize) -> AppResult<()> {
        let slot = self.availability.slot(date, slot_index, None)?;
        if slot.tier == SlotTier::Full {
            return Err(AppError::BusinessRule(format!(
                "Slot {} on {} is fully booked",
                slot_index, date
            )));
        }
        Ok(())
    }

    /// Intent for an open date and a slot with places left
    pub fn create_intent(
        &self,
        date: NaiveDate,
        slot_index: Option<usize>,
        duration: Option<&str>,
    ) -> AppResult<BookingIntent> {
        self.ensure_open(date)?;
        let intent = build_intent(
            date,
            slot_index,
            duration,
            self.availability.slot_times(),
            &self.prices,
        )?;
        self.ensure_bookable(date, intent.slot_index)?;
        tracing::info!(
            "Booking intent {} for {} {} ({}, {} {})",
            intent.reference,
            intent.date,
            intent.time,
            intent.duration,
            intent.amount,
            intent.currency
        );
        Ok(intent)
    }

    pub fn booking_checkout(&self, intent: &BookingIntent) -> AppResult<CheckoutRequest> {
        self.checkout.for_intent(intent)
    }

    pub fn registration_checkout(&self, terms_accepted: bool) -> AppResult<CheckoutRequest> {
        self.checkout.for_registration(terms_accepted)
    }

    fn session_checkout(&self, session: &BookingSession) -> AppResult<CheckoutRequest> {
        let intent = self.create_intent(session.date, session.slot_index, session.duration.as_deref())?;
        self.booking_checkout(&intent)
    }

    /// Apply one event to a session held by the client. Entering the payment
    /// stage returns the widget options with the session.
    pub fn apply_event(
        &self,
        session: &BookingSession,
        event: BookingEvent,
    ) -> AppResult<SessionEventResponse> {
        match &event {
            BookingEvent::SelectDate { date } => self.ensure_open(*date)?,
            BookingEvent::SelectSlot { slot_index } => {
                self.ensure_open(session.date)?;
                self.ensure_bookable(session.date, *slot_index)?;
            }
            _ => {}
        }

        let next = session.apply(event)?;
        let checkout = match next.stage {
            BookingStage::AwaitingPaymentWidget => Some(self.session_checkout(&next)?),
            _ => None,
        };

        Ok(SessionEventResponse {
            session: next,
            checkout,
        })
    }

    /// Confirm the session and run the checkout through `gateway`
    pub async fn pay(
        &self,
        session: &BookingSession,
        gateway: &dyn PaymentGateway,
    ) -> AppResult<BookingSession> {
        let awaiting = session.apply(BookingEvent::Confirm)?;
        let request = self.session_checkout(&awaiting)?;

        let outcome = gateway.checkout(&request).await?;
        tracing::info!("Checkout for {} {} finished: {:?}", request.amount, request.currency, outcome);

        awaiting.apply(outcome.into())
    }
}
