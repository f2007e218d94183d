//! Data models for Ascent

pub mod booking;
pub mod calendar;
pub mod duration;
pub mod member;
pub mod slot;

// Re-export commonly used types
pub use booking::{BookingEvent, BookingIntent, BookingSession, BookingStage, CheckoutRequest, PaymentOutcome};
pub use calendar::{CalendarMonth, NavigatorEvent, NavigatorState, WeekWindow};
pub use duration::{DurationOption, PriceTable};
pub use member::{CheckIn, MemberPass, ScanOutcome};
pub use slot::{SlotAvailability, SlotTier, SlotTime, StatusWording};
