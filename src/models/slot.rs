//! Slot models (time slots, availability tiers, day schedule)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Places available in one climbing slot
pub const SLOT_CAPACITY: u32 = 40;

// ---------------------------------------------------------------------------
// SlotTime
// ---------------------------------------------------------------------------

/// A fixed daily slot as displayed (e.g. "7:00" "AM")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlotTime {
    pub time: String,
    pub period: String,
}

impl SlotTime {
    pub fn new(time: &str, period: &str) -> Self {
        Self {
            time: time.to_string(),
            period: period.to_string(),
        }
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.time, self.period)
    }
}

// ---------------------------------------------------------------------------
// SlotTier
// ---------------------------------------------------------------------------

/// Availability classification of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SlotTier {
    Available,
    Limited,
    AlmostFull,
    Full,
}

/// Which label set the Full tier uses. The slot grid says "Full",
/// the dashboard says "Fully Booked".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusWording {
    #[default]
    Short,
    Long,
}

/// Display colors of a slot card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccentColors {
    pub background: String,
    pub text: String,
    pub divider: String,
}

impl SlotTier {
    /// Classify a booked count. `remaining == 0` wins over the percentage bands.
    pub fn classify(booked: u32) -> Self {
        let remaining = SLOT_CAPACITY.saturating_sub(booked);
        let percentage = percentage_booked(booked);

        if remaining == 0 {
            SlotTier::Full
        } else if percentage >= 95.0 {
            SlotTier::AlmostFull
        } else if percentage >= 50.0 {
            SlotTier::Limited
        } else {
            SlotTier::Available
        }
    }

    pub fn label(self, wording: StatusWording) -> &'static str {
        match (self, wording) {
            (SlotTier::Full, StatusWording::Short) => "Full",
            (SlotTier::Full, StatusWording::Long) => "Fully Booked",
            (SlotTier::AlmostFull, _) => "Almost Full",
            (SlotTier::Limited, _) => "Limited",
            (SlotTier::Available, _) => "Available",
        }
    }

    pub fn accent(self) -> AccentColors {
        let (background, text, divider) = match self {
            SlotTier::Full => ("rgba(102, 102, 102, 0.4)", "#FFFFFF", "#FFFFFF"),
            SlotTier::AlmostFull => ("rgba(196, 0, 0, 0.3)", "#D8D8D8", "#797979"),
            SlotTier::Limited => ("rgba(255, 200, 0, 0.4)", "#FFFFFF", "#FFFFFF"),
            SlotTier::Available => ("rgba(13, 255, 0, 0.4)", "#FFFFFF", "#FFFFFF"),
        };
        AccentColors {
            background: background.to_string(),
            text: text.to_string(),
            divider: divider.to_string(),
        }
    }
}

/// Share of the slot already taken, 0..=100
pub fn percentage_booked(booked: u32) -> f64 {
    f64::from(booked) / f64::from(SLOT_CAPACITY) * 100.0
}

// ---------------------------------------------------------------------------
// SlotAvailability
// ---------------------------------------------------------------------------

/// Simulated occupancy of one slot on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotAvailability {
    pub slot_index: usize,
    pub booked_count: u32,
    pub remaining_count: u32,
    pub percentage_booked: f64,
    pub tier: SlotTier,
    /// Label for the tier in the requested wording
    pub status_text: String,
    pub accent: AccentColors,
    /// The date falls on the closed weekday; the counts are not bookable
    #[serde(default)]
    pub holiday: bool,
}

impl SlotAvailability {
    pub fn from_booked(slot_index: usize, booked: u32, wording: StatusWording) -> Self {
        let booked = booked.min(SLOT_CAPACITY);
        let tier = SlotTier::classify(booked);
        Self {
            slot_index,
            booked_count: booked,
            remaining_count: SLOT_CAPACITY - booked,
            percentage_booked: percentage_booked(booked),
            tier,
            status_text: tier.label(wording).to_string(),
            accent: tier.accent(),
            holiday: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Day schedule
// ---------------------------------------------------------------------------

/// A named slot of a day together with its availability
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduledSlot {
    pub time: String,
    pub period: String,
    pub availability: SlotAvailability,
}

/// All slots of a date, or the holiday notice on the closed weekday
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// Three-letter upper-case weekday (e.g. "MON")
    pub weekday: String,
    pub holiday: bool,
    /// Empty on holidays
    pub slots: Vec<ScheduledSlot>,
}

/// Query parameters for a day schedule
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DayScheduleQuery {
    /// Date (YYYY-MM-DD)
    pub date: String,
    /// Label set for the Full tier (defaults to the configured wording)
    pub wording: Option<StatusWording>,
}
