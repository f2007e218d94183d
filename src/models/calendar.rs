//! Calendar models (week strip, navigator state, month grid)

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Upper-case weekday labels, Sunday first
pub const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Label of a date's weekday as shown in the week strip
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Full month name for a 1-based month, if valid
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

// ---------------------------------------------------------------------------
// Week window
// ---------------------------------------------------------------------------

/// One cell of the week strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekDay {
    pub date: NaiveDate,
    /// "SUN".."SAT"
    pub day_name: String,
    pub day_of_month: u32,
    pub is_today: bool,
    pub is_center: bool,
}

/// Seven consecutive dates, the center at index 3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekWindow {
    pub center: NaiveDate,
    /// Month label of the strip (follows the center date)
    pub month_label: String,
    pub days: Vec<WeekDay>,
}

impl WeekWindow {
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }
}

/// Query parameters for a week window
#[derive(Debug, Deserialize, Validate, IntoParams, ToSchema)]
pub struct WeekQuery {
    pub year: i32,
    /// Month (1-12)
    #[validate(range(min = 1, max = 12, message = "Month must be between 1 and 12"))]
    pub month: u32,
    /// Accumulated swipe offset in days
    #[serde(default)]
    pub offset: i64,
    /// Reference date (YYYY-MM-DD), defaults to the server's local date
    pub today: Option<String>,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Held state of the week strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigatorState {
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    pub day_offset: i64,
    pub selected_date: NaiveDate,
}

impl NavigatorState {
    /// Initial state: current month, no offset, today selected
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            day_offset: 0,
            selected_date: today,
        }
    }
}

/// User input on the week strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigatorEvent {
    /// Horizontal drag completed with this x offset in pixels
    Swipe { offset_x: f64 },
    /// Month picked from the dropdown (1-12)
    SelectMonth { month: u32 },
    /// Day tapped in the strip
    SelectDate { date: NaiveDate },
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigateRequest {
    pub state: NavigatorState,
    pub event: NavigatorEvent,
    /// Reference date (YYYY-MM-DD), defaults to the server's local date
    pub today: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NavigateResponse {
    pub state: NavigatorState,
    pub week: WeekWindow,
}

// ---------------------------------------------------------------------------
// Month grid
// ---------------------------------------------------------------------------

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// A (year, month) pair, month 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

/// Six weeks of a month, Sunday first
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub month_label: String,
    pub days: Vec<CalendarDay>,
    pub previous: MonthRef,
    pub next: MonthRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_names_start_on_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        assert_eq!(day_name(sunday), "SUN");
        assert_eq!(day_name(sunday.succ_opt().unwrap().succ_opt().unwrap()), "TUE");
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn navigator_event_is_tagged() {
        let event: NavigatorEvent =
            serde_json::from_str(r#"{"type":"swipe","offset_x":-60.0}"#).unwrap();
        assert_eq!(event, NavigatorEvent::Swipe { offset_x: -60.0 });
    }
}
