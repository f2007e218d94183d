//! Calendar service (week strip navigation and month grid)

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::{
    error::{AppError, AppResult},
    models::calendar::{
        day_name, month_name, CalendarDay, CalendarMonth, MonthRef, NavigatorEvent,
        NavigatorState, WeekDay, WeekWindow,
    },
};

/// Minimum horizontal drag, in pixels, that moves the strip by one day
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Cells in the month grid (6 rows of 7 days)
pub const MONTH_GRID_CELLS: i64 = 42;

/// Days on each side of the center in the week strip
const WEEK_HALF_SPAN: i64 = 3;

fn shift(date: NaiveDate, days: i64) -> AppResult<NaiveDate> {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.ok_or_else(|| AppError::Validation(format!("Date out of range: {} + {} days", date, days)))
}

fn first_day_of(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::Validation(format!("Invalid month: {}-{}", year, month)))
}

/// Date the strip is built around before the offset: today in the current
/// month, the 1st otherwise.
pub fn anchor_date(today: NaiveDate, year: i32, month: u32) -> AppResult<NaiveDate> {
    if (year, month) == (today.year(), today.month()) {
        Ok(today)
    } else {
        first_day_of(year, month)
    }
}

/// Seven consecutive dates with `anchor + day_offset` at index 3
pub fn week_window(
    today: NaiveDate,
    year: i32,
    month: u32,
    day_offset: i64,
) -> AppResult<WeekWindow> {
    let center = shift(anchor_date(today, year, month)?, day_offset)?;

    let days = (-WEEK_HALF_SPAN..=WEEK_HALF_SPAN)
        .map(|delta| {
            let date = shift(center, delta)?;
            Ok(WeekDay {
                date,
                day_name: day_name(date).to_string(),
                day_of_month: date.day(),
                is_today: date == today,
                is_center: delta == 0,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(WeekWindow {
        center,
        month_label: month_name(center.month()).unwrap_or_default().to_string(),
        days,
    })
}

/// Day offset change for a completed drag: dragging right reveals the
/// previous day, dragging left the next one.
pub fn swipe_delta(offset_x: f64) -> i64 {
    if offset_x > SWIPE_THRESHOLD_PX {
        -1
    } else if offset_x < -SWIPE_THRESHOLD_PX {
        1
    } else {
        0
    }
}

pub fn previous_month(year: i32, month: u32) -> MonthRef {
    if month <= 1 {
        MonthRef { year: year - 1, month: 12 }
    } else {
        MonthRef { year, month: month - 1 }
    }
}

pub fn next_month(year: i32, month: u32) -> MonthRef {
    if month >= 12 {
        MonthRef { year: year + 1, month: 1 }
    } else {
        MonthRef { year, month: month + 1 }
    }
}

/// 42-cell month grid, Sunday first, padded with the neighbouring months
pub fn month_grid(today: NaiveDate, year: i32, month: u32) -> AppResult<CalendarMonth> {
    let first = first_day_of(year, month)?;
    let leading = i64::from(first.weekday().num_days_from_sunday());
    let start = shift(first, -leading)?;

    let days = (0..MONTH_GRID_CELLS)
        .map(|index| {
            let date = shift(start, index)?;
            Ok(CalendarDay {
                date,
                day_of_month: date.day(),
                is_current_month: date.month() == month && date.year() == year,
                is_today: date == today,
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(CalendarMonth {
        year,
        month,
        month_label: month_name(month).unwrap_or_default().to_string(),
        days,
        previous: previous_month(year, month),
        next: next_month(year, month),
    })
}

/// Week strip state transitions
#[derive(Clone, Debug, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Today's date on the server
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn week(
        &self,
        today: NaiveDate,
        year: i32,
        month: u32,
        day_offset: i64,
    ) -> AppResult<WeekWindow> {
        week_window(today, year, month, day_offset)
    }

    pub fn month(&self, today: NaiveDate, year: i32, month: u32) -> AppResult<CalendarMonth> {
        month_grid(today, year, month)
    }

    /// Apply one strip event. When the center leaves the held month, the
    /// held month follows it and the offset is rebased on the new anchor,
    /// so the center date stays where the user put it.
    pub fn navigate(
        &self,
        state: NavigatorState,
        event: NavigatorEvent,
        today: NaiveDate,
    ) -> AppResult<NavigatorState> {
        let mut next = state;

        match event {
            NavigatorEvent::Swipe { offset_x } => {
                let delta = swipe_delta(offset_x);
                if delta == 0 {
                    return Ok(next);
                }
                next.day_offset = next
                    .day_offset
                    .checked_add(delta)
                    .ok_or_else(|| AppError::Validation("Day offset overflow".to_string()))?;
            }
            NavigatorEvent::SelectMonth { month } => {
                if !(1..=12).contains(&month) {
                    return Err(AppError::Validation(
                        "Month must be between 1 and 12".to_string(),
                    ));
                }
                next.month = month;
                next.day_offset = 0;
            }
            NavigatorEvent::SelectDate { date } => {
                next.selected_date = date;
                return Ok(next);
            }
        }

        let center = shift(anchor_date(today, next.year, next.month)?, next.day_offset)?;
        if (center.year(), center.month()) != (next.year, next.month) {
            next.year = center.year();
            next.month = center.month();
            let anchor = anchor_date(today, next.year, next.month)?;
            next.day_offset = (center - anchor).num_days();
            tracing::debug!(
                "Week strip moved to {}-{:02}, offset rebased to {}",
                next.year,
                next.month,
                next.day_offset
            );
        }

        Ok(next)
    }
}
