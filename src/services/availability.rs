//! Slot availability service
//!
//! Occupancy is simulated: every (date, slot) pair is hashed with a small
//! linear congruential step, so the same pair always shows the same counts.

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Utc, Weekday};

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        calendar::day_name,
        slot::{
            DaySchedule, ScheduledSlot, SlotAvailability, SlotTime, StatusWording, SLOT_CAPACITY,
        },
    },
};

const LCG_MULTIPLIER: f64 = 9301.0;
const LCG_INCREMENT: f64 = 49297.0;
const LCG_MODULUS: f64 = 233280.0;

/// Milliseconds between slots of the same date in the seed
const SLOT_SEED_STRIDE_MS: i64 = 1000;

/// Milliseconds since the Unix epoch of `date`'s midnight at `offset`
pub fn epoch_millis(date: NaiveDate, offset: FixedOffset) -> i64 {
    let utc_midnight = date.and_time(NaiveTime::default()).and_utc().timestamp_millis();
    utc_midnight - i64::from(offset.local_minus_utc()) * 1000
}

/// Booked places for a seed. Evaluated in doubles: for present-day dates
/// `seed * 9301` exceeds 2^53 and the rounding is part of the result.
pub fn booked_for_seed(seed: i64) -> u32 {
    let hash = (seed as f64 * LCG_MULTIPLIER + LCG_INCREMENT).rem_euclid(LCG_MODULUS);
    let normalized = hash / LCG_MODULUS;
    let booked = (normalized * f64::from(SLOT_CAPACITY + 1)).floor() as u32;
    booked.min(SLOT_CAPACITY)
}

/// Simulated availability of `slot_index` on `date`, seeded at UTC midnight
pub fn availability(date: NaiveDate, slot_index: usize) -> SlotAvailability {
    availability_at(date, slot_index, utc(), StatusWording::Short)
}

fn availability_at(
    date: NaiveDate,
    slot_index: usize,
    offset: FixedOffset,
    wording: StatusWording,
) -> SlotAvailability {
    let seed = epoch_millis(date, offset) + slot_index as i64 * SLOT_SEED_STRIDE_MS;
    SlotAvailability::from_booked(slot_index, booked_for_seed(seed), wording)
}

fn utc() -> FixedOffset {
    Utc.fix()
}

#[derive(Clone, Debug)]
pub struct AvailabilityService {
    slot_times: Vec<SlotTime>,
    closed_weekday: Weekday,
    seed_offset: FixedOffset,
    wording: StatusWording,
}

impl AvailabilityService {
    pub fn new(config: &BookingConfig) -> AppResult<Self> {
        let closed_weekday = config.closed_weekday.parse::<Weekday>().map_err(|_| {
            AppError::Internal(format!("Invalid closed weekday: {}", config.closed_weekday))
        })?;
        let seed_offset = config
            .seed_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Invalid seed UTC offset: {} minutes",
                    config.seed_utc_offset_minutes
                ))
            })?;
        if config.slot_times.is_empty() {
            return Err(AppError::Internal("No slot times configured".to_string()));
        }

        Ok(Self {
            slot_times: config.slot_times.clone(),
            closed_weekday,
            seed_offset,
            wording: config.status_wording,
        })
    }

    pub fn slot_times(&self) -> &[SlotTime] {
        &self.slot_times
    }

    /// The wall is closed one weekday a week
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        date.weekday() == self.closed_weekday
    }

    /// Generator output for one slot, flagged when the date is a holiday
    pub fn slot(
        &self,
        date: NaiveDate,
        slot_index: usize,
        wording: Option<StatusWording>,
    ) -> AppResult<SlotAvailability> {
        if slot_index >= self.slot_times.len() {
            return Err(AppError::Validation(format!(
                "Slot index must be between 0 and {}",
                self.slot_times.len() - 1
            )));
        }
        let mut slot = availability_at(
            date,
            slot_index,
            self.seed_offset,
            wording.unwrap_or(self.wording),
        );
        slot.holiday = self.is_holiday(date);
        Ok(slot)
    }

    /// Every slot of a date, or an empty holiday schedule
    pub fn day(&self, date: NaiveDate, wording: Option<StatusWording>) -> DaySchedule {
        let holiday = self.is_holiday(date);
        let wording = wording.unwrap_or(self.wording);

        let slots = if holiday {
            tracing::debug!("{} is a holiday, slots hidden", date);
            Vec::new()
        } else {
            self.slot_times
                .iter()
                .enumerate()
                .map(|(index, slot_time)| ScheduledSlot {
                    time: slot_time.time.clone(),
                    period: slot_time.period.clone(),
                    availability: availability_at(date, index, self.seed_offset, wording),
                })
                .collect()
        };

        DaySchedule {
            date,
            weekday: day_name(date).to_string(),
            holiday,
            slots,
        }
    }
}
