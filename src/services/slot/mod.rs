//! Week-grid time-slot model.
//!
//! Pure conversions between grid coordinates (day column, hour row,
//! pointer fraction within the cell) and wall-clock instants, and from
//! instants back into block geometry for rendering.

use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};
use thiserror::Error;

use crate::utils::date::{wall_clock, week_start};

/// Hour rows shown for every day; empty hours are never collapsed.
pub const HOURS_PER_DAY: u32 = 24;

/// Duration given to an event placed on a fresh slot, in minutes.
pub const DEFAULT_EVENT_DURATION_MINUTES: i64 = 60;

/// Minimum rendered block height so very short events stay visible and
/// clickable.
pub const MIN_BLOCK_HEIGHT_PERCENT: f32 = 5.0;

/// Errors from slot construction and conversion.
///
/// An out-of-range hour or fraction is a caller bug, caught when the
/// value is constructed rather than somewhere downstream.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SlotError {
    #[error("hour {0} is outside the 0-23 grid range")]
    HourOutOfRange(u32),
    #[error("pointer fraction {0} is outside [0, 1)")]
    FractionOutOfRange(f32),
    #[error("{date} {hour:02}:{minute:02} does not exist as a local wall-clock time")]
    InvalidWallClock {
        date: NaiveDate,
        hour: u32,
        minute: u32,
    },
}

/// Vertical pointer offset within a cell, as a fraction of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFraction(f32);

impl PointerFraction {
    pub fn new(value: f32) -> Result<Self, SlotError> {
        if !(0.0..1.0).contains(&value) {
            return Err(SlotError::FractionOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Fraction for a plain cell click, landing on the top of the hour.
    pub fn top() -> Self {
        Self(0.0)
    }

    /// Minute within the hour the fraction lands on.
    pub fn minute(self) -> u32 {
        (self.0 * 60.0).floor() as u32
    }
}

/// A (day, hour) cell in the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    date: NaiveDate,
    hour: u32,
}

impl Slot {
    pub fn new(date: NaiveDate, hour: u32) -> Result<Self, SlotError> {
        if hour >= HOURS_PER_DAY {
            return Err(SlotError::HourOutOfRange(hour));
        }
        Ok(Self { date, hour })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Wall-clock instant the pointer fraction lands on inside this slot.
    pub fn start_at(&self, fraction: PointerFraction) -> Result<DateTime<Local>, SlotError> {
        let minute = fraction.minute();
        wall_clock(self.date, self.hour, minute).ok_or(SlotError::InvalidWallClock {
            date: self.date,
            hour: self.hour,
            minute,
        })
    }

    /// Start and end instants for a fresh placement: the end is exactly
    /// one hour after the start.
    pub fn range_from(
        &self,
        fraction: PointerFraction,
    ) -> Result<(DateTime<Local>, DateTime<Local>), SlotError> {
        let start = self.start_at(fraction)?;
        Ok((
            start,
            start + Duration::minutes(DEFAULT_EVENT_DURATION_MINUTES),
        ))
    }
}

/// Rendered position of an event block inside its starting hour row, in
/// percent of one row's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub top_percent: f32,
    pub height_percent: f32,
}

/// Project a start/end pair back into grid geometry.
///
/// The height can exceed 100% so multi-hour events visually merge
/// across their rows. A block is clamped at the midnight boundary of
/// its start day and never shrinks below [`MIN_BLOCK_HEIGHT_PERCENT`].
pub fn block_geometry(start: DateTime<Local>, end: DateTime<Local>) -> BlockGeometry {
    let top_percent = (start.minute() as f32 / 60.0) * 100.0;

    let minutes_until_midnight =
        (HOURS_PER_DAY * 60 - (start.hour() * 60 + start.minute())) as i64;
    let duration_minutes = (end - start).num_minutes().clamp(0, minutes_until_midnight);

    let height_percent =
        ((duration_minutes as f32 / 60.0) * 100.0).max(MIN_BLOCK_HEIGHT_PERCENT);

    BlockGeometry {
        top_percent,
        height_percent,
    }
}

/// The seven consecutive days of the displayed week containing
/// `reference`, starting on the configured week boundary.
pub fn week_days(reference: NaiveDate, first_day_of_week: u8) -> [NaiveDate; 7] {
    let start = week_start(reference, first_day_of_week);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}
