//! Shift templates.
//!
//! A shift is a named, time-bounded work period active on a subset of
//! weekdays. Overnight shifts are not supported: a valid shift starts and
//! ends on the same day with `start < end`. [`ShiftDefinition::validate`] is
//! the only place that guards this, so every shift must pass through it
//! before the generator sees it.

use crate::libs::clock::ClockTime;
use crate::libs::error::ValidationError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "18:00";
pub const DEFAULT_BREAK_COUNT: u8 = 3;

/// Days of the week in Monday-first display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    pub id: String,
    pub name: String,
    pub start: ClockTime,
    pub end: ClockTime,
    pub work_days: Vec<Weekday>,
    /// Stored for display; the generator always plans three breaks.
    pub break_count: u8,
}

impl ShiftDefinition {
    pub fn new(name: &str, start: ClockTime, end: ClockTime, work_days: &[Weekday], break_count: u8) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            start,
            end,
            work_days: normalize_days(work_days),
            break_count,
        }
    }

    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.work_days.contains(&weekday)
    }

    /// Length of the shift in minutes. Only meaningful for validated shifts.
    pub fn length_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// `Name (HH:MM - HH:MM)`
    pub fn label(&self) -> String {
        format!("{} ({} - {})", self.name, self.start, self.end)
    }

    pub fn set_work_days(&mut self, work_days: &[Weekday]) {
        self.work_days = normalize_days(work_days);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingShiftName);
        }
        if self.work_days.is_empty() {
            return Err(ValidationError::NoWorkDays);
        }
        for time in [self.start, self.end] {
            if !time.is_within_day() {
                return Err(ValidationError::OutsideDay(time.to_string()));
            }
        }
        if self.start >= self.end {
            return Err(ValidationError::NonPositiveShift {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        if self.break_count == 0 {
            return Err(ValidationError::ZeroBreakCount);
        }
        Ok(())
    }
}

fn normalize_days(days: &[Weekday]) -> Vec<Weekday> {
    WEEK.iter().copied().filter(|day| days.contains(day)).collect()
}

/// Weekday from its Sunday-based index (0 = Sunday ... 6 = Saturday).
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1..=6 => Some(WEEK[index as usize - 1]),
        _ => None,
    }
}

/// Parses a weekday given either as a Sunday-based index or by name.
pub fn parse_weekday(input: &str) -> Result<Weekday, ValidationError> {
    let input = input.trim();
    if let Ok(index) = input.parse::<u8>() {
        return weekday_from_index(index).ok_or_else(|| ValidationError::UnknownWeekday(input.to_string()));
    }
    input.parse::<Weekday>().map_err(|_| ValidationError::UnknownWeekday(input.to_string()))
}
