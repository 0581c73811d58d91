//! Wall-clock times of day in `HH:MM` form.
//!
//! Shift boundaries and break windows are stored as minutes since midnight.
//! Two kinds of arithmetic are offered:
//!
//! - [`ClockTime::add_minutes`] keeps counting past midnight, so a generated
//!   break late in the evening may render as `24:15`. Day rollover is not
//!   handled by the generator.
//! - [`ClockTime::add_minutes_wrapping`] behaves like a time picker and wraps
//!   at 24 hours. It is used for manual break edits.

use crate::libs::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// A time of day, counted in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Builds a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if minute >= MINUTES_PER_HOUR {
            return Err(ValidationError::InvalidTime(format!("{}:{:02}", hour, minute)));
        }
        Ok(Self {
            minutes: hour * MINUTES_PER_HOUR + minute,
        })
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn hour(&self) -> u32 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        self.minutes % MINUTES_PER_HOUR
    }

    /// Whether the time lies before midnight of the same day.
    pub fn is_within_day(&self) -> bool {
        self.minutes < MINUTES_PER_DAY
    }

    /// Adds minutes without any day rollover.
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self {
            minutes: self.minutes + minutes,
        }
    }

    /// Adds minutes on a 24-hour dial.
    pub fn add_minutes_wrapping(self, minutes: u32) -> Self {
        Self {
            minutes: (self.minutes + minutes) % MINUTES_PER_DAY,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;

        let is_component = |part: &str| !part.is_empty() && part.len() <= 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !is_component(hour) || minute.len() != 2 || !is_component(minute) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        ClockTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_zero_padded() {
        let time: ClockTime = "9:05".parse().unwrap();
        assert_eq!(time.minutes(), 545);
        assert_eq!(time.to_string(), "09:05");
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "9", "09:5", "09:60", "ab:cd", "09:00:00", "123:00", "-1:00"] {
            assert!(input.parse::<ClockTime>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn plain_addition_runs_past_midnight() {
        let time: ClockTime = "23:50".parse().unwrap();
        assert_eq!(time.add_minutes(25).to_string(), "24:15");
        assert!(!time.add_minutes(25).is_within_day());
    }

    #[test]
    fn wrapping_addition_stays_on_the_dial() {
        let time: ClockTime = "23:50".parse().unwrap();
        assert_eq!(time.add_minutes_wrapping(25).to_string(), "00:15");
    }

    #[test]
    fn round_trips_through_json_as_string() {
        let time: ClockTime = "24:15".parse().unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"24:15\"");
        assert_eq!(serde_json::from_str::<ClockTime>(&json).unwrap(), time);
    }
}
