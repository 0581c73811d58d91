//! Weekly shift and leave assignments.
//!
//! Every staff member has at most one weekly pattern: seven day slots, each
//! either empty, assigned to a shift, or marked as a leave. The slot is an
//! enum so a day can never carry a shift and a leave at the same time.

use crate::libs::error::ValidationError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Categories of non-working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeaveCode {
    /// Regular weekly day off
    Weekly,
    Paid,
    Unpaid,
    /// Sick leave backed by a medical report
    Sick,
}

impl fmt::Display for LeaveCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeaveCode::Weekly => "Weekly leave",
            LeaveCode::Paid => "Paid leave",
            LeaveCode::Unpaid => "Unpaid leave",
            LeaveCode::Sick => "Sick leave",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySlot {
    #[default]
    Empty,
    Shift(String),
    Leave(LeaveCode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAssignment {
    pub id: String,
    pub staff_id: String,
    /// Indexed by `Weekday::num_days_from_sunday()`.
    pub days: [DaySlot; 7],
}

impl WeeklyAssignment {
    pub fn new(staff_id: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            staff_id: staff_id.to_string(),
            days: Default::default(),
        }
    }

    pub fn slot(&self, weekday: Weekday) -> &DaySlot {
        &self.days[weekday.num_days_from_sunday() as usize]
    }

    /// Assigns a shift for the day, replacing any leave.
    pub fn set_shift(&mut self, weekday: Weekday, shift_id: &str) {
        self.days[weekday.num_days_from_sunday() as usize] = if shift_id.is_empty() {
            DaySlot::Empty
        } else {
            DaySlot::Shift(shift_id.to_string())
        };
    }

    /// Marks the day as a leave, replacing any shift.
    pub fn set_leave(&mut self, weekday: Weekday, leave: LeaveCode) {
        self.days[weekday.num_days_from_sunday() as usize] = DaySlot::Leave(leave);
    }

    pub fn clear_day(&mut self, weekday: Weekday) {
        self.days[weekday.num_days_from_sunday() as usize] = DaySlot::Empty;
    }

    pub fn shift_on(&self, weekday: Weekday) -> Option<&str> {
        match self.slot(weekday) {
            DaySlot::Shift(shift_id) => Some(shift_id.as_str()),
            _ => None,
        }
    }

    pub fn is_assigned_to(&self, weekday: Weekday, shift_id: &str) -> bool {
        self.shift_on(weekday) == Some(shift_id)
    }

    /// Empties every day that points at `shift_id`. Returns whether anything changed.
    pub fn clear_shift(&mut self, shift_id: &str) -> bool {
        let mut changed = false;
        for slot in self.days.iter_mut() {
            if matches!(slot, DaySlot::Shift(id) if id == shift_id) {
                *slot = DaySlot::Empty;
                changed = true;
            }
        }
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|slot| *slot == DaySlot::Empty)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.staff_id.is_empty() {
            return Err(ValidationError::NoStaffSelected);
        }
        if self.is_empty() {
            return Err(ValidationError::EmptyWeek);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_leave_replace_each_other() {
        let mut week = WeeklyAssignment::new("staff-1");
        week.set_leave(Weekday::Mon, LeaveCode::Sick);
        week.set_shift(Weekday::Mon, "morning");
        assert_eq!(week.slot(Weekday::Mon), &DaySlot::Shift("morning".to_string()));

        week.set_leave(Weekday::Mon, LeaveCode::Paid);
        assert_eq!(week.slot(Weekday::Mon), &DaySlot::Leave(LeaveCode::Paid));
        assert_eq!(week.shift_on(Weekday::Mon), None);
    }

    #[test]
    fn sunday_occupies_slot_zero() {
        let mut week = WeeklyAssignment::new("staff-1");
        week.set_shift(Weekday::Sun, "weekend");
        assert_eq!(week.days[0], DaySlot::Shift("weekend".to_string()));
    }

    #[test]
    fn empty_week_is_rejected() {
        let week = WeeklyAssignment::new("staff-1");
        assert_eq!(week.validate(), Err(ValidationError::EmptyWeek));

        let week = WeeklyAssignment::new("");
        assert_eq!(week.validate(), Err(ValidationError::NoStaffSelected));
    }

    #[test]
    fn clearing_a_shift_keeps_leaves() {
        let mut week = WeeklyAssignment::new("staff-1");
        week.set_shift(Weekday::Mon, "morning");
        week.set_shift(Weekday::Tue, "morning");
        week.set_leave(Weekday::Wed, LeaveCode::Weekly);

        assert!(week.clear_shift("morning"));
        assert!(!week.clear_shift("morning"));
        assert_eq!(week.slot(Weekday::Mon), &DaySlot::Empty);
        assert_eq!(week.slot(Weekday::Wed), &DaySlot::Leave(LeaveCode::Weekly));
    }
}
