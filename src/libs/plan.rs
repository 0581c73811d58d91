//! Break plans and the manual editing surface around them.
//!
//! A [`BreakPlan`] holds the breaks of one shift on one date. The
//! [`PlanBook`] owns every plan and guarantees there is at most one per
//! `(date, shift)` pair. Plans are created lazily: the first time a date and
//! shift are looked at, the generator fills a new plan, and from then on the
//! plan is only changed by manual edits, by regeneration, or by a reset.
//!
//! ## Editing rules
//!
//! - Saving a new break sets its end to `start + duration` on a 24-hour
//!   dial. Saving an existing break does the same when its start or
//!   duration changed; otherwise the given end is kept. The department is
//!   refreshed from the roster on every save.
//! - A staff member holds each break number at most once per plan. Saving a
//!   second break with the same number, or renumbering onto a taken one, is
//!   rejected.
//! - [`BreakRecord::apply`] recomputes the end when the start or duration
//!   changes. Changing only the end moves the end and leaves the duration
//!   alone.
//! - Edits and deletions are keyed by `(date, shift, break id)`. An unknown
//!   break id is a no-op.

use crate::libs::assignment::WeeklyAssignment;
use crate::libs::clock::ClockTime;
use crate::libs::error::ValidationError;
use crate::libs::generator::BreakPolicy;
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::{Department, Staff};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest break number offered for manual breaks.
pub const MAX_BREAK_NUMBER: u8 = 3;
/// Allowed manual break length in minutes.
pub const MIN_BREAK_MINUTES: u32 = 5;
pub const MAX_BREAK_MINUTES: u32 = 120;

/// One staff member's single break window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRecord {
    pub id: String,
    pub staff_id: String,
    pub break_number: u8,
    pub start: ClockTime,
    pub end: ClockTime,
    /// Length in minutes
    pub duration: u32,
    /// Department of the staff member when the break was saved.
    pub department: Department,
}

/// Field changes for an existing break. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakEdit {
    pub staff_id: Option<String>,
    pub break_number: Option<u8>,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub duration: Option<u32>,
}

impl BreakRecord {
    /// Record produced by the generator; the end is not wrapped at midnight.
    pub fn generated(staff: &Staff, break_number: u8, start: ClockTime, duration: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            staff_id: staff.id.clone(),
            break_number,
            start,
            end: start.add_minutes(duration),
            duration,
            department: staff.department,
        }
    }

    /// New manual break with the usual defaults for its number
    /// (1: 10:00 for 30 min, 2: 14:00 for 45 min, 3: 17:00 for 30 min).
    pub fn manual(staff: &Staff, break_number: u8) -> Result<Self, ValidationError> {
        let (start, duration) = match break_number {
            1 => (ClockTime::new(10, 0)?, 30),
            2 => (ClockTime::new(14, 0)?, 45),
            3 => (ClockTime::new(17, 0)?, 30),
            got => {
                return Err(ValidationError::BreakNumberOutOfRange {
                    got,
                    max: MAX_BREAK_NUMBER,
                })
            }
        };
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            staff_id: staff.id.clone(),
            break_number,
            start,
            end: start.add_minutes_wrapping(duration),
            duration,
            department: staff.department,
        })
    }

    /// Applies an edit. A new start or duration recomputes the end; a new
    /// end alone never recomputes the duration.
    pub fn apply(&mut self, edit: BreakEdit) {
        if let Some(staff_id) = edit.staff_id {
            self.staff_id = staff_id;
        }
        if let Some(break_number) = edit.break_number {
            self.break_number = break_number;
        }

        let retimed = edit.start.is_some() || edit.duration.is_some();
        if let Some(start) = edit.start {
            self.start = start;
        }
        if let Some(duration) = edit.duration {
            self.duration = duration;
        }

        if retimed {
            self.end = self.start.add_minutes_wrapping(self.duration);
        } else if let Some(end) = edit.end {
            self.end = end;
        }
    }

    /// `HH:MM-HH:MM`
    pub fn window(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.staff_id.is_empty() {
            return Err(ValidationError::NoStaffSelected);
        }
        if !(1..=MAX_BREAK_NUMBER).contains(&self.break_number) {
            return Err(ValidationError::BreakNumberOutOfRange {
                got: self.break_number,
                max: MAX_BREAK_NUMBER,
            });
        }
        if !(MIN_BREAK_MINUTES..=MAX_BREAK_MINUTES).contains(&self.duration) {
            return Err(ValidationError::DurationOutOfRange {
                got: self.duration,
                min: MIN_BREAK_MINUTES,
                max: MAX_BREAK_MINUTES,
            });
        }
        Ok(())
    }
}

/// Breaks of one shift on one date, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPlan {
    pub id: String,
    pub date: NaiveDate,
    pub shift_id: String,
    pub breaks: Vec<BreakRecord>,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl BreakPlan {
    pub fn new(date: NaiveDate, shift_id: &str, breaks: Vec<BreakRecord>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            shift_id: shift_id.to_string(),
            breaks,
            created_at: Local::now().naive_local(),
            updated_at: None,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Some(Local::now().naive_local());
    }
}

/// Every break plan, at most one per `(date, shift)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanBook {
    plans: Vec<BreakPlan>,
}

impl PlanBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self) -> &[BreakPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn find(&self, date: NaiveDate, shift_id: &str) -> Option<&BreakPlan> {
        self.plans.iter().find(|plan| plan.date == date && plan.shift_id == shift_id)
    }

    fn position(&self, date: NaiveDate, shift_id: &str) -> Option<usize> {
        self.plans.iter().position(|plan| plan.date == date && plan.shift_id == shift_id)
    }

    /// Plans dated `date`, in the order they were created.
    pub fn plans_on(&self, date: NaiveDate) -> impl Iterator<Item = &BreakPlan> {
        self.plans.iter().filter(move |plan| plan.date == date)
    }

    /// Returns the plan for `(date, shift)`, generating it on first access.
    ///
    /// No plan is created when the generator finds nobody on the shift.
    pub fn get_or_generate(
        &mut self,
        date: NaiveDate,
        shift: &ShiftDefinition,
        roster: &[Staff],
        assignments: &[WeeklyAssignment],
        policy: &BreakPolicy,
    ) -> Option<&BreakPlan> {
        let index = match self.position(date, &shift.id) {
            Some(index) => index,
            None => {
                let breaks = policy.generate(shift, date.weekday(), roster, assignments);
                if breaks.is_empty() {
                    return None;
                }
                tracing::debug!(%date, shift = %shift.name, breaks = breaks.len(), "created break plan");
                self.plans.push(BreakPlan::new(date, &shift.id, breaks));
                self.plans.len() - 1
            }
        };
        self.plans.get(index)
    }

    /// Replaces the breaks of `(date, shift)` with a fresh generator run.
    ///
    /// Returns the number of generated breaks. An existing plan is kept even
    /// when the new run is empty, so manual breaks can still be added to it.
    pub fn regenerate(
        &mut self,
        date: NaiveDate,
        shift: &ShiftDefinition,
        roster: &[Staff],
        assignments: &[WeeklyAssignment],
        policy: &BreakPolicy,
    ) -> usize {
        let breaks = policy.generate(shift, date.weekday(), roster, assignments);
        let count = breaks.len();
        match self.position(date, &shift.id) {
            Some(index) => {
                let plan = &mut self.plans[index];
                plan.breaks = breaks;
                plan.touch();
            }
            None if count > 0 => self.plans.push(BreakPlan::new(date, &shift.id, breaks)),
            None => {}
        }
        count
    }

    /// Saves a break into the `(date, shift)` plan, replacing the record with
    /// the same id or appending it. Creates the plan when missing.
    pub fn upsert_break(&mut self, date: NaiveDate, shift_id: &str, mut record: BreakRecord, roster: &[Staff]) -> Result<(), ValidationError> {
        if shift_id.is_empty() {
            return Err(ValidationError::NoShiftSelected);
        }
        record.validate()?;

        let staff = roster
            .iter()
            .find(|staff| staff.id == record.staff_id)
            .ok_or_else(|| ValidationError::UnknownStaff(record.staff_id.clone()))?;
        record.department = staff.department;

        let taken = self.find(date, shift_id).is_some_and(|plan| {
            plan.breaks
                .iter()
                .any(|other| other.id != record.id && other.staff_id == record.staff_id && other.break_number == record.break_number)
        });
        if taken {
            return Err(ValidationError::DuplicateBreak {
                staff: staff.full_name(),
                number: record.break_number,
            });
        }

        let retime = |record: &mut BreakRecord| record.end = record.start.add_minutes_wrapping(record.duration);

        match self.position(date, shift_id) {
            Some(index) => {
                let plan = &mut self.plans[index];
                match plan.breaks.iter_mut().find(|existing| existing.id == record.id) {
                    Some(existing) => {
                        if existing.start != record.start || existing.duration != record.duration {
                            retime(&mut record);
                        }
                        *existing = record;
                    }
                    None => {
                        retime(&mut record);
                        plan.breaks.push(record);
                    }
                }
                plan.touch();
            }
            None => {
                retime(&mut record);
                self.plans.push(BreakPlan::new(date, shift_id, vec![record]));
            }
        }
        Ok(())
    }

    /// Looks up a break inside the `(date, shift)` plan.
    pub fn find_break(&self, date: NaiveDate, shift_id: &str, break_id: &str) -> Option<&BreakRecord> {
        self.find(date, shift_id)?.breaks.iter().find(|record| record.id == break_id)
    }

    /// Removes a break from the `(date, shift)` plan. Returns whether a
    /// record was removed; an unknown id changes nothing.
    pub fn delete_break(&mut self, date: NaiveDate, shift_id: &str, break_id: &str) -> bool {
        let Some(index) = self.position(date, shift_id) else {
            return false;
        };
        let plan = &mut self.plans[index];
        let before = plan.breaks.len();
        plan.breaks.retain(|record| record.id != break_id);
        if plan.breaks.len() == before {
            return false;
        }
        plan.touch();
        true
    }

    /// All breaks of every shift on `date`, plan by plan.
    pub fn merge_all_shifts(&self, date: NaiveDate) -> Vec<BreakRecord> {
        self.plans_on(date).flat_map(|plan| plan.breaks.iter().cloned()).collect()
    }

    /// Drops the plans of `date`, or only the one of `shift_id` when given.
    /// Returns the number of removed plans.
    pub fn reset(&mut self, date: NaiveDate, shift_id: Option<&str>) -> usize {
        let before = self.plans.len();
        self.plans
            .retain(|plan| !(plan.date == date && shift_id.map_or(true, |shift_id| plan.shift_id == shift_id)));
        before - self.plans.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn duration_edit_recomputes_end() {
        let staff = Staff::new("Ada", "Lovelace", Department::Sales);
        let mut record = BreakRecord::manual(&staff, 1).unwrap();
        assert_eq!(record.window(), "10:00-10:30");

        record.apply(BreakEdit {
            duration: Some(45),
            ..Default::default()
        });
        assert_eq!(record.end, time("10:45"));
    }

    #[test]
    fn end_edit_keeps_duration() {
        let staff = Staff::new("Ada", "Lovelace", Department::Sales);
        let mut record = BreakRecord::manual(&staff, 1).unwrap();

        record.apply(BreakEdit {
            end: Some(time("11:00")),
            ..Default::default()
        });
        assert_eq!(record.end, time("11:00"));
        assert_eq!(record.duration, 30);
    }

    #[test]
    fn manual_defaults_follow_break_number() {
        let staff = Staff::new("Ada", "", Department::Cashier);
        assert_eq!(BreakRecord::manual(&staff, 2).unwrap().window(), "14:00-14:45");
        assert_eq!(BreakRecord::manual(&staff, 3).unwrap().window(), "17:00-17:30");
        assert!(BreakRecord::manual(&staff, 4).is_err());
    }
}
