//! Read access to the roster, the shift catalog and the weekly plans.
//!
//! The break generator only ever sees slices. These traits are what callers
//! depend on to get those slices, so a plan can be previewed from the store,
//! from a loaded backup snapshot, or from fixtures in tests.

use super::store::{Snapshot, Store};
use crate::libs::assignment::WeeklyAssignment;
use crate::libs::error::ValidationError;
use crate::libs::generator::BreakPolicy;
use crate::libs::plan::BreakRecord;
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::Staff;
use chrono::{Datelike, NaiveDate};

pub trait Roster {
    fn staff(&self) -> &[Staff];
}

pub trait ShiftCatalog {
    fn shifts(&self) -> &[ShiftDefinition];
}

pub trait AssignmentBook {
    fn assignments(&self) -> &[WeeklyAssignment];
}

/// Runs the generator for `shift_id` on `date` without storing anything.
pub fn preview_breaks<S>(source: &S, shift_id: &str, date: NaiveDate, policy: &BreakPolicy) -> Result<Vec<BreakRecord>, ValidationError>
where
    S: Roster + ShiftCatalog + AssignmentBook,
{
    let shift = source
        .shifts()
        .iter()
        .find(|shift| shift.id == shift_id)
        .ok_or_else(|| ValidationError::UnknownShift(shift_id.to_string()))?;
    Ok(policy.generate(shift, date.weekday(), source.staff(), source.assignments()))
}

impl Roster for Snapshot {
    fn staff(&self) -> &[Staff] {
        &self.staff
    }
}

impl ShiftCatalog for Snapshot {
    fn shifts(&self) -> &[ShiftDefinition] {
        &self.shifts
    }
}

impl AssignmentBook for Snapshot {
    fn assignments(&self) -> &[WeeklyAssignment] {
        &self.assignments
    }
}

impl Roster for Store {
    fn staff(&self) -> &[Staff] {
        self.snapshot().staff()
    }
}

impl ShiftCatalog for Store {
    fn shifts(&self) -> &[ShiftDefinition] {
        self.snapshot().shifts()
    }
}

impl AssignmentBook for Store {
    fn assignments(&self) -> &[WeeklyAssignment] {
        self.snapshot().assignments()
    }
}
