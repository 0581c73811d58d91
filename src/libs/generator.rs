//! Automatic break schedule generation.
//!
//! Given a shift and the staff assigned to it on a weekday, the generator
//! places three breaks per person at fixed fractions of the shift and
//! staggers them so that colleagues, and whole departments, are not away at
//! the same time.
//!
//! ## Placement
//!
//! For a shift of `L` minutes starting at `S`:
//!
//! | Break | Anchor               | Length |
//! |-------|----------------------|--------|
//! | 1     | `S + ⌊L × 25 / 100⌋` | 30     |
//! | 2     | `S + ⌊L × 50 / 100⌋` | 45     |
//! | 3     | `S + ⌊L × 75 / 100⌋` | 30     |
//!
//! Every anchor is pushed back by a running offset. The offset grows by
//! 20 minutes after each staff member and by a further 10 minutes after
//! each department group. Departments are visited in the order they first
//! appear among the qualifying staff, and staff keep their roster order.
//!
//! ## Limits
//!
//! - The shift's `break_count` is not consulted: three breaks are always
//!   planned.
//! - Times past midnight keep counting hours (`24:10`); there is no day
//!   rollover.
//! - The shift must already be validated. The generator does not defend
//!   against inverted or malformed shifts.
//!
//! ## Usage
//!
//! ```rust
//! use breakplan::libs::generator::BreakPolicy;
//! # use breakplan::libs::{shift::ShiftDefinition, staff::Staff, assignment::WeeklyAssignment};
//! # fn plan(shift: &ShiftDefinition, roster: &[Staff], weeks: &[WeeklyAssignment]) {
//! let breaks = BreakPolicy::default().generate(shift, chrono::Weekday::Mon, roster, weeks);
//! # }
//! ```

use crate::libs::assignment::WeeklyAssignment;
use crate::libs::clock::MINUTES_PER_DAY;
use crate::libs::error::ValidationError;
use crate::libs::plan::{BreakRecord, MAX_BREAK_MINUTES, MIN_BREAK_MINUTES};
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::{Department, Staff};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Tunable constants of the staggering heuristic.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BreakPolicy {
    /// Position of each break within the shift, in percent of its length.
    pub anchors_percent: [u32; 3],
    /// Length of each break in minutes.
    pub durations: [u32; 3],
    /// Minutes added to the offset after each staff member.
    pub staff_stagger: u32,
    /// Extra minutes added to the offset after each department group.
    pub department_gap: u32,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        BreakPolicy {
            anchors_percent: [25, 50, 75],
            durations: [30, 45, 30],
            staff_stagger: 20,
            department_gap: 10,
        }
    }
}

impl BreakPolicy {
    /// Duration of a break by its 1-based number, if the policy defines it.
    pub fn duration_of(&self, break_number: u8) -> Option<u32> {
        let index = usize::from(break_number).checked_sub(1)?;
        self.durations.get(index).copied()
    }

    /// Checks values read from a config file before they reach the
    /// generator. Break lengths follow the same limits as manual breaks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(&percent) = self.anchors_percent.iter().find(|&&percent| percent > 100) {
            return Err(ValidationError::AnchorOutOfRange(percent));
        }
        if let Some(&duration) = self
            .durations
            .iter()
            .find(|&&duration| !(MIN_BREAK_MINUTES..=MAX_BREAK_MINUTES).contains(&duration))
        {
            return Err(ValidationError::DurationOutOfRange {
                got: duration,
                min: MIN_BREAK_MINUTES,
                max: MAX_BREAK_MINUTES,
            });
        }
        for offset in [self.staff_stagger, self.department_gap] {
            if offset > MINUTES_PER_DAY {
                return Err(ValidationError::OffsetOutOfRange {
                    got: offset,
                    max: MINUTES_PER_DAY,
                });
            }
        }
        Ok(())
    }

    /// Plans breaks for everyone assigned to `shift` on `weekday`.
    ///
    /// Returns an empty list when the shift does not run that day or when
    /// nobody is assigned to it.
    pub fn generate(&self, shift: &ShiftDefinition, weekday: Weekday, roster: &[Staff], assignments: &[WeeklyAssignment]) -> Vec<BreakRecord> {
        if !shift.works_on(weekday) {
            tracing::debug!(shift = %shift.name, ?weekday, "shift does not run on this day");
            return Vec::new();
        }

        let on_shift: Vec<&Staff> = roster
            .iter()
            .filter(|staff| assignments.iter().any(|week| week.staff_id == staff.id && week.is_assigned_to(weekday, &shift.id)))
            .collect();

        if on_shift.is_empty() {
            tracing::debug!(shift = %shift.name, ?weekday, "no staff assigned");
            return Vec::new();
        }

        let length = shift.length_minutes();
        let anchors = self.anchors_percent.map(|percent| shift.start.add_minutes(length * percent / 100));

        let (records, _) = group_by_department(&on_shift).into_iter().fold((Vec::new(), 0u32), |(mut records, offset), (_, members)| {
            let offset = members.into_iter().fold(offset, |offset, staff| {
                for (index, anchor) in anchors.iter().enumerate() {
                    let start = anchor.add_minutes(offset);
                    records.push(BreakRecord::generated(staff, index as u8 + 1, start, self.durations[index]));
                }
                offset + self.staff_stagger
            });
            (records, offset + self.department_gap)
        });

        tracing::debug!(shift = %shift.name, ?weekday, staff = on_shift.len(), breaks = records.len(), "generated break plan");
        records
    }
}

/// Plans breaks with the default policy.
pub fn generate(shift: &ShiftDefinition, weekday: Weekday, roster: &[Staff], assignments: &[WeeklyAssignment]) -> Vec<BreakRecord> {
    BreakPolicy::default().generate(shift, weekday, roster, assignments)
}

/// Groups staff by department, keeping discovery order for both levels.
fn group_by_department<'a>(staff: &[&'a Staff]) -> Vec<(Department, Vec<&'a Staff>)> {
    let mut groups: Vec<(Department, Vec<&'a Staff>)> = Vec::new();
    for member in staff {
        match groups.iter_mut().find(|(department, _)| *department == member.department) {
            Some((_, members)) => members.push(member),
            None => groups.push((member.department, vec![member])),
        }
    }
    groups
}
