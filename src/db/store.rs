//! JSON data file holding the roster, shifts, weekly plans and break plans.
//!
//! The whole data set is small (tens of staff, a few shifts), so it is read
//! into memory on open and written back in one piece on [`Store::save`].
//!
//! ## File layout
//!
//! ```json
//! {
//!   "staff": [{ "id": "...", "first_name": "Ada", "department": "sales", ... }],
//!   "shifts": [{ "id": "...", "name": "Day", "start": "09:00", "end": "18:00", ... }],
//!   "assignments": [{ "staff_id": "...", "days": ["empty", { "shift": "..." }, ...] }],
//!   "plans": [{ "date": "2025-03-03", "shift_id": "...", "breaks": [...], ... }]
//! }
//! ```

use crate::libs::assignment::{DaySlot, WeeklyAssignment};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::ValidationError;
use crate::libs::generator::BreakPolicy;
use crate::libs::messages::Message;
use crate::libs::plan::{BreakPlan, BreakRecord, PlanBook};
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::Staff;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "breakplan.json";

/// Everything the application persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub shifts: Vec<ShiftDefinition>,
    #[serde(default)]
    pub assignments: Vec<WeeklyAssignment>,
    #[serde(default)]
    pub plans: PlanBook,
}

/// Backup file: the snapshot plus when it was taken.
#[derive(Debug, Serialize, Deserialize)]
struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backed_up_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    data: Snapshot,
}

/// Result of looking up an id or a unique id prefix.
pub enum Lookup<'a, T> {
    Found(&'a T),
    Missing,
    Ambiguous,
}

/// Finds the item whose id equals `key`, or the single item whose id starts with it.
pub fn lookup<'a, T>(items: &'a [T], key: &str, id: impl Fn(&T) -> &str) -> Lookup<'a, T> {
    if let Some(item) = items.iter().find(|item| id(*item) == key) {
        return Lookup::Found(item);
    }
    let mut matches = items.iter().filter(|item| !key.is_empty() && id(*item).starts_with(key));
    match (matches.next(), matches.next()) {
        (Some(item), None) => Lookup::Found(item),
        (Some(_), Some(_)) => Lookup::Ambiguous,
        _ => Lookup::Missing,
    }
}

pub struct Store {
    path: PathBuf,
    data: Snapshot,
}

impl Store {
    /// Opens the data file in the application data directory.
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(DATA_FILE_NAME)?;
        Self::open(path)
    }

    /// Opens a data file; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            read_json::<Snapshot>(&path)?
        } else {
            Snapshot::default()
        };
        tracing::debug!(path = %path.display(), staff = data.staff.len(), shifts = data.shifts.len(), plans = data.plans.len(), "opened store");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path).with_context(|| format!("Failed to write {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, &self.data)?;
        Ok(())
    }

    // === STAFF ===

    pub fn staff(&self) -> &[Staff] {
        &self.data.staff
    }

    pub fn find_staff(&self, key: &str) -> Result<&Staff> {
        match lookup(&self.data.staff, key, |staff| staff.id.as_str()) {
            Lookup::Found(staff) => Ok(staff),
            Lookup::Missing => Err(msg_error_anyhow!(Message::StaffNotFound(key.to_string()))),
            Lookup::Ambiguous => Err(msg_error_anyhow!(Message::StaffIdAmbiguous(key.to_string()))),
        }
    }

    pub fn add_staff(&mut self, staff: Staff) -> Result<&Staff> {
        staff.validate()?;
        self.data.staff.push(staff);
        Ok(&self.data.staff[self.data.staff.len() - 1])
    }

    /// Replaces the roster entry with the same id. Existing break records keep
    /// the department they were saved with.
    pub fn update_staff(&mut self, staff: Staff) -> Result<()> {
        staff.validate()?;
        let Some(existing) = self.data.staff.iter_mut().find(|existing| existing.id == staff.id) else {
            msg_bail_anyhow!(Message::StaffNotFound(staff.id));
        };
        *existing = staff;
        Ok(())
    }

    pub fn remove_staff(&mut self, id: &str) -> Option<Staff> {
        let index = self.data.staff.iter().position(|staff| staff.id == id)?;
        Some(self.data.staff.remove(index))
    }

    // === SHIFTS ===

    pub fn shifts(&self) -> &[ShiftDefinition] {
        &self.data.shifts
    }

    pub fn find_shift(&self, key: &str) -> Result<&ShiftDefinition> {
        match lookup(&self.data.shifts, key, |shift| shift.id.as_str()) {
            Lookup::Found(shift) => Ok(shift),
            Lookup::Missing => Err(msg_error_anyhow!(Message::ShiftNotFound(key.to_string()))),
            Lookup::Ambiguous => Err(msg_error_anyhow!(Message::ShiftIdAmbiguous(key.to_string()))),
        }
    }

    pub fn add_shift(&mut self, shift: ShiftDefinition) -> Result<&ShiftDefinition> {
        shift.validate()?;
        self.data.shifts.push(shift);
        Ok(&self.data.shifts[self.data.shifts.len() - 1])
    }

    pub fn update_shift(&mut self, shift: ShiftDefinition) -> Result<()> {
        shift.validate()?;
        let Some(existing) = self.data.shifts.iter_mut().find(|existing| existing.id == shift.id) else {
            msg_bail_anyhow!(Message::ShiftNotFound(shift.id));
        };
        *existing = shift;
        Ok(())
    }

    /// Removes a shift and clears it from every weekly assignment.
    /// Returns the shift and the number of assignments that referenced it.
    pub fn remove_shift(&mut self, id: &str) -> Option<(ShiftDefinition, usize)> {
        let index = self.data.shifts.iter().position(|shift| shift.id == id)?;
        let shift = self.data.shifts.remove(index);
        let cleared = self
            .data
            .assignments
            .iter_mut()
            .map(|week| week.clear_shift(id))
            .filter(|changed| *changed)
            .count();
        Some((shift, cleared))
    }

    // === WEEKLY ASSIGNMENTS ===

    pub fn assignments(&self) -> &[WeeklyAssignment] {
        &self.data.assignments
    }

    pub fn assignment_for(&self, staff_id: &str) -> Option<&WeeklyAssignment> {
        self.data.assignments.iter().find(|week| week.staff_id == staff_id)
    }

    /// Saves the weekly plan of a staff member, replacing an existing one
    /// but keeping its id.
    pub fn save_assignment(&mut self, mut assignment: WeeklyAssignment) -> Result<()> {
        assignment.validate()?;
        if !self.data.staff.iter().any(|staff| staff.id == assignment.staff_id) {
            return Err(ValidationError::UnknownStaff(assignment.staff_id).into());
        }
        for slot in &assignment.days {
            if let DaySlot::Shift(shift_id) = slot {
                if !self.data.shifts.iter().any(|shift| &shift.id == shift_id) {
                    return Err(ValidationError::UnknownShift(shift_id.clone()).into());
                }
            }
        }

        match self.data.assignments.iter_mut().find(|week| week.staff_id == assignment.staff_id) {
            Some(existing) => {
                assignment.id = existing.id.clone();
                *existing = assignment;
            }
            None => self.data.assignments.push(assignment),
        }
        Ok(())
    }

    pub fn remove_assignment(&mut self, staff_id: &str) -> bool {
        let before = self.data.assignments.len();
        self.data.assignments.retain(|week| week.staff_id != staff_id);
        self.data.assignments.len() != before
    }

    // === BREAK PLANS ===

    pub fn plans(&self) -> &PlanBook {
        &self.data.plans
    }

    pub fn plans_mut(&mut self) -> &mut PlanBook {
        &mut self.data.plans
    }

    /// Break plan of a shift on a date, generated on first access.
    pub fn break_plan(&mut self, date: NaiveDate, shift_id: &str, policy: &BreakPolicy) -> Result<Option<&BreakPlan>> {
        let Snapshot { staff, shifts, assignments, plans } = &mut self.data;
        let shift = shifts
            .iter()
            .find(|shift| shift.id == shift_id)
            .ok_or_else(|| ValidationError::UnknownShift(shift_id.to_string()))?;
        Ok(plans.get_or_generate(date, shift, staff, assignments, policy))
    }

    /// Generates break plans for every shift running on `date` that has none yet.
    pub fn ensure_plans_for(&mut self, date: NaiveDate, policy: &BreakPolicy) {
        let Snapshot { staff, shifts, assignments, plans } = &mut self.data;
        for shift in shifts.iter() {
            plans.get_or_generate(date, shift, staff, assignments, policy);
        }
    }

    pub fn regenerate(&mut self, date: NaiveDate, shift_id: &str, policy: &BreakPolicy) -> Result<usize> {
        let Snapshot { staff, shifts, assignments, plans } = &mut self.data;
        let shift = shifts
            .iter()
            .find(|shift| shift.id == shift_id)
            .ok_or_else(|| ValidationError::UnknownShift(shift_id.to_string()))?;
        Ok(plans.regenerate(date, shift, staff, assignments, policy))
    }

    pub fn upsert_break(&mut self, date: NaiveDate, shift_id: &str, record: BreakRecord) -> Result<()> {
        let Snapshot { staff, plans, .. } = &mut self.data;
        plans.upsert_break(date, shift_id, record, staff)?;
        Ok(())
    }

    // === DATA MANAGEMENT ===

    /// Writes the complete data set to `path` with a timestamp.
    pub fn backup(&self, path: &Path) -> Result<()> {
        let backup = Backup {
            backed_up_at: Some(Local::now().naive_local()),
            data: self.data.clone(),
        };
        let file = File::create(path).with_context(|| format!("Failed to write {}", path.display()))?;
        serde_json::to_writer_pretty(file, &backup)?;
        Ok(())
    }

    /// Replaces the current data with a backup. Nothing changes if the
    /// backup cannot be read.
    pub fn restore(&mut self, path: &Path) -> Result<()> {
        let backup = read_json::<Backup>(path)?;
        self.data = backup.data;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.data = Snapshot::default();
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| Message::DataFileParseError(path.display().to_string()))?;
    serde_json::from_str(&content).with_context(|| Message::DataFileParseError(path.display().to_string()))
}
