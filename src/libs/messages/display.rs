//! Display implementation for breakplan messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent across commands:
//! - **Sentence case** with no trailing period for one-line notices
//! - **Specific details**: names, dates and paths are always interpolated
//! - **Questions** end with `?` and are used as confirmation prompts

use super::types::Message;
use crate::libs::clock::MINUTES_PER_DAY;
use crate::libs::plan::{MAX_BREAK_MINUTES, MIN_BREAK_MINUTES};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === STAFF MESSAGES ===
            Message::StaffAdded(name) => format!("Staff member '{}' added", name),
            Message::StaffUpdated(name) => format!("Staff member '{}' updated", name),
            Message::StaffDeleted(name) => format!("Staff member '{}' deleted", name),
            Message::StaffNotFound(id) => format!("No staff member matches '{}'", id),
            Message::StaffIdAmbiguous(id) => format!("'{}' matches more than one staff member, use a longer id", id),
            Message::NoStaff => "No staff members yet. Add one with `breakplan staff add`".to_string(),
            Message::StaffHeader => "Staff roster".to_string(),
            Message::ConfirmDeleteStaff(name) => format!("Delete staff member '{}'?", name),
            Message::PromptFirstName => "First name".to_string(),
            Message::PromptLastName => "Last name".to_string(),
            Message::PromptDepartment => "Department".to_string(),
            Message::PromptPosition => "Position".to_string(),
            Message::PromptOtherPosition => "Other...".to_string(),
            Message::PromptNoPosition => "None".to_string(),

            // === SHIFT MESSAGES ===
            Message::ShiftAdded(label) => format!("Shift {} added", label),
            Message::ShiftUpdated(label) => format!("Shift {} updated", label),
            Message::ShiftDeleted { name, cleared } => {
                format!("Shift '{}' deleted, removed from {} weekly assignment(s)", name, cleared)
            }
            Message::ShiftNotFound(id) => format!("No shift matches '{}'", id),
            Message::ShiftIdAmbiguous(id) => format!("'{}' matches more than one shift, use a longer id", id),
            Message::NoShifts => "No shifts defined yet. Add one with `breakplan shift add`".to_string(),
            Message::ShiftsHeader => "Shifts".to_string(),
            Message::ConfirmDeleteShift(name) => format!("Delete shift '{}' and clear it from all weekly assignments?", name),
            Message::PromptShiftName => "Shift name".to_string(),
            Message::PromptShiftStart => "Start time (HH:MM)".to_string(),
            Message::PromptShiftEnd => "End time (HH:MM)".to_string(),
            Message::PromptWorkDays => "Working days".to_string(),
            Message::PromptBreakCount => "Breaks per staff member".to_string(),

            // === ASSIGNMENT MESSAGES ===
            Message::AssignmentSaved(name) => format!("Weekly plan saved for '{}'", name),
            Message::AssignmentDeleted(name) => format!("Weekly plan deleted for '{}'", name),
            Message::AssignmentNotFound(name) => format!("'{}' has no weekly plan", name),
            Message::NoAssignments => "No weekly plans yet. Create one with `breakplan assign set`".to_string(),
            Message::WeeklyPlanHeader => "Weekly shift plan".to_string(),
            Message::ConfirmDeleteAssignment(name) => format!("Delete all weekly assignments of '{}'?", name),
            Message::UnknownShiftLabel => "Unknown shift".to_string(),
            Message::UnknownStaffLabel => "Unknown staff member".to_string(),
            Message::DayOffLabel => "-".to_string(),

            // === BREAK MESSAGES ===
            Message::BreaksHeader { date, shift } => format!("Breaks for {} on {}", shift, date),
            Message::AllShiftsBreaksHeader(date) => format!("Breaks for all shifts on {}", date),
            Message::NoStaffOnShift { date, shift } => format!("Nobody is assigned to {} on {}", shift, date),
            Message::ShiftNotOnDay { shift, weekday } => format!("{} does not run on {}", shift, weekday),
            Message::NoBreaksForDate(date) => format!("No break plans for {}", date),
            Message::BreakPlanGenerated(count) => format!("Break plan generated with {} break(s)", count),
            Message::BreakSaved(window) => format!("Break {} saved", window),
            Message::BreakDeleted(id) => format!("Break '{}' deleted", id),
            Message::BreakNotFound(id) => format!("No break matches '{}' in this plan", id),
            Message::BreakIdAmbiguous(id) => format!("'{}' matches more than one break, use a longer id", id),
            Message::BreakPlansReset(count) => format!("{} break plan(s) removed", count),
            Message::ShiftSelectionRequired => "Select a shift".to_string(),
            Message::StaffSelectionRequired => "Select a staff member".to_string(),
            Message::ConfirmRegenerate(shift) => format!("Replace all breaks of {} with a new plan?", shift),
            Message::ConfirmResetPlans(date) => format!("Remove break plans for {}?", date),
            Message::PromptBreakStart => "Break start (HH:MM)".to_string(),
            Message::PromptBreakLength => "Break length (minutes)".to_string(),
            Message::BreakAnchorRange => "Break position must be between 0 and 100 percent".to_string(),
            Message::BreakOffsetRange => format!("Offset must be at most {} minutes", MINUTES_PER_DAY),
            Message::BreakDurationRange => format!("Break length must be between {} and {} minutes", MIN_BREAK_MINUTES, MAX_BREAK_MINUTES),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Break plan exported to {}", path),
            Message::NothingToExport => "No break plan to export".to_string(),
            Message::PrintTitle(date) => format!("Break Plan - {}", date),
            Message::PrintShiftSubtitle(label) => format!("Shift: {}", label),
            Message::PrintAllShiftsSubtitle => "All shifts".to_string(),
            Message::DepartmentSection(department) => format!("{} department", department),

            // === DATA MESSAGES ===
            Message::BackupCompleted(path) => format!("Backup written to {}", path),
            Message::RestoreCompleted(path) => format!("Data restored from {}", path),
            Message::ConfirmRestore(path) => format!("Replace all current data with the backup in {}?", path),
            Message::DataReset => "All staff, shifts, assignments and break plans were removed".to_string(),
            Message::ConfirmDataReset => "Remove ALL data? This cannot be undone".to_string(),
            Message::DataFileParseError(path) => format!("Failed to read data file {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigReset => "Break policy reset to defaults".to_string(),
            Message::ConfigModuleBreaks => "Break policy".to_string(),
            Message::PromptBreakAnchor(number) => format!("Break {} position (% of shift)", number),
            Message::PromptBreakDuration(number) => format!("Break {} length (minutes)", number),
            Message::PromptStaffStagger => "Stagger between staff members (minutes)".to_string(),
            Message::PromptDepartmentGap => "Extra gap between departments (minutes)".to_string(),

            // === GENERAL MESSAGES ===
            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", input),
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
