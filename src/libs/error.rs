//! Validation errors raised at the editing boundary.
//!
//! The scheduling core itself never fails: every check on user input happens
//! here, before a shift, assignment or break reaches the generator or a plan.

use thiserror::Error;

/// Rejected input from roster, shift, assignment or break editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("No shift selected")]
    NoShiftSelected,

    #[error("No staff member selected")]
    NoStaffSelected,

    #[error("Shift name is required")]
    MissingShiftName,

    #[error("Staff first name is required")]
    MissingStaffName,

    #[error("Select at least one working day")]
    NoWorkDays,

    #[error("Assign a shift or a leave to at least one day")]
    EmptyWeek,

    #[error("Shift must end after it starts ({start} - {end})")]
    NonPositiveShift { start: String, end: String },

    #[error("Shift times must fall within a single day ({0})")]
    OutsideDay(String),

    #[error("Break count must be at least 1")]
    ZeroBreakCount,

    #[error("Break number must be between 1 and {max}, got {got}")]
    BreakNumberOutOfRange { got: u8, max: u8 },

    #[error("Break duration must be between {min} and {max} minutes, got {got}")]
    DurationOutOfRange { got: u32, min: u32, max: u32 },

    #[error("Staff member '{staff}' already has break {number} in this plan")]
    DuplicateBreak { staff: String, number: u8 },

    #[error("Break position must be between 0 and 100 percent, got {0}")]
    AnchorOutOfRange(u32),

    #[error("Break offset must be at most {max} minutes, got {got}")]
    OffsetOutOfRange { got: u32, max: u32 },

    #[error("Unknown staff member '{0}'")]
    UnknownStaff(String),

    #[error("Unknown shift '{0}'")]
    UnknownShift(String),

    #[error("Unknown weekday '{0}'")]
    UnknownWeekday(String),
}
