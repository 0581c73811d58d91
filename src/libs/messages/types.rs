/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === STAFF MESSAGES ===
    StaffAdded(String),   // name
    StaffUpdated(String), // name
    StaffDeleted(String), // name
    StaffNotFound(String),
    StaffIdAmbiguous(String),
    NoStaff,
    StaffHeader,
    ConfirmDeleteStaff(String),
    PromptFirstName,
    PromptLastName,
    PromptDepartment,
    PromptPosition,
    PromptOtherPosition,
    PromptNoPosition,

    // === SHIFT MESSAGES ===
    ShiftAdded(String),   // label
    ShiftUpdated(String), // label
    ShiftDeleted {
        name: String,
        cleared: usize,
    },
    ShiftNotFound(String),
    ShiftIdAmbiguous(String),
    NoShifts,
    ShiftsHeader,
    ConfirmDeleteShift(String),
    PromptShiftName,
    PromptShiftStart,
    PromptShiftEnd,
    PromptWorkDays,
    PromptBreakCount,

    // === ASSIGNMENT MESSAGES ===
    AssignmentSaved(String),   // staff name
    AssignmentDeleted(String), // staff name
    AssignmentNotFound(String),
    NoAssignments,
    WeeklyPlanHeader,
    ConfirmDeleteAssignment(String),
    UnknownShiftLabel,
    UnknownStaffLabel,
    DayOffLabel,

    // === BREAK MESSAGES ===
    BreaksHeader {
        date: String,
        shift: String,
    },
    AllShiftsBreaksHeader(String), // date
    NoStaffOnShift {
        date: String,
        shift: String,
    },
    ShiftNotOnDay {
        shift: String,
        weekday: String,
    },
    NoBreaksForDate(String),
    BreakPlanGenerated(usize),
    BreakSaved(String), // window
    BreakDeleted(String),
    BreakNotFound(String),
    BreakIdAmbiguous(String),
    BreakPlansReset(usize),
    ShiftSelectionRequired,
    StaffSelectionRequired,
    ConfirmRegenerate(String),
    ConfirmResetPlans(String),
    PromptBreakStart,
    PromptBreakLength,
    BreakDurationRange,
    BreakAnchorRange,
    BreakOffsetRange,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    NothingToExport,
    PrintTitle(String), // date
    PrintShiftSubtitle(String),
    PrintAllShiftsSubtitle,
    DepartmentSection(String),

    // === DATA MESSAGES ===
    BackupCompleted(String),
    RestoreCompleted(String),
    ConfirmRestore(String),
    DataReset,
    ConfirmDataReset,
    DataFileParseError(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReset,
    ConfigModuleBreaks,
    PromptBreakAnchor(u8),
    PromptBreakDuration(u8),
    PromptStaffStagger,
    PromptDepartmentGap,

    // === GENERAL MESSAGES ===
    InvalidDate(String),
    OperationCancelled,
}
