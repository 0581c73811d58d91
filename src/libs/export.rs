//! Break plan export for sharing and printing.
//!
//! Break records are first projected into one [`ExportRow`] per staff
//! member, with the windows of breaks 1 to 3 side by side. The rows are then
//! written to a file by the [`Exporter`] or arranged into a
//! department-grouped [`PrintSheet`] for the console.
//!
//! ## Features
//!
//! - **Export Formats**: CSV for spreadsheets, JSON for other tools
//! - **Blank Cells**: A missing break renders as an empty cell, never an error
//! - **File Naming**: `break_plan_YYYY-MM-DD.<ext>` unless a path is given
//!
//! ## Usage
//!
//! ```rust,no_run
//! use breakplan::libs::export::{export_rows, Exporter, ExportFormat};
//! # fn run(breaks: &[breakplan::libs::plan::BreakRecord], roster: &[breakplan::libs::staff::Staff]) -> anyhow::Result<()> {
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let rows = export_rows(breaks, roster);
//! Exporter::new(ExportFormat::Csv, None, date).export(&rows)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::messages::Message;
use crate::libs::plan::BreakRecord;
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::{Department, Staff};
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 5] = ["Staff", "Department", "Break 1", "Break 2", "Break 3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, one staff member per line.
    Csv,
    /// Pretty-printed JSON array of rows.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One staff member's breaks side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub staff_id: String,
    pub staff: String,
    pub department: Department,
    /// `HH:MM-HH:MM` windows for breaks 1, 2 and 3; empty when missing.
    pub breaks: [String; 3],
}

impl ExportRow {
    fn record(&self) -> [String; 5] {
        [
            self.staff.clone(),
            self.department.to_string(),
            self.breaks[0].clone(),
            self.breaks[1].clone(),
            self.breaks[2].clone(),
        ]
    }
}

/// Projects breaks into one row per staff member, in first-seen order.
///
/// Breaks of staff who are no longer on the roster are skipped.
pub fn export_rows(breaks: &[BreakRecord], roster: &[Staff]) -> Vec<ExportRow> {
    let mut staff_order: Vec<&str> = Vec::new();
    for record in breaks {
        if !staff_order.contains(&record.staff_id.as_str()) {
            staff_order.push(&record.staff_id);
        }
    }

    staff_order
        .into_iter()
        .filter_map(|staff_id| {
            let staff = roster.iter().find(|staff| staff.id == staff_id)?;
            Some(row_for(staff, breaks))
        })
        .collect()
}

fn row_for(staff: &Staff, breaks: &[BreakRecord]) -> ExportRow {
    let window = |number: u8| {
        breaks
            .iter()
            .find(|record| record.staff_id == staff.id && record.break_number == number)
            .map(BreakRecord::window)
            .unwrap_or_default()
    };

    ExportRow {
        staff_id: staff.id.clone(),
        staff: staff.full_name(),
        department: staff.department,
        breaks: [window(1), window(2), window(3)],
    }
}

/// Printable break plan, grouped by department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSheet {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PrintSection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSection {
    pub department: Department,
    pub rows: Vec<ExportRow>,
}

impl PrintSheet {
    /// Builds the sheet for `date`. Without a shift the sheet covers all
    /// shifts of the day.
    ///
    /// Sections follow department order and are taken from the departments
    /// stored on the breaks; each lists the roster members currently in that
    /// department who have at least one break.
    pub fn new(date: NaiveDate, shift: Option<&ShiftDefinition>, breaks: &[BreakRecord], roster: &[Staff]) -> Self {
        let mut departments: Vec<Department> = breaks.iter().map(|record| record.department).collect();
        departments.sort();
        departments.dedup();

        let sections = departments
            .into_iter()
            .map(|department| PrintSection {
                department,
                rows: roster
                    .iter()
                    .filter(|staff| staff.department == department)
                    .filter(|staff| breaks.iter().any(|record| record.staff_id == staff.id))
                    .map(|staff| row_for(staff, breaks))
                    .collect(),
            })
            .filter(|section| !section.rows.is_empty())
            .collect();

        Self {
            title: Message::PrintTitle(date.format("%d.%m.%Y").to_string()).to_string(),
            subtitle: match shift {
                Some(shift) => Message::PrintShiftSubtitle(shift.label()).to_string(),
                None => Message::PrintAllShiftsSubtitle.to_string(),
            },
            sections,
        }
    }
}

/// Writes export rows to a file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without a path the file is named after the date.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, date: NaiveDate) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("break_plan_{}.{}", date.format("%Y-%m-%d"), format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the rows. Fails when there is nothing to export.
    pub fn export(&self, rows: &[ExportRow]) -> Result<()> {
        if rows.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }

        match self.format {
            ExportFormat::Csv => self.write_csv(rows)?,
            ExportFormat::Json => self.write_json(rows)?,
        }

        tracing::debug!(path = %self.output_path.display(), rows = rows.len(), "exported break plan");
        Ok(())
    }

    fn write_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(CSV_HEADER)?;
        for row in rows {
            wtr.write_record(row.record())?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json(&self, rows: &[ExportRow]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(file, rows)?;
        Ok(())
    }
}
