//! Break plan export command.
//!
//! Writes the break plan of a date to a CSV or JSON file, or prints it to
//! the console grouped by department. Plans that do not exist yet are
//! generated first, exactly as `breaks show` would.
//!
//! ## Supported Export Formats
//!
//! - **CSV**: `Staff,Department,Break 1,Break 2,Break 3`, for spreadsheets
//! - **JSON**: The same rows as structured data
//! - **Print**: A department-grouped sheet on the console (`--print`)

use super::parse_date;
use crate::{
    db::store::Store,
    libs::{
        config::Config,
        export::{export_rows, ExportFormat, Exporter, PrintSheet},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Plan date
    ///
    /// Accepts `today` (default) or a date in `YYYY-MM-DD` format.
    #[arg(short, long, default_value = "today", value_parser = parse_date)]
    date: NaiveDate,

    /// Shift id or a unique prefix of it
    ///
    /// Without a shift the breaks of every shift running on the date are
    /// exported together.
    #[arg(short, long)]
    shift: Option<String>,

    /// Output format for the exported file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    ///
    /// Defaults to `break_plan_YYYY-MM-DD.<ext>` in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the department-grouped sheet instead of writing a file
    #[arg(short, long)]
    print: bool,
}

/// Executes the export command.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let mut store = Store::new()?;
    let policy = Config::read()?.break_policy();

    let shift = match &args.shift {
        Some(key) => Some(store.find_shift(key)?.clone()),
        None => None,
    };

    let breaks = match &shift {
        Some(shift) => store
            .break_plan(args.date, &shift.id, &policy)?
            .map(|plan| plan.breaks.clone())
            .unwrap_or_default(),
        None => {
            store.ensure_plans_for(args.date, &policy);
            store.plans().merge_all_shifts(args.date)
        }
    };
    store.save()?;

    if args.print {
        if breaks.is_empty() {
            msg_bail_anyhow!(Message::NothingToExport);
        }
        let sheet = PrintSheet::new(args.date, shift.as_ref(), &breaks, store.staff());
        View::print_sheet(&sheet);
        return Ok(());
    }

    let rows = export_rows(&breaks, store.staff());
    let exporter = Exporter::new(args.format, args.output, args.date);
    exporter.export(&rows)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
