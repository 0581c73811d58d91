pub mod assign;
pub mod breaks;
pub mod data;
pub mod export;
pub mod init;
pub mod shift;
pub mod staff;

use crate::db::store::Store;
use crate::libs::messages::Message;
use crate::libs::shift::ShiftDefinition;
use crate::libs::staff::Staff;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the break policy")]
    Init(init::InitArgs),
    #[command(about = "Manage the staff roster")]
    Staff(staff::StaffArgs),
    #[command(about = "Manage shift templates")]
    Shift(shift::ShiftArgs),
    #[command(about = "Plan which shift each staff member works on each weekday")]
    Assign(assign::AssignArgs),
    #[command(about = "Show, generate and edit break plans")]
    Breaks(breaks::BreaksArgs),
    #[command(about = "Export or print a break plan")]
    Export(export::ExportArgs),
    #[command(about = "Back up, restore or reset all data")]
    Data(data::DataArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Staff(args) => staff::cmd(args),
            Commands::Shift(args) => shift::cmd(args),
            Commands::Assign(args) => assign::cmd(args),
            Commands::Breaks(args) => breaks::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Data(args) => data::cmd(args),
        }
    }
}

/// Parses `today` or a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))
}

/// Asks for confirmation unless `yes` is set.
fn confirm(yes: bool, prompt: Message) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}

/// Resolves a shift by id prefix, or lets the user pick one.
fn select_shift(store: &Store, key: Option<&str>) -> Result<ShiftDefinition> {
    if let Some(key) = key {
        return Ok(store.find_shift(key)?.clone());
    }
    let shifts = store.shifts();
    if shifts.is_empty() {
        return Err(msg_error_anyhow!(Message::NoShifts));
    }
    let labels: Vec<String> = shifts.iter().map(ShiftDefinition::label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ShiftSelectionRequired.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(shifts[selection].clone())
}

/// Resolves a staff member by id prefix, or lets the user pick one.
fn select_staff(store: &Store, key: Option<&str>) -> Result<Staff> {
    if let Some(key) = key {
        return Ok(store.find_staff(key)?.clone());
    }
    let staff = store.staff();
    if staff.is_empty() {
        return Err(msg_error_anyhow!(Message::NoStaff));
    }
    let names: Vec<String> = staff.iter().map(|member| format!("{} ({})", member.full_name(), member.department)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::StaffSelectionRequired.to_string())
        .items(&names)
        .default(0)
        .interact()?;
    Ok(staff[selection].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2025-03-03").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(parse_date("TODAY").unwrap(), Local::now().date_naive());
    }

    #[test]
    fn rejects_other_date_formats() {
        let err = parse_date("03.03.2025").unwrap_err();
        assert!(err.to_string().contains("03.03.2025"));
    }
}
