use super::{confirm, select_staff};
use crate::{
    db::store::Store,
    libs::{
        assignment::{DaySlot, LeaveCode, WeeklyAssignment},
        error::ValidationError,
        messages::Message,
        shift::{parse_weekday, WEEK},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Weekday;
use clap::{Args, Subcommand, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Select};

/// Keyword that clears a day.
const OFF: &str = "off";

#[derive(Debug, Args)]
pub struct AssignArgs {
    #[command(subcommand)]
    command: Option<AssignCommand>,
}

#[derive(Debug, Subcommand)]
enum AssignCommand {
    /// Set the weekly plan of a staff member
    ///
    /// Each --day takes `<weekday>=<value>`, where the value is a shift id
    /// prefix, a leave code (weekly, paid, unpaid, sick) or `off`. Days not
    /// mentioned keep their current value. Without --day every weekday is
    /// asked for interactively.
    Set {
        /// Staff id or a unique prefix of it
        staff: Option<String>,
        #[arg(short, long = "day", value_parser = parse_day_entry)]
        days: Vec<(Weekday, String)>,
    },
    /// Show the weekly plan of every staff member
    List,
    /// Remove the weekly plan of a staff member
    Delete {
        /// Staff id or a unique prefix of it
        staff: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: AssignArgs) -> Result<()> {
    match args.command {
        Some(AssignCommand::Set { staff, days }) => handle_set(staff, days),
        Some(AssignCommand::List) | None => handle_list(),
        Some(AssignCommand::Delete { staff, yes }) => handle_delete(staff, yes),
    }
}

/// Splits `mon=morning` into a weekday and the raw slot value.
fn parse_day_entry(input: &str) -> Result<(Weekday, String), ValidationError> {
    let (day, value) = input.split_once('=').ok_or_else(|| ValidationError::UnknownWeekday(input.to_string()))?;
    Ok((parse_weekday(day)?, value.trim().to_string()))
}

/// Turns a raw slot value into a day slot, resolving shift id prefixes.
fn resolve_slot(store: &Store, value: &str) -> Result<DaySlot> {
    if value.is_empty() || value.eq_ignore_ascii_case(OFF) {
        return Ok(DaySlot::Empty);
    }
    if let Ok(leave) = LeaveCode::from_str(value, true) {
        return Ok(DaySlot::Leave(leave));
    }
    Ok(DaySlot::Shift(store.find_shift(value)?.id.clone()))
}

fn handle_set(staff: Option<String>, days: Vec<(Weekday, String)>) -> Result<()> {
    let mut store = Store::new()?;
    let staff = select_staff(&store, staff.as_deref())?;
    let mut week = store.assignment_for(&staff.id).cloned().unwrap_or_else(|| WeeklyAssignment::new(&staff.id));

    if days.is_empty() {
        for day in WEEK {
            let slot = prompt_slot(&store, day, week.slot(day))?;
            apply_slot(&mut week, day, slot);
        }
    } else {
        for (day, value) in &days {
            let slot = resolve_slot(&store, value)?;
            apply_slot(&mut week, *day, slot);
        }
    }

    store.save_assignment(week)?;
    store.save()?;

    msg_success!(Message::AssignmentSaved(staff.full_name()));
    Ok(())
}

fn apply_slot(week: &mut WeeklyAssignment, day: Weekday, slot: DaySlot) {
    match slot {
        DaySlot::Empty => week.clear_day(day),
        DaySlot::Shift(shift_id) => week.set_shift(day, &shift_id),
        DaySlot::Leave(leave) => week.set_leave(day, leave),
    }
}

fn prompt_slot(store: &Store, day: Weekday, current: &DaySlot) -> Result<DaySlot> {
    let mut slots = vec![DaySlot::Empty];
    slots.extend(LeaveCode::value_variants().iter().map(|leave| DaySlot::Leave(*leave)));
    slots.extend(store.shifts().iter().map(|shift| DaySlot::Shift(shift.id.clone())));

    let labels: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            DaySlot::Empty => Message::DayOffLabel.to_string(),
            DaySlot::Leave(leave) => leave.to_string(),
            DaySlot::Shift(shift_id) => store
                .shifts()
                .iter()
                .find(|shift| &shift.id == shift_id)
                .map(|shift| shift.label())
                .unwrap_or_default(),
        })
        .collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(day.to_string())
        .items(&labels)
        .default(slots.iter().position(|slot| slot == current).unwrap_or(0))
        .interact()?;
    Ok(slots.swap_remove(selection))
}

fn handle_list() -> Result<()> {
    let store = Store::new()?;

    if store.assignments().is_empty() {
        msg_info!(Message::NoAssignments);
        return Ok(());
    }

    msg_print!(Message::WeeklyPlanHeader, true);
    View::weekly_plan(store.staff(), store.assignments(), store.shifts());
    Ok(())
}

fn handle_delete(staff: Option<String>, yes: bool) -> Result<()> {
    let mut store = Store::new()?;
    let staff = select_staff(&store, staff.as_deref())?;
    let name = staff.full_name();

    if store.assignment_for(&staff.id).is_none() {
        msg_info!(Message::AssignmentNotFound(name));
        return Ok(());
    }
    if !confirm(yes, Message::ConfirmDeleteAssignment(name.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.remove_assignment(&staff.id);
    store.save()?;

    msg_success!(Message::AssignmentDeleted(name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_entry_splits_on_equals() {
        assert_eq!(parse_day_entry("mon=abc").unwrap(), (Weekday::Mon, "abc".to_string()));
        assert_eq!(parse_day_entry("0= sick").unwrap(), (Weekday::Sun, "sick".to_string()));
        assert!(parse_day_entry("monday").is_err());
        assert!(parse_day_entry("someday=abc").is_err());
    }
}
