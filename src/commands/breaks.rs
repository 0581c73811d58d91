use super::{confirm, parse_date, select_shift, select_staff};
use crate::{
    db::{
        providers::preview_breaks,
        store::{lookup, Lookup, Store},
    },
    libs::{
        clock::ClockTime,
        config::Config,
        messages::Message,
        plan::{BreakEdit, BreakRecord, MAX_BREAK_MINUTES, MIN_BREAK_MINUTES},
        shift::ShiftDefinition,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct BreaksArgs {
    #[command(subcommand)]
    command: BreaksCommand,
}

/// Date and shift a break plan belongs to.
#[derive(Debug, Args)]
struct PlanKey {
    /// Plan date (YYYY-MM-DD or 'today')
    #[arg(short, long, default_value = "today", value_parser = parse_date)]
    date: NaiveDate,
    /// Shift id or a unique prefix of it; asked for when omitted
    #[arg(short, long)]
    shift: Option<String>,
}

#[derive(Debug, Subcommand)]
enum BreaksCommand {
    /// Show the break plan of a shift, or of every shift when --shift is omitted
    ///
    /// A plan that does not exist yet is generated from the weekly
    /// assignments and saved.
    Show {
        #[command(flatten)]
        key: PlanKey,
    },
    /// Show what the generator would produce, without saving anything
    Preview {
        #[command(flatten)]
        key: PlanKey,
    },
    /// Replace every break of a plan with a fresh generator run
    Regenerate {
        #[command(flatten)]
        key: PlanKey,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Add a manual break
    Add {
        #[command(flatten)]
        key: PlanKey,
        /// Staff id or a unique prefix of it
        #[arg(long)]
        staff: Option<String>,
        /// Break number (1-3), which also picks the default time
        #[arg(short, long, default_value_t = 1)]
        number: u8,
        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<ClockTime>,
        /// Length in minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Edit a break; changing start or duration moves the end
    Edit {
        /// Break id or a unique prefix of it
        id: String,
        #[command(flatten)]
        key: PlanKey,
        /// Move the break to another staff member
        #[arg(long)]
        staff: Option<String>,
        #[arg(short, long)]
        number: Option<u8>,
        #[arg(long)]
        start: Option<ClockTime>,
        /// New end time; ignored when --start or --duration is given
        #[arg(long)]
        end: Option<ClockTime>,
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Delete a break
    Delete {
        /// Break id or a unique prefix of it
        id: String,
        #[command(flatten)]
        key: PlanKey,
    },
    /// Remove the plans of a date so they are generated again on next view
    Reset {
        /// Plan date (YYYY-MM-DD or 'today')
        #[arg(short, long, default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
        /// Only reset this shift; every shift of the date otherwise
        #[arg(short, long)]
        shift: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: BreaksArgs) -> Result<()> {
    match args.command {
        BreaksCommand::Show { key } => handle_show(key),
        BreaksCommand::Preview { key } => handle_preview(key),
        BreaksCommand::Regenerate { key, yes } => handle_regenerate(key, yes),
        BreaksCommand::Add {
            key,
            staff,
            number,
            start,
            duration,
        } => handle_add(key, staff, number, start, duration),
        BreaksCommand::Edit {
            id,
            key,
            staff,
            number,
            start,
            end,
            duration,
        } => handle_edit(
            id,
            key,
            staff,
            BreakEdit {
                staff_id: None,
                break_number: number,
                start,
                end,
                duration,
            },
        ),
        BreaksCommand::Delete { id, key } => handle_delete(id, key),
        BreaksCommand::Reset { date, shift, yes } => handle_reset(date, shift, yes),
    }
}

fn handle_show(key: PlanKey) -> Result<()> {
    let mut store = Store::new()?;
    let policy = Config::read()?.break_policy();
    let date = key.date;

    let Some(shift_key) = key.shift else {
        store.ensure_plans_for(date, &policy);
        store.save()?;

        let breaks = store.plans().merge_all_shifts(date);
        if breaks.is_empty() {
            msg_info!(Message::NoBreaksForDate(format_date(date)));
            return Ok(());
        }
        msg_print!(Message::AllShiftsBreaksHeader(format_date(date)), true);
        View::breaks(&breaks, store.staff());
        return Ok(());
    };

    let shift = store.find_shift(&shift_key)?.clone();
    let breaks = match store.break_plan(date, &shift.id, &policy)? {
        Some(plan) => plan.breaks.clone(),
        None => {
            explain_empty_plan(&shift, date);
            return Ok(());
        }
    };
    store.save()?;

    msg_print!(
        Message::BreaksHeader {
            date: format_date(date),
            shift: shift.label(),
        },
        true
    );
    View::breaks(&breaks, store.staff());
    Ok(())
}

fn handle_preview(key: PlanKey) -> Result<()> {
    let store = Store::new()?;
    let policy = Config::read()?.break_policy();
    let shift = select_shift(&store, key.shift.as_deref())?;

    let breaks = preview_breaks(&store, &shift.id, key.date, &policy)?;
    if breaks.is_empty() {
        explain_empty_plan(&shift, key.date);
        return Ok(());
    }

    msg_print!(
        Message::BreaksHeader {
            date: format_date(key.date),
            shift: shift.label(),
        },
        true
    );
    View::breaks(&breaks, store.staff());
    Ok(())
}

fn handle_regenerate(key: PlanKey, yes: bool) -> Result<()> {
    let mut store = Store::new()?;
    let policy = Config::read()?.break_policy();
    let shift = select_shift(&store, key.shift.as_deref())?;

    let has_breaks = store.plans().find(key.date, &shift.id).is_some_and(|plan| !plan.breaks.is_empty());
    if has_breaks && !confirm(yes, Message::ConfirmRegenerate(shift.label()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let count = store.regenerate(key.date, &shift.id, &policy)?;
    store.save()?;

    if count == 0 {
        explain_empty_plan(&shift, key.date);
    } else {
        msg_success!(Message::BreakPlanGenerated(count));
    }
    Ok(())
}

fn handle_add(key: PlanKey, staff: Option<String>, number: u8, start: Option<ClockTime>, duration: Option<u32>) -> Result<()> {
    let mut store = Store::new()?;
    let shift = select_shift(&store, key.shift.as_deref())?;
    let staff = select_staff(&store, staff.as_deref())?;

    let mut record = BreakRecord::manual(&staff, number)?;
    let edit = if start.is_none() && duration.is_none() {
        prompt_timing(&record)?
    } else {
        BreakEdit {
            start,
            duration,
            ..Default::default()
        }
    };
    record.apply(edit);

    let window = record.window();
    store.upsert_break(key.date, &shift.id, record)?;
    store.save()?;

    msg_success!(Message::BreakSaved(window));
    Ok(())
}

fn handle_edit(id: String, key: PlanKey, staff: Option<String>, mut edit: BreakEdit) -> Result<()> {
    let mut store = Store::new()?;
    let shift = select_shift(&store, key.shift.as_deref())?;

    let Some(mut record) = find_break(&store, key.date, &shift.id, &id)? else {
        msg_info!(Message::BreakNotFound(id));
        return Ok(());
    };

    if let Some(staff) = staff {
        edit.staff_id = Some(store.find_staff(&staff)?.id.clone());
    }
    let untouched = edit == BreakEdit::default();
    if untouched {
        edit = prompt_timing(&record)?;
    }
    record.apply(edit);

    store.upsert_break(key.date, &shift.id, record.clone())?;
    store.save()?;

    // The stored record carries the final end time.
    let window = store
        .plans()
        .find_break(key.date, &shift.id, &record.id)
        .map(BreakRecord::window)
        .unwrap_or_else(|| record.window());
    msg_success!(Message::BreakSaved(window));
    Ok(())
}

fn handle_delete(id: String, key: PlanKey) -> Result<()> {
    let mut store = Store::new()?;
    let shift = select_shift(&store, key.shift.as_deref())?;

    let Some(record) = find_break(&store, key.date, &shift.id, &id)? else {
        msg_info!(Message::BreakNotFound(id));
        return Ok(());
    };

    if store.plans_mut().delete_break(key.date, &shift.id, &record.id) {
        store.save()?;
        msg_success!(Message::BreakDeleted(record.window()));
    }
    Ok(())
}

fn handle_reset(date: NaiveDate, shift: Option<String>, yes: bool) -> Result<()> {
    let mut store = Store::new()?;
    let shift_id = match shift {
        Some(key) => Some(store.find_shift(&key)?.id.clone()),
        None => None,
    };

    if !confirm(yes, Message::ConfirmResetPlans(format_date(date)))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = store.plans_mut().reset(date, shift_id.as_deref());
    store.save()?;

    msg_success!(Message::BreakPlansReset(removed));
    Ok(())
}

/// Finds a break of the `(date, shift)` plan by id or unique id prefix.
fn find_break(store: &Store, date: NaiveDate, shift_id: &str, key: &str) -> Result<Option<BreakRecord>> {
    let breaks = store.plans().find(date, shift_id).map(|plan| plan.breaks.as_slice()).unwrap_or_default();
    match lookup(breaks, key, |record| record.id.as_str()) {
        Lookup::Found(record) => Ok(Some(record.clone())),
        Lookup::Missing => Ok(None),
        Lookup::Ambiguous => Err(msg_error_anyhow!(Message::BreakIdAmbiguous(key.to_string()))),
    }
}

fn explain_empty_plan(shift: &ShiftDefinition, date: NaiveDate) {
    if shift.works_on(date.weekday()) {
        msg_info!(Message::NoStaffOnShift {
            date: format_date(date),
            shift: shift.label(),
        });
    } else {
        msg_info!(Message::ShiftNotOnDay {
            shift: shift.label(),
            weekday: date.weekday().to_string(),
        });
    }
}

fn prompt_timing(record: &BreakRecord) -> Result<BreakEdit> {
    let theme = ColorfulTheme::default();
    let range_msg = Message::BreakDurationRange.to_string();

    let start = Input::with_theme(&theme)
        .with_prompt(Message::PromptBreakStart.to_string())
        .default(record.start)
        .interact_text()?;
    let duration = Input::with_theme(&theme)
        .with_prompt(Message::PromptBreakLength.to_string())
        .default(record.duration)
        .validate_with(|value: &u32| -> Result<(), &str> {
            if (MIN_BREAK_MINUTES..=MAX_BREAK_MINUTES).contains(value) {
                Ok(())
            } else {
                Err(&range_msg)
            }
        })
        .interact_text()?;

    Ok(BreakEdit {
        start: Some(start),
        duration: Some(duration),
        ..Default::default()
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
