use super::{confirm, select_shift};
use crate::{
    db::store::Store,
    libs::{
        clock::ClockTime,
        messages::Message,
        shift::{parse_weekday, ShiftDefinition, DEFAULT_BREAK_COUNT, DEFAULT_END, DEFAULT_START, WEEK},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Weekday;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};

#[derive(Debug, Args)]
pub struct ShiftArgs {
    #[command(subcommand)]
    command: Option<ShiftCommand>,
}

#[derive(Debug, Subcommand)]
enum ShiftCommand {
    /// Define a new shift
    Add {
        /// Shift name, e.g. "Morning"
        #[arg(short, long)]
        name: Option<String>,
        /// Start time (HH:MM)
        #[arg(short, long)]
        start: Option<ClockTime>,
        /// End time (HH:MM), later than the start on the same day
        #[arg(short, long)]
        end: Option<ClockTime>,
        /// Working days as names or Sunday-based indices, e.g. mon,tue,5
        #[arg(short, long, value_parser = parse_weekday, value_delimiter = ',')]
        days: Vec<Weekday>,
        /// Number of breaks per staff member
        #[arg(short, long, default_value_t = DEFAULT_BREAK_COUNT)]
        breaks: u8,
    },
    /// List all shifts
    List,
    /// Edit a shift; flags given skip their prompt
    Edit {
        /// Shift id or a unique prefix of it
        id: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        start: Option<ClockTime>,
        #[arg(short, long)]
        end: Option<ClockTime>,
        #[arg(short, long, value_parser = parse_weekday, value_delimiter = ',')]
        days: Vec<Weekday>,
        #[arg(short, long)]
        breaks: Option<u8>,
    },
    /// Delete a shift and clear it from every weekly plan
    Delete {
        /// Shift id or a unique prefix of it
        id: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ShiftArgs) -> Result<()> {
    match args.command {
        Some(ShiftCommand::Add {
            name,
            start,
            end,
            days,
            breaks,
        }) => handle_add(name, start, end, days, breaks),
        Some(ShiftCommand::List) | None => handle_list(),
        Some(ShiftCommand::Edit {
            id,
            name,
            start,
            end,
            days,
            breaks,
        }) => handle_edit(id, name, start, end, days, breaks),
        Some(ShiftCommand::Delete { id, yes }) => handle_delete(id, yes),
    }
}

fn handle_add(name: Option<String>, start: Option<ClockTime>, end: Option<ClockTime>, days: Vec<Weekday>, breaks: u8) -> Result<()> {
    let mut store = Store::new()?;
    let theme = ColorfulTheme::default();

    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&theme).with_prompt(Message::PromptShiftName.to_string()).interact_text()?,
    };
    let start = match start {
        Some(start) => start,
        None => prompt_time(Message::PromptShiftStart, DEFAULT_START.parse()?)?,
    };
    let end = match end {
        Some(end) => end,
        None => prompt_time(Message::PromptShiftEnd, DEFAULT_END.parse()?)?,
    };
    let days = if days.is_empty() { prompt_days(&WEEK[..5])? } else { days };

    let shift = ShiftDefinition::new(&name, start, end, &days, breaks);
    let label = store.add_shift(shift)?.label();
    store.save()?;

    msg_success!(Message::ShiftAdded(label));
    Ok(())
}

fn handle_list() -> Result<()> {
    let store = Store::new()?;

    if store.shifts().is_empty() {
        msg_info!(Message::NoShifts);
        return Ok(());
    }

    msg_print!(Message::ShiftsHeader, true);
    View::shifts(store.shifts());
    Ok(())
}

fn handle_edit(
    id: Option<String>,
    name: Option<String>,
    start: Option<ClockTime>,
    end: Option<ClockTime>,
    days: Vec<Weekday>,
    breaks: Option<u8>,
) -> Result<()> {
    let mut store = Store::new()?;
    let mut shift = select_shift(&store, id.as_deref())?;
    let interactive = name.is_none() && start.is_none() && end.is_none() && days.is_empty() && breaks.is_none();

    if interactive {
        let theme = ColorfulTheme::default();
        shift.name = Input::with_theme(&theme)
            .with_prompt(Message::PromptShiftName.to_string())
            .default(shift.name.clone())
            .interact_text()?;
        shift.start = prompt_time(Message::PromptShiftStart, shift.start)?;
        shift.end = prompt_time(Message::PromptShiftEnd, shift.end)?;
        let days = prompt_days(&shift.work_days)?;
        shift.set_work_days(&days);
        shift.break_count = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakCount.to_string())
            .default(shift.break_count)
            .interact_text()?;
    } else {
        if let Some(name) = name {
            shift.name = name.trim().to_string();
        }
        if let Some(start) = start {
            shift.start = start;
        }
        if let Some(end) = end {
            shift.end = end;
        }
        if !days.is_empty() {
            shift.set_work_days(&days);
        }
        if let Some(breaks) = breaks {
            shift.break_count = breaks;
        }
    }

    let label = shift.label();
    store.update_shift(shift)?;
    store.save()?;

    msg_success!(Message::ShiftUpdated(label));
    Ok(())
}

fn handle_delete(id: Option<String>, yes: bool) -> Result<()> {
    let mut store = Store::new()?;
    let shift = select_shift(&store, id.as_deref())?;

    if !confirm(yes, Message::ConfirmDeleteShift(shift.name.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    if let Some((shift, cleared)) = store.remove_shift(&shift.id) {
        store.save()?;
        msg_success!(Message::ShiftDeleted { name: shift.name, cleared });
    }
    Ok(())
}

fn prompt_time(prompt: Message, default: ClockTime) -> Result<ClockTime> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .interact_text()?)
}

fn prompt_days(selected: &[Weekday]) -> Result<Vec<Weekday>> {
    let items: Vec<String> = WEEK.iter().map(|day| day.to_string()).collect();
    let defaults: Vec<bool> = WEEK.iter().map(|day| selected.contains(day)).collect();
    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWorkDays.to_string())
        .items(&items)
        .defaults(&defaults)
        .interact()?;
    Ok(chosen.into_iter().map(|index| WEEK[index]).collect())
}
