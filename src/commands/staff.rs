use super::{confirm, select_staff};
use crate::{
    db::store::Store,
    libs::{
        messages::Message,
        staff::{Department, Staff},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    command: Option<StaffCommand>,
}

#[derive(Debug, Subcommand)]
enum StaffCommand {
    /// Add a staff member; missing fields are asked for
    Add {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(short, long, value_enum)]
        department: Option<Department>,
        #[arg(short, long)]
        position: Option<String>,
    },
    /// List the roster
    List,
    /// Edit a staff member; flags given skip their prompt
    Edit {
        /// Staff id or a unique prefix of it
        id: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(short, long, value_enum)]
        department: Option<Department>,
        #[arg(short, long)]
        position: Option<String>,
    },
    /// Remove a staff member and their weekly plan
    Delete {
        /// Staff id or a unique prefix of it
        id: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: StaffArgs) -> Result<()> {
    match args.command {
        Some(StaffCommand::Add {
            first_name,
            last_name,
            department,
            position,
        }) => handle_add(first_name, last_name, department, position),
        Some(StaffCommand::List) | None => handle_list(),
        Some(StaffCommand::Edit {
            id,
            first_name,
            last_name,
            department,
            position,
        }) => handle_edit(id, first_name, last_name, department, position),
        Some(StaffCommand::Delete { id, yes }) => handle_delete(id, yes),
    }
}

fn handle_add(first_name: Option<String>, last_name: Option<String>, department: Option<Department>, position: Option<String>) -> Result<()> {
    let mut store = Store::new()?;
    let theme = ColorfulTheme::default();

    let first_name = match first_name {
        Some(name) => name,
        None => Input::with_theme(&theme).with_prompt(Message::PromptFirstName.to_string()).interact_text()?,
    };
    let last_name = match last_name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptLastName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    let department = match department {
        Some(department) => department,
        None => prompt_department(Department::Sales)?,
    };
    let position = match position {
        Some(position) => Some(position),
        None => prompt_position(department, None)?,
    };

    let staff = Staff::new(&first_name, &last_name, department).with_position(position);
    let name = store.add_staff(staff)?.full_name();
    store.save()?;

    msg_success!(Message::StaffAdded(name));
    Ok(())
}

fn handle_list() -> Result<()> {
    let store = Store::new()?;

    if store.staff().is_empty() {
        msg_info!(Message::NoStaff);
        return Ok(());
    }

    msg_print!(Message::StaffHeader, true);
    View::staff(store.staff());
    Ok(())
}

fn handle_edit(
    id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    department: Option<Department>,
    position: Option<String>,
) -> Result<()> {
    let mut store = Store::new()?;
    let mut staff = select_staff(&store, id.as_deref())?;
    let interactive = first_name.is_none() && last_name.is_none() && department.is_none() && position.is_none();
    let theme = ColorfulTheme::default();

    if interactive {
        staff.first_name = Input::with_theme(&theme)
            .with_prompt(Message::PromptFirstName.to_string())
            .default(staff.first_name.clone())
            .interact_text()?;
        staff.last_name = Input::with_theme(&theme)
            .with_prompt(Message::PromptLastName.to_string())
            .default(staff.last_name.clone())
            .allow_empty(true)
            .interact_text()?;
        staff.department = prompt_department(staff.department)?;
        staff.position = prompt_position(staff.department, staff.position.as_deref())?;
    } else {
        if let Some(first_name) = first_name {
            staff.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = last_name {
            staff.last_name = last_name.trim().to_string();
        }
        if let Some(department) = department {
            staff.department = department;
        }
        if position.is_some() {
            staff = staff.with_position(position);
        }
    }

    let name = staff.full_name();
    store.update_staff(staff)?;
    store.save()?;

    msg_success!(Message::StaffUpdated(name));
    Ok(())
}

fn handle_delete(id: Option<String>, yes: bool) -> Result<()> {
    let mut store = Store::new()?;
    let staff = select_staff(&store, id.as_deref())?;
    let name = staff.full_name();

    if !confirm(yes, Message::ConfirmDeleteStaff(name.clone()))? {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    store.remove_staff(&staff.id);
    store.remove_assignment(&staff.id);
    store.save()?;

    msg_success!(Message::StaffDeleted(name));
    Ok(())
}

fn prompt_department(current: Department) -> Result<Department> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDepartment.to_string())
        .items(&Department::ALL)
        .default(Department::ALL.iter().position(|department| *department == current).unwrap_or(0))
        .interact()?;
    Ok(Department::ALL[selection])
}

/// Offers the department's usual positions plus a free-text option.
fn prompt_position(department: Department, current: Option<&str>) -> Result<Option<String>> {
    let theme = ColorfulTheme::default();
    let mut items: Vec<String> = department.positions().iter().map(|position| position.to_string()).collect();
    items.push(Message::PromptOtherPosition.to_string());
    items.push(Message::PromptNoPosition.to_string());

    let default = current.and_then(|current| items.iter().position(|item| item == current)).unwrap_or(0);
    let selection = Select::with_theme(&theme)
        .with_prompt(Message::PromptPosition.to_string())
        .items(&items)
        .default(default)
        .interact()?;

    let other = department.positions().len();
    let position = match selection {
        index if index < other => Some(items[index].clone()),
        index if index == other => Some(
            Input::<String>::with_theme(&theme)
                .with_prompt(Message::PromptPosition.to_string())
                .with_initial_text(current.unwrap_or_default())
                .interact_text()?,
        ),
        _ => None,
    };
    Ok(position.filter(|position| !position.trim().is_empty()))
}
