use super::confirm;
use crate::{db::store::Store, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DataArgs {
    #[command(subcommand)]
    command: DataCommand,
}

#[derive(Debug, Subcommand)]
enum DataCommand {
    /// Write staff, shifts, weekly plans and break plans to a backup file
    Backup {
        /// Backup file; defaults to `breakplan_backup_YYYY-MM-DD.json`
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with the contents of a backup file
    Restore {
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove all data
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: DataArgs) -> Result<()> {
    match args.command {
        DataCommand::Backup { output } => {
            let store = Store::new()?;
            let path = output.unwrap_or_else(|| PathBuf::from(format!("breakplan_backup_{}.json", Local::now().format("%Y-%m-%d"))));
            store.backup(&path)?;
            msg_success!(Message::BackupCompleted(path.display().to_string()));
        }
        DataCommand::Restore { file, yes } => {
            let mut store = Store::new()?;
            if !confirm(yes, Message::ConfirmRestore(file.display().to_string()))? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            store.restore(&file)?;
            store.save()?;
            msg_success!(Message::RestoreCompleted(file.display().to_string()));
        }
        DataCommand::Reset { yes } => {
            let mut store = Store::new()?;
            if !confirm(yes, Message::ConfirmDataReset)? {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
            store.reset();
            store.save()?;
            msg_success!(Message::DataReset);
        }
    }
    Ok(())
}
