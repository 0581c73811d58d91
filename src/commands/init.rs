//! Break policy configuration command.
//!
//! Runs an interactive wizard that asks for the break positions, break
//! lengths, staff stagger and department gap used by the break generator,
//! seeded with the values currently in effect.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Drop the saved break policy and go back to the built-in defaults
    #[arg(short, long)]
    reset: bool,
}

/// Executes the initialization command.
///
/// Already generated break plans are not touched; the new policy applies to
/// plans generated or regenerated afterwards.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.reset {
        Config::default().save()?;
        msg_success!(Message::ConfigReset);
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
