//! # breakplan - staff shift and break planning
//!
//! A command-line utility for planning who works which shift and when each
//! staff member takes their breaks.
//!
//! ## Features
//!
//! - **Staff Roster**: Staff members grouped into store departments
//! - **Shift Templates**: Named shifts with working days and times
//! - **Weekly Plans**: A shift or a leave for every staff member and weekday
//! - **Break Generation**: Three staggered breaks per person, spread so that
//!   colleagues of one department are not away at the same time
//! - **Manual Editing**: Add, move and delete breaks of a generated plan
//! - **Data Export**: CSV and JSON files plus a printable sheet
//!
//! ## Usage
//!
//! ```rust,no_run
//! use breakplan::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
