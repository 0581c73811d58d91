//! Core library modules for the breakplan application.
//!
//! ## Features
//!
//! - **Scheduling Core**: Clock arithmetic, the break generator and break plans
//! - **Domain Model**: Staff roster, shift templates, weekly assignments
//! - **Infrastructure**: Configuration, data directory, messaging
//! - **Presentation**: Console tables and break plan export
//!
//! ## Usage
//!
//! ```rust
//! use breakplan::libs::generator::generate;
//! use breakplan::libs::shift::ShiftDefinition;
//! use breakplan::libs::staff::{Department, Staff};
//! use breakplan::libs::assignment::WeeklyAssignment;
//! use chrono::Weekday;
//!
//! let shift = ShiftDefinition::new("Day", "09:00".parse()?, "18:00".parse()?, &[Weekday::Mon], 3);
//! let ada = Staff::new("Ada", "Lovelace", Department::Sales);
//! let mut week = WeeklyAssignment::new(&ada.id);
//! week.set_shift(Weekday::Mon, &shift.id);
//!
//! let breaks = generate(&shift, Weekday::Mon, &[ada], &[week]);
//! assert_eq!(breaks[0].window(), "11:15-11:45");
//! # Ok::<(), breakplan::libs::error::ValidationError>(())
//! ```

pub mod assignment;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod generator;
pub mod messages;
pub mod plan;
pub mod shift;
pub mod staff;
pub mod view;
