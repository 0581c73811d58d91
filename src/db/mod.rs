//! Persistence layer for breakplan.
//!
//! The roster, shift templates, weekly assignments and break plans are kept
//! in a single JSON data file in the platform data directory (see
//! [`crate::libs::data_storage`]). The scheduling core never reads the file
//! itself: commands open a [`store::Store`], hand its slices to the
//! generator and plan operations, and save the result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use breakplan::db::store::Store;
//! use breakplan::libs::staff::{Department, Staff};
//!
//! let mut store = Store::new()?;
//! store.add_staff(Staff::new("Ada", "Lovelace", Department::Sales))?;
//! store.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Read-only data access traits the generator's callers depend on.
pub mod providers;
/// JSON data file with lookup, editing, backup and restore operations.
pub mod store;
