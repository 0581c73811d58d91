//! Staff roster entries.
//!
//! A staff member belongs to exactly one department. Break records keep
//! their own copy of the department taken when the break was created, so
//! moving someone to another department later does not rewrite history.

use crate::libs::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Store departments, ordered as they appear on printed sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Sales,
    Cashier,
    Warehouse,
    Management,
}

impl Department {
    pub const ALL: [Department; 4] = [Department::Sales, Department::Cashier, Department::Warehouse, Department::Management];

    /// Typical positions offered for the department.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            Department::Sales => &["Sales Associate", "Floor Attendant", "Customer Representative"],
            Department::Cashier => &["Cashier", "Head Cashier"],
            Department::Warehouse => &["Warehouse Clerk", "Logistics Lead", "Shipping Clerk"],
            Department::Management => &["Store Manager", "Assistant Manager", "Team Lead"],
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Department::Sales => "Sales",
            Department::Cashier => "Cashier",
            Department::Warehouse => "Warehouse",
            Department::Management => "Management",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Department,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Staff {
    /// Creates a roster entry with a fresh identifier.
    pub fn new(first_name: &str, last_name: &str, department: Department) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            department,
            position: None,
        }
    }

    pub fn with_position(mut self, position: Option<String>) -> Self {
        self.position = position.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingStaffName);
        }
        Ok(())
    }
}
