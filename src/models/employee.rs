//! Employee model.

use serde::{Deserialize, Serialize};

/// Represents a care-assistance employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, e.g. "Anna Müller".
    pub name: String,
}

impl Employee {
    /// The first whitespace-separated token of the display name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// The last whitespace-separated token of the display name, when the
    /// name has more than one token.
    pub fn last_name(&self) -> Option<&str> {
        let mut parts = self.name.split_whitespace();
        parts.next()?;
        parts.last()
    }

    /// The anonymized label used in invoice exports: `"Assistent "` plus
    /// the uppercased first letter of the name, `"Assistent ?"` when the
    /// name is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use dienstplan_engine::models::Employee;
    ///
    /// let anna = Employee { id: "emp_001".to_string(), name: "Anna Müller".to_string() };
    /// assert_eq!(anna.anonymized_label(), "Assistent A");
    ///
    /// let unnamed = Employee { id: "emp_002".to_string(), name: "".to_string() };
    /// assert_eq!(unnamed.anonymized_label(), "Assistent ?");
    /// ```
    pub fn anonymized_label(&self) -> String {
        match self.name.chars().next() {
            Some(first) => format!("Assistent {}", first.to_uppercase()),
            None => "Assistent ?".to_string(),
        }
    }
}
