//! Employee model and related types.
//!
//! This module defines the [`Employee`] record and the [`EmployeeRef`]
//! edge used to express direct-report relationships.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A reference to another employee by identifier.
///
/// Direct reports are relations, not owned records: the referenced employee
/// lives in the repository in its own right.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    /// Identifier of the referenced employee.
    pub employee_id: String,
}

impl EmployeeRef {
    /// Creates a reference to the employee with the given identifier.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }
}

/// Represents an employee in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned identifier, immutable once created.
    pub employee_id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Job title (e.g., "Developer V").
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Employees who report immediately to this employee.
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

impl Employee {
    /// Returns the identifiers of this employee's direct reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::models::{Employee, EmployeeRef};
    ///
    /// let manager = Employee {
    ///     employee_id: "ringo".to_string(),
    ///     first_name: "Ringo".to_string(),
    ///     last_name: "Starr".to_string(),
    ///     position: "Developer V".to_string(),
    ///     department: "Engineering".to_string(),
    ///     direct_reports: vec![EmployeeRef::new("pete"), EmployeeRef::new("george")],
    /// };
    /// let ids: Vec<&str> = manager.direct_report_ids().collect();
    /// assert_eq!(ids, vec!["pete", "george"]);
    /// ```
    pub fn direct_report_ids(&self) -> impl Iterator<Item = &str> {
        self.direct_reports.iter().map(|r| r.employee_id.as_str())
    }

    /// Drops repeated direct-report references, keeping the first occurrence.
    pub fn dedup_direct_reports(&mut self) {
        let mut seen = HashSet::new();
        self.direct_reports
            .retain(|r| seen.insert(r.employee_id.clone()));
    }

    /// Returns "first last" for log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
