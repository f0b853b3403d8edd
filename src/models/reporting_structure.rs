//! Reporting structure views.
//!
//! These are derived on every request and never persisted.

use serde::{Deserialize, Serialize};

use super::Employee;

/// An employee with its direct reports resolved into full records, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportNode {
    /// Identifier of the employee.
    pub employee_id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Resolved direct reports.
    #[serde(default)]
    pub direct_reports: Vec<ReportNode>,
}

impl ReportNode {
    /// Builds a node for `employee` with the given resolved reports.
    pub fn new(employee: Employee, direct_reports: Vec<ReportNode>) -> Self {
        Self {
            employee_id: employee.employee_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            position: employee.position,
            department: employee.department,
            direct_reports,
        }
    }

    #[cfg(test)]
    pub(crate) fn direct_report(&self, employee_id: &str) -> Option<&ReportNode> {
        self.direct_reports
            .iter()
            .find(|r| r.employee_id == employee_id)
    }
}

/// An employee paired with the number of people reporting to it, directly or indirectly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructure {
    /// The root employee and its resolved report tree.
    pub employee: ReportNode,
    /// Size of the subtree below the root, excluding the root.
    pub total_report_count: usize,
}
