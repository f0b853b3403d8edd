//! Request types for the employee directory API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Compensation, Employee, EmployeeRef};

/// Request body for creating or replacing an employee.
///
/// Any `employeeId` supplied by the client is accepted but never used: the
/// server assigns identifiers on create and keeps the existing one on replace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Ignored client-supplied identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Employees who report immediately to this employee.
    #[serde(default)]
    pub direct_reports: Vec<EmployeeRef>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            employee_id: req.employee_id.unwrap_or_default(),
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            department: req.department,
            direct_reports: req.direct_reports,
        }
    }
}

/// Request body for attaching a compensation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRequest {
    /// Annual salary in whole currency units.
    pub salary: u32,
    /// The date from which the compensation is active (`YYYY-MM-DD`).
    pub effective_date: NaiveDate,
}

impl CompensationRequest {
    /// Converts the request into a compensation owned by `employee_id`.
    pub fn into_compensation(self, employee_id: &str) -> Compensation {
        Compensation {
            employee_id: employee_id.to_string(),
            salary: self.salary,
            effective_date: self.effective_date,
        }
    }
}
