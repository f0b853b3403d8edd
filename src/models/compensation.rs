//! Compensation records.
//!
//! A [`Compensation`] is owned by exactly one employee; at most one exists
//! per employee at any time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Employee;

/// A salary record attached to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    /// Identifier of the owning employee.
    pub employee_id: String,
    /// Annual salary in whole currency units.
    pub salary: u32,
    /// The calendar date from which the compensation is active.
    pub effective_date: NaiveDate,
}

/// Response view pairing an employee with its compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationResponse {
    /// The owning employee.
    pub employee: Employee,
    /// Annual salary in whole currency units.
    pub salary: u32,
    /// Effective date, serialized as a plain `YYYY-MM-DD` string.
    pub effective_date: NaiveDate,
}

impl CompensationResponse {
    /// Builds the response view for an employee and its compensation.
    pub fn new(employee: Employee, compensation: &Compensation) -> Self {
        Self {
            employee,
            salary: compensation.salary,
            effective_date: compensation.effective_date,
        }
    }
}
