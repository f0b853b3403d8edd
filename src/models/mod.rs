//! Core data models for the employee directory.
//!
//! This module contains all the domain models used throughout the service.

mod compensation;
mod employee;
mod reporting_structure;

pub use compensation::{Compensation, CompensationResponse};
pub use employee::{Employee, EmployeeRef};
pub use reporting_structure::{ReportNode, ReportingStructure};
