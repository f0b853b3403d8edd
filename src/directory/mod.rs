//! Domain operations for the employee directory.
//!
//! Every operation takes a [`RequestContext`] for log correlation and a
//! repository to read from and stage writes on. Operations return domain
//! values or a [`DirectoryError`](crate::error::DirectoryError); mapping
//! those to transport responses is left to the caller.

mod compensation;
mod context;
mod employees;
mod reporting;

pub use compensation::{attach_compensation, get_compensation};
pub use context::RequestContext;
pub use employees::{
    create_employee, get_employee, remove_employee, replace_employee, reporting_structure,
};
pub use reporting::{calculate_reporting_structure, count_reports};
