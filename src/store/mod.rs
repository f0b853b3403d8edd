//! Persistence for the employee directory.
//!
//! The domain layer talks to storage only through [`EmployeeRepository`].
//! Writes are staged on the repository and applied together by
//! [`EmployeeRepository::commit`], which is the only fallible step.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Compensation, Employee};

pub use memory::{MemorySession, MemoryStore};

/// Port for employee storage adapters.
///
/// Reads observe committed state only. Staged writes become visible once
/// `commit` returns `Ok`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch an employee by identifier.
    async fn get_by_id(&self, id: &str) -> Option<Employee>;

    /// Fetch the resolved direct reports of an employee.
    ///
    /// Returns `None` when the employee does not exist. Committed edges always
    /// resolve; an edge that does not is logged and left out of the list.
    async fn get_direct_reports(&self, id: &str) -> Option<Vec<Employee>>;

    /// Fetch an employee together with its compensation, if any.
    async fn get_with_compensation(&self, id: &str) -> Option<(Employee, Option<Compensation>)>;

    /// Stage the insertion of a new employee.
    async fn add(&self, employee: Employee);

    /// Stage the insertion of a compensation owned by `employee`.
    async fn add_compensation(&self, employee: &Employee, compensation: Compensation);

    /// Stage an overwrite of every field of the employee with the same identifier.
    async fn update(&self, employee: Employee);

    /// Stage the removal of an employee.
    ///
    /// Its compensation and any direct-report edge pointing at it go too.
    async fn remove(&self, employee: &Employee);

    /// Apply all staged changes atomically.
    ///
    /// Fails without applying anything if a uniqueness or referential
    /// constraint is violated. Every direct report of an inserted or updated
    /// employee must exist once the whole batch is applied.
    async fn commit(&self) -> Result<(), StoreError>;
}
