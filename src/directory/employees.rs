//! Employee lifecycle operations.
//!
//! Creation assigns a fresh identifier, replacement keeps the original
//! identifier, and lookups treat an empty identifier as not found.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, ReportingStructure};
use crate::store::EmployeeRepository;

use super::{RequestContext, calculate_reporting_structure};

/// Persists a new employee under a server-assigned identifier.
///
/// Any identifier already present on `employee` is discarded and repeated
/// direct reports are collapsed.
///
/// # Errors
///
/// - [`DirectoryError::MissingPayload`] if `employee` is `None`
/// - [`DirectoryError::UnknownDirectReport`] if a direct report does not exist
/// - [`DirectoryError::Storage`] if the generated identifier collides
pub async fn create_employee<R>(
    ctx: &RequestContext,
    repo: &R,
    employee: Option<Employee>,
) -> DirectoryResult<Employee>
where
    R: EmployeeRepository + ?Sized,
{
    let mut employee = employee.ok_or(DirectoryError::MissingPayload {
        operation: "create employee",
    })?;
    employee.employee_id = Uuid::new_v4().to_string();
    employee.dedup_direct_reports();

    repo.add(employee.clone()).await;
    repo.commit().await?;

    info!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %employee.employee_id,
        name = %employee.full_name(),
        "Employee created"
    );
    Ok(employee)
}

/// Looks up an employee by identifier.
///
/// # Errors
///
/// Returns [`DirectoryError::EmployeeNotFound`] if `id` is empty or unknown.
pub async fn get_employee<R>(ctx: &RequestContext, repo: &R, id: &str) -> DirectoryResult<Employee>
where
    R: EmployeeRepository + ?Sized,
{
    let employee = if id.is_empty() {
        None
    } else {
        repo.get_by_id(id).await
    };

    employee.ok_or_else(|| {
        debug!(
            correlation_id = %ctx.correlation_id(),
            employee_id = %id,
            "Employee not found"
        );
        DirectoryError::EmployeeNotFound { id: id.to_string() }
    })
}

/// Overwrites every field of `original` with `replacement`, keeping the original identifier.
///
/// The caller must already have resolved `original`. Compensation attached
/// to the employee is kept.
///
/// # Errors
///
/// - [`DirectoryError::MissingPayload`] if `replacement` is `None`; nothing is written
/// - [`DirectoryError::UnknownDirectReport`] if a direct report does not exist
/// - [`DirectoryError::EmployeeNotFound`] if the employee was removed before the commit
pub async fn replace_employee<R>(
    ctx: &RequestContext,
    repo: &R,
    original: &Employee,
    replacement: Option<Employee>,
) -> DirectoryResult<Employee>
where
    R: EmployeeRepository + ?Sized,
{
    let mut replacement = replacement.ok_or(DirectoryError::MissingPayload {
        operation: "replace employee",
    })?;
    replacement.employee_id = original.employee_id.clone();
    replacement.dedup_direct_reports();

    repo.update(replacement.clone()).await;
    repo.commit().await?;

    info!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %replacement.employee_id,
        "Employee replaced"
    );
    Ok(replacement)
}

/// Removes an employee along with its compensation and every edge pointing at it.
///
/// # Errors
///
/// Returns [`DirectoryError::EmployeeNotFound`] if `id` is empty or unknown,
/// including when a concurrent removal commits first.
pub async fn remove_employee<R>(ctx: &RequestContext, repo: &R, id: &str) -> DirectoryResult<()>
where
    R: EmployeeRepository + ?Sized,
{
    let employee = get_employee(ctx, repo, id).await?;

    repo.remove(&employee).await;
    repo.commit().await?;

    info!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %employee.employee_id,
        "Employee removed"
    );
    Ok(())
}

/// Resolves an employee and computes its reporting structure, at most `max_depth` levels deep.
///
/// # Errors
///
/// - [`DirectoryError::EmployeeNotFound`] if `id` is empty or unknown
/// - [`DirectoryError::ReportingCycle`] if the graph below the employee is not a tree
/// - [`DirectoryError::ReportingTooDeep`] if the tree exceeds `max_depth`
pub async fn reporting_structure<R>(
    ctx: &RequestContext,
    repo: &R,
    id: &str,
    max_depth: usize,
) -> DirectoryResult<ReportingStructure>
where
    R: EmployeeRepository + ?Sized,
{
    let employee = get_employee(ctx, repo, id).await?;
    calculate_reporting_structure(ctx, repo, employee, max_depth).await
}
