//! Compensation operations.
//!
//! An employee holds at most one compensation. Attaching a second one is
//! rejected rather than overwriting or duplicating the first.

use tracing::{debug, info};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Compensation, CompensationResponse};
use crate::store::EmployeeRepository;

use super::RequestContext;

/// Attaches a compensation to an existing employee.
///
/// The owning employee is always the one resolved from `employee_id`,
/// whatever owner `compensation` names.
///
/// # Errors
///
/// - [`DirectoryError::EmployeeNotFound`] if `employee_id` is empty or unknown
/// - [`DirectoryError::MissingPayload`] if `compensation` is `None`
/// - [`DirectoryError::CompensationExists`] if a compensation is already attached,
///   including one committed concurrently after the check
///
/// No write happens on any error path before the commit.
pub async fn attach_compensation<R>(
    ctx: &RequestContext,
    repo: &R,
    employee_id: &str,
    compensation: Option<Compensation>,
) -> DirectoryResult<CompensationResponse>
where
    R: EmployeeRepository + ?Sized,
{
    let resolved = if employee_id.is_empty() {
        None
    } else {
        repo.get_with_compensation(employee_id).await
    };
    let Some((employee, existing)) = resolved else {
        debug!(
            correlation_id = %ctx.correlation_id(),
            employee_id = %employee_id,
            "Compensation target not found"
        );
        return Err(DirectoryError::EmployeeNotFound {
            id: employee_id.to_string(),
        });
    };

    let mut compensation = compensation.ok_or(DirectoryError::MissingPayload {
        operation: "attach compensation",
    })?;
    if existing.is_some() {
        return Err(DirectoryError::CompensationExists {
            employee_id: employee.employee_id,
        });
    }
    compensation.employee_id = employee.employee_id.clone();

    repo.add_compensation(&employee, compensation.clone()).await;
    repo.commit().await?;

    info!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %employee.employee_id,
        salary = compensation.salary,
        effective_date = %compensation.effective_date,
        "Compensation attached"
    );
    Ok(CompensationResponse::new(employee, &compensation))
}

/// Fetches the compensation attached to an employee.
///
/// # Errors
///
/// Returns [`DirectoryError::CompensationNotFound`] when the employee is
/// unknown and when it exists without a compensation. The two cases are
/// indistinguishable to the caller.
pub async fn get_compensation<R>(
    ctx: &RequestContext,
    repo: &R,
    employee_id: &str,
) -> DirectoryResult<CompensationResponse>
where
    R: EmployeeRepository + ?Sized,
{
    let resolved = if employee_id.is_empty() {
        None
    } else {
        repo.get_with_compensation(employee_id).await
    };

    match resolved {
        Some((employee, Some(compensation))) => {
            Ok(CompensationResponse::new(employee, &compensation))
        }
        _ => {
            debug!(
                correlation_id = %ctx.correlation_id(),
                employee_id = %employee_id,
                "Compensation not found"
            );
            Err(DirectoryError::CompensationNotFound {
                employee_id: employee_id.to_string(),
            })
        }
    }
}
