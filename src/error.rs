//! Error types for the employee directory.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`StoreError`] is raised by repository adapters when a commit violates a
//! storage constraint; [`DirectoryError`] is what every domain operation returns.

use thiserror::Error;

/// Constraint violations reported by a repository when staged changes are committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An insert used an identifier that already exists.
    #[error("Employee '{id}' already exists")]
    DuplicateKey {
        /// The conflicting identifier.
        id: String,
    },

    /// An update, removal or compensation insert referenced a missing employee.
    #[error("Employee '{id}' does not exist")]
    MissingRecord {
        /// The identifier that could not be resolved.
        id: String,
    },

    /// A second compensation was inserted for the same employee.
    #[error("Employee '{employee_id}' already has a compensation record")]
    DuplicateCompensation {
        /// The owning employee.
        employee_id: String,
    },

    /// An inserted or updated employee lists a direct report that does not exist.
    #[error("Employee '{manager_id}' lists unknown direct report '{report_id}'")]
    UnknownDirectReport {
        /// The employee carrying the edge.
        manager_id: String,
        /// The unresolvable edge target.
        report_id: String,
    },
}

/// The main error type for the employee directory.
///
/// # Example
///
/// ```
/// use employee_directory::error::DirectoryError;
///
/// let error = DirectoryError::EmployeeNotFound {
///     id: "Invalid_Id".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: Invalid_Id");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The identifier did not resolve to an employee.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// No compensation is available for the identifier.
    ///
    /// Raised both when the employee is unknown and when the employee exists
    /// without a compensation record.
    #[error("Compensation not found for employee: {employee_id}")]
    CompensationNotFound {
        /// The identifier that was looked up.
        employee_id: String,
    },

    /// A required request payload was absent.
    #[error("Missing payload for {operation}")]
    MissingPayload {
        /// The operation that required the payload.
        operation: &'static str,
    },

    /// The employee already has a compensation record attached.
    #[error("Compensation already exists for employee: {employee_id}")]
    CompensationExists {
        /// The owning employee.
        employee_id: String,
    },

    /// The reporting graph reached an employee twice while walking down from a root.
    ///
    /// Covers a genuine cycle as well as an employee listed under two managers.
    #[error("Reporting graph is not a tree: employee {employee_id} is reached more than once")]
    ReportingCycle {
        /// The employee that was reached a second time.
        employee_id: String,
    },

    /// The report tree below an employee is deeper than the configured limit.
    #[error("Reporting structure of {employee_id} exceeds the maximum depth of {max_depth}")]
    ReportingTooDeep {
        /// The root of the walk.
        employee_id: String,
        /// The configured limit.
        max_depth: usize,
    },

    /// An employee lists a direct report that does not resolve.
    #[error("Unknown direct report {report_id} listed by employee {employee_id}")]
    UnknownDirectReport {
        /// The employee carrying the edge.
        employee_id: String,
        /// The unresolvable edge target.
        report_id: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The repository rejected a commit.
    #[error("Storage error: {0}")]
    Storage(#[source] StoreError),
}

/// Commit conflicts with a domain meaning map to the matching domain error.
impl From<StoreError> for DirectoryError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::MissingRecord { id } => Self::EmployeeNotFound { id },
            StoreError::DuplicateCompensation { employee_id } => {
                Self::CompensationExists { employee_id }
            }
            StoreError::UnknownDirectReport {
                manager_id,
                report_id,
            } => Self::UnknownDirectReport {
                employee_id: manager_id,
                report_id,
            },
            error @ StoreError::DuplicateKey { .. } => Self::Storage(error),
        }
    }
}

/// A type alias for Results that return DirectoryError.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
