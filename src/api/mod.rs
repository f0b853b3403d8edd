//! HTTP API module for the employee directory.
//!
//! This module provides the REST endpoints under `/api/employee`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CompensationRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
