//! HTTP request handlers for the employee directory API.
//!
//! Each handler opens a unit of work on the store, runs one domain
//! operation, and maps the outcome to a status code.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::directory::{self, RequestContext};
use crate::error::DirectoryError;

use super::request::{CompensationRequest, EmployeeRequest};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/employee", post(create_employee_handler))
        .route(
            "/api/employee/:id",
            get(get_employee_handler)
                .put(replace_employee_handler)
                .delete(remove_employee_handler),
        )
        .route(
            "/api/employee/:id/reportingStructure",
            get(reporting_structure_handler),
        )
        .route(
            "/api/employee/:id/compensation",
            post(attach_compensation_handler).get(get_compensation_handler),
        )
        .with_state(state)
}

fn employee_location(id: &str) -> String {
    format!("/api/employee/{}", id)
}

fn error_response(ctx: &RequestContext, err: DirectoryError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    if api_error.status.is_server_error() {
        warn!(
            correlation_id = %ctx.correlation_id(),
            code = %api_error.error.code,
            error = %api_error.error.message,
            "Request failed"
        );
    } else {
        debug!(
            correlation_id = %ctx.correlation_id(),
            code = %api_error.error.code,
            "Request rejected"
        );
    }
    api_error.into_response()
}

fn rejection_response(ctx: &RequestContext, rejection: JsonRejection) -> Response {
    warn!(
        correlation_id = %ctx.correlation_id(),
        error = %rejection.body_text(),
        "Request body rejected"
    );
    ApiErrorResponse::from(rejection).into_response()
}

/// Handler for POST /api/employee.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<Option<EmployeeRequest>>, JsonRejection>,
) -> Response {
    let ctx = RequestContext::new();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&ctx, rejection),
    };
    debug!(correlation_id = %ctx.correlation_id(), "Received employee create request");

    let session = state.session();
    match directory::create_employee(&ctx, &session, request.map(Into::into)).await {
        Ok(employee) => (
            StatusCode::CREATED,
            [(header::LOCATION, employee_location(&employee.employee_id))],
            Json(employee),
        )
            .into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for GET /api/employee/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received employee get request"
    );

    let session = state.session();
    match directory::get_employee(&ctx, &session, &id).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for PUT /api/employee/:id.
///
/// Responds 404 before looking at the body when the target does not exist.
async fn replace_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Option<EmployeeRequest>>, JsonRejection>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received employee update request"
    );

    let session = state.session();
    let original = match directory::get_employee(&ctx, &session, &id).await {
        Ok(employee) => employee,
        Err(err) => return error_response(&ctx, err),
    };
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&ctx, rejection),
    };

    match directory::replace_employee(&ctx, &session, &original, request.map(Into::into)).await {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for DELETE /api/employee/:id.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received employee delete request"
    );

    let session = state.session();
    match directory::remove_employee(&ctx, &session, &id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for GET /api/employee/:id/reportingStructure.
async fn reporting_structure_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received reporting structure request"
    );

    let max_depth = state.config().service().max_report_depth;
    let session = state.session();
    match directory::reporting_structure(&ctx, &session, &id, max_depth).await {
        Ok(structure) => (StatusCode::OK, Json(structure)).into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for POST /api/employee/:id/compensation.
async fn attach_compensation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Option<CompensationRequest>>, JsonRejection>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received compensation create request"
    );

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(&ctx, rejection),
    };
    let compensation = request.map(|r| r.into_compensation(&id));

    let session = state.session();
    match directory::attach_compensation(&ctx, &session, &id, compensation).await {
        Ok(response) => (
            StatusCode::CREATED,
            [(
                header::LOCATION,
                format!("{}/compensation", employee_location(&id)),
            )],
            Json(response),
        )
            .into_response(),
        Err(err) => error_response(&ctx, err),
    }
}

/// Handler for GET /api/employee/:id/compensation.
async fn get_compensation_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let ctx = RequestContext::new();
    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %id,
        "Received compensation get request"
    );

    let session = state.session();
    match directory::get_compensation(&ctx, &session, &id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => error_response(&ctx, err),
    }
}
