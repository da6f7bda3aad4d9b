//! Employee controller.

use crate::{
    extractors::PaginationQuery,
    responses::{created, no_content, not_found, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use northwind_core::NorthwindError;
use northwind_service::{EmployeeRequest, EmployeeResponse};
use tracing::debug;

/// Creates the employee router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route(
            "/:id/photo",
            get(get_photo).put(upload_photo).delete(delete_photo),
        )
}

/// List employees with pagination.
async fn list_employees(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Vec<EmployeeResponse>> {
    debug!("List employees request");

    let page = pagination.into_page()?;
    let employees = state.employee_service.show_page(page).await?;
    ok(employees)
}

/// Create a new employee.
async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create employee request: {} {}", request.first_name, request.last_name);

    let id = state.employee_service.create(request).await?;
    Ok(created(format!("/api/employees/{id}"), id))
}

/// Get an employee by id.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<EmployeeResponse> {
    debug!("Get employee request: {}", id);

    match state.employee_service.try_show(id).await? {
        Some(employee) => ok(employee),
        None => Err(not_found("Employee", id)),
    }
}

/// Replace an employee.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<EmployeeRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update employee request: {}", id);

    if state.employee_service.update(id, request).await? {
        Ok(no_content())
    } else {
        Err(not_found("Employee", id))
    }
}

/// Delete an employee.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete employee request: {}", id);

    if state.employee_service.destroy(id).await? {
        Ok(no_content())
    } else {
        Err(not_found("Employee", id))
    }
}

/// Get an employee's photo as raw image bytes.
async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    debug!("Get employee photo request: {}", id);

    match state.employee_service.try_show_photo(id).await? {
        Some(bytes) => {
            Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response())
        }
        None => Err(not_found("Employee photo", id)),
    }
}

/// Upload an employee's photo from the raw request body.
async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    debug!("Upload employee photo request: {} ({} bytes)", id, body.len());

    if body.is_empty() {
        return Err(AppError(NorthwindError::validation(
            "photo body must not be empty",
        )));
    }

    if state.employee_service.update_photo(id, body.to_vec()).await? {
        Ok(no_content())
    } else {
        Err(not_found("Employee", id))
    }
}

/// Delete an employee's photo.
async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete employee photo request: {}", id);

    if state.employee_service.destroy_photo(id).await? {
        Ok(no_content())
    } else {
        Err(not_found("Employee", id))
    }
}
