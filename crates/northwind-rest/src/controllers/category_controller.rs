//! Product category controller.

use crate::{
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
use northwind_core::{NorthwindError, PageRequest};
use northwind_service::{CategoryRequest, CategoryResponse};
use serde::Deserialize;
use tracing::debug;

/// Creates the category router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route(
            "/:id/picture",
            get(get_picture).put(upload_picture).delete(delete_picture),
        )
}

/// Query parameters for the category list: pagination plus an optional
/// comma-separated name filter.
#[derive(Debug, Default, Deserialize)]
struct CategoryListQuery {
    #[serde(default)]
    offset: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    name: Option<String>,
}

/// List categories: paginated, or filtered by name.
async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> ApiResult<Vec<CategoryResponse>> {
    debug!("List categories request");

    if let Some(raw) = &query.name {
        let names: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let categories = state.category_service.lookup_by_name(names).await?;
        return ok(categories);
    }

    let page = PageRequest::new(
        query.offset.unwrap_or(0),
        query.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
    )?;
    let categories = state.category_service.show_page(page).await?;
    ok(categories)
}

/// Create a new category.
async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create category request: {}", request.category_name);

    let id = state.category_service.create(request).await?;
    Ok(created(format!("/api/categories/{id}"), id))
}

/// Get a category by id.
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<CategoryResponse> {
    debug!("Get category request: {}", id);

    match state.category_service.try_show(id).await? {
        Some(category) => ok(category),
        None => Err(not_found("Category", id)),
    }
}

/// Replace a category.
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CategoryRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update category request: {}", id);

    if state.category_service.update(id, request).await? {
        Ok(no_content())
    } else {
        Err(not_found("Category", id))
    }
}

/// Delete a category.
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete category request: {}", id);

    if state.category_service.destroy(id).await? {
        Ok(no_content())
    } else {
        Err(not_found("Category", id))
    }
}

/// Get a category's picture as raw image bytes.
async fn get_picture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    debug!("Get category picture request: {}", id);

    match state.category_service.try_show_picture(id).await? {
        Some(bytes) => Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes).into_response()),
        None => Err(not_found("Category picture", id)),
    }
}

/// Upload a category's picture from the raw request body.
async fn upload_picture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    debug!(
        "Upload category picture request: {} ({} bytes)",
        id,
        body.len()
    );

    if body.is_empty() {
        return Err(AppError(NorthwindError::validation(
            "picture body must not be empty",
        )));
    }

    if state
        .category_service
        .update_picture(id, body.to_vec())
        .await?
    {
        Ok(no_content())
    } else {
        Err(not_found("Category", id))
    }
}

/// Delete a category's picture.
async fn delete_picture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete category picture request: {}", id);

    if state.category_service.destroy_picture(id).await? {
        Ok(no_content())
    } else {
        Err(not_found("Category", id))
    }
}
