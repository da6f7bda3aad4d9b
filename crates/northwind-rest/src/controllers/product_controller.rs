//! Product controller.

use crate::{
    responses::{created, no_content, not_found, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use northwind_core::{NorthwindError, PageRequest};
use northwind_service::{ProductRequest, ProductResponse};
use serde::Deserialize;
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Query parameters for the product list: pagination plus optional
/// comma-separated name and category filters.
#[derive(Debug, Default, Deserialize)]
struct ProductListQuery {
    #[serde(default)]
    offset: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category_id: Option<String>,
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn split_ids(raw: &str) -> Result<Vec<i32>, NorthwindError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| NorthwindError::validation(format!("invalid category id: {s}")))
        })
        .collect()
}

/// List products: paginated, or filtered by name / category.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<Vec<ProductResponse>> {
    debug!("List products request");

    if let Some(raw) = &query.name {
        let products = state
            .product_service
            .lookup_by_name(split_names(raw))
            .await?;
        return ok(products);
    }

    if let Some(raw) = &query.category_id {
        let category_ids = split_ids(raw)?;
        let products = state
            .product_service
            .lookup_by_category(category_ids)
            .await?;
        return ok(products);
    }

    let page = PageRequest::new(
        query.offset.unwrap_or(0),
        query.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
    )?;
    let products = state.product_service.show_page(page).await?;
    ok(products)
}

/// Create a new product.
async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create product request: {}", request.product_name);

    let id = state.product_service.create(request).await?;
    Ok(created(format!("/api/products/{id}"), id))
}

/// Get a product by id.
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<ProductResponse> {
    debug!("Get product request: {}", id);

    match state.product_service.try_show(id).await? {
        Some(product) => ok(product),
        None => Err(not_found("Product", id)),
    }
}

/// Replace a product.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ProductRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update product request: {}", id);

    if state.product_service.update(id, request).await? {
        Ok(no_content())
    } else {
        Err(not_found("Product", id))
    }
}

/// Delete a product.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete product request: {}", id);

    if state.product_service.destroy(id).await? {
        Ok(no_content())
    } else {
        Err(not_found("Product", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("Chai, Chang"), vec!["Chai", "Chang"]);
        assert_eq!(split_names("Chai,,"), vec!["Chai"]);
        assert!(split_names(" , ").is_empty());
    }

    #[test]
    fn test_split_ids() {
        assert_eq!(split_ids("1, 2,3").unwrap(), vec![1, 2, 3]);
        assert!(split_ids("1,x").is_err());
    }
}
