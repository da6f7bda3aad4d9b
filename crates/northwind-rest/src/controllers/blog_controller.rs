//! Blog controller: articles, comments, and article-product links.

use crate::{
    extractors::PaginationQuery,
    responses::{created, no_content, not_found, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use northwind_core::{NorthwindError, NorthwindResult};
use northwind_service::{
    BlogArticleRequest, BlogArticleResponse, BlogArticleSummaryResponse, BlogCommentRequest,
    BlogCommentResponse, EmployeeResponse, ProductResponse,
};
use tracing::debug;

/// Creates the blog article router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles).post(create_article))
        .route(
            "/:article_id",
            get(get_article).put(update_article).delete(delete_article),
        )
        .route(
            "/:article_id/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/:article_id/comments/:comment_id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route("/:article_id/products", get(list_article_products))
        .route(
            "/:article_id/products/:product_id",
            post(add_article_product).delete(remove_article_product),
        )
}

/// Formats an author display name the way the article views show it.
fn author_display_name(author: &EmployeeResponse) -> String {
    match &author.title {
        Some(title) => format!("{} {}, {}", author.first_name, author.last_name, title),
        None => format!("{} {}", author.first_name, author.last_name),
    }
}

async fn resolve_author_name(state: &AppState, author_id: i32) -> NorthwindResult<Option<String>> {
    Ok(state
        .employee_service
        .try_show(author_id)
        .await?
        .map(|author| author_display_name(&author)))
}

/// Fails with a 404 unless the article exists.
async fn require_article(state: &AppState, article_id: i32) -> Result<(), AppError> {
    if state
        .blogging_service
        .try_show_article(article_id)
        .await?
        .is_none()
    {
        return Err(not_found("BlogArticle", article_id));
    }
    Ok(())
}

/// List articles with their authors' display names.
async fn list_articles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Vec<BlogArticleSummaryResponse>> {
    debug!("List blog articles request");

    let page = pagination.into_page()?;
    let mut articles = state.blogging_service.show_articles(page).await?;
    for article in &mut articles {
        article.author_name = resolve_author_name(&state, article.author_id).await?;
    }
    ok(articles)
}

/// Get an article by id, with body text and author display name.
async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> ApiResult<BlogArticleResponse> {
    debug!("Get blog article request: {}", article_id);

    match state.blogging_service.try_show_article(article_id).await? {
        Some(mut article) => {
            article.author_name = resolve_author_name(&state, article.author_id).await?;
            ok(article)
        }
        None => Err(not_found("BlogArticle", article_id)),
    }
}

/// Create a new article. The author must exist.
async fn create_article(
    State(state): State<AppState>,
    Json(request): Json<BlogArticleRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create blog article request: {}", request.title);

    if state
        .employee_service
        .try_show(request.author_id)
        .await?
        .is_none()
    {
        return Err(AppError(NorthwindError::validation(format!(
            "author {} does not exist",
            request.author_id
        ))));
    }

    let id = state.blogging_service.create_article(request).await?;
    Ok(created(format!("/api/articles/{id}"), id))
}

/// Replace an article's title and text.
async fn update_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Json(request): Json<BlogArticleRequest>,
) -> Result<StatusCode, AppError> {
    debug!("Update blog article request: {}", article_id);

    if state
        .blogging_service
        .update_article(article_id, request)
        .await?
    {
        Ok(no_content())
    } else {
        Err(not_found("BlogArticle", article_id))
    }
}

/// Delete an article.
async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    debug!("Delete blog article request: {}", article_id);

    if state.blogging_service.destroy_article(article_id).await? {
        Ok(no_content())
    } else {
        Err(not_found("BlogArticle", article_id))
    }
}

/// List an article's comments.
async fn list_comments(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Vec<BlogCommentResponse>> {
    debug!("List comments request for article: {}", article_id);

    require_article(&state, article_id).await?;

    let page = pagination.into_page()?;
    let comments = state.blogging_service.show_comments(article_id, page).await?;
    ok(comments)
}

/// Get a single comment scoped to an article.
async fn get_comment(
    State(state): State<AppState>,
    Path((article_id, comment_id)): Path<(i32, i32)>,
) -> ApiResult<BlogCommentResponse> {
    debug!("Get comment request: {} on article {}", comment_id, article_id);

    match state
        .blogging_service
        .try_show_comment(article_id, comment_id)
        .await?
    {
        Some(comment) => ok(comment),
        None => Err(not_found("BlogComment", comment_id)),
    }
}

/// Create a comment on an article. The article must exist.
async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Json(request): Json<BlogCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Create comment request for article: {}", article_id);

    require_article(&state, article_id).await?;

    let id = state
        .blogging_service
        .create_comment(article_id, request)
        .await?;
    Ok(created(
        format!("/api/articles/{article_id}/comments/{id}"),
        id,
    ))
}

/// Replace a comment's text.
async fn update_comment(
    State(state): State<AppState>,
    Path((article_id, comment_id)): Path<(i32, i32)>,
    Json(request): Json<BlogCommentRequest>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Update comment request: {} on article {}",
        comment_id, article_id
    );

    if state
        .blogging_service
        .update_comment(article_id, comment_id, request)
        .await?
    {
        Ok(no_content())
    } else {
        Err(not_found("BlogComment", comment_id))
    }
}

/// Delete a comment.
async fn delete_comment(
    State(state): State<AppState>,
    Path((article_id, comment_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Delete comment request: {} on article {}",
        comment_id, article_id
    );

    if state
        .blogging_service
        .destroy_comment(article_id, comment_id)
        .await?
    {
        Ok(no_content())
    } else {
        Err(not_found("BlogComment", comment_id))
    }
}

/// List the products linked to an article, resolved to full product DTOs.
async fn list_article_products(
    State(state): State<AppState>,
    Path(article_id): Path<i32>,
    Query(pagination): Query<PaginationQuery>,
) -> ApiResult<Vec<ProductResponse>> {
    debug!("List linked products request for article: {}", article_id);

    require_article(&state, article_id).await?;

    let page = pagination.into_page()?;
    let links = state
        .blogging_service
        .show_article_products(article_id, page)
        .await?;

    let mut products = Vec::with_capacity(links.len());
    for link in links {
        if let Some(product) = state.product_service.try_show(link.product_id).await? {
            products.push(product);
        }
    }
    ok(products)
}

/// Link a product to an article.
async fn add_article_product(
    State(state): State<AppState>,
    Path((article_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    debug!(
        "Link product request: article {} to product {}",
        article_id, product_id
    );

    require_article(&state, article_id).await?;

    let id = state
        .blogging_service
        .link_product(article_id, product_id)
        .await?;
    Ok(created(
        format!("/api/articles/{article_id}/products/{product_id}"),
        id,
    ))
}

/// Remove a product link from an article.
async fn remove_article_product(
    State(state): State<AppState>,
    Path((article_id, product_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    debug!(
        "Unlink product request: article {} from product {}",
        article_id, product_id
    );

    require_article(&state, article_id).await?;

    if state
        .blogging_service
        .unlink_product(article_id, product_id)
        .await?
    {
        Ok(no_content())
    } else {
        Err(not_found("BlogArticleProduct", product_id))
    }
}
