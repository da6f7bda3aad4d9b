//! Blogging DAO traits: articles, comments, and article-product links.

use async_trait::async_trait;
use northwind_core::{BlogArticle, BlogArticleProduct, BlogComment, NorthwindResult, PageRequest};

/// Low-level blog article data access object.
#[async_trait]
pub trait BlogArticleDao: Send + Sync {
    /// Inserts a new article and returns the store-assigned id.
    /// Title and text are required.
    async fn insert(&self, article: &BlogArticle) -> NorthwindResult<i32>;

    /// Deletes an article by id (comments cascade at the store).
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Replaces the article's title and text, preserving `posted` and the
    /// author. Returns `true` iff a row was affected.
    async fn update(&self, article: &BlogArticle) -> NorthwindResult<bool>;

    /// Finds an article by id. Fails with `NotFound` when absent.
    async fn find(&self, id: i32) -> NorthwindResult<BlogArticle>;

    /// Selects a page of articles ordered by id ascending.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<BlogArticle>>;
}

/// Low-level blog comment data access object.
#[async_trait]
pub trait BlogCommentDao: Send + Sync {
    /// Inserts a new comment and returns the store-assigned id. The
    /// article foreign key is enforced by the store.
    async fn insert(&self, comment: &BlogComment) -> NorthwindResult<i32>;

    /// Deletes a comment by id.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Replaces the comment's text. Returns `true` iff a row was affected.
    async fn update(&self, comment: &BlogComment) -> NorthwindResult<bool>;

    /// Finds a comment by id. Fails with `NotFound` when absent.
    async fn find(&self, id: i32) -> NorthwindResult<BlogComment>;

    /// Selects a page of an article's comments ordered by id ascending.
    async fn select_by_article(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogComment>>;
}

/// Low-level article-product link data access object.
#[async_trait]
pub trait BlogArticleProductDao: Send + Sync {
    /// Selects a page of an article's product links ordered by link id.
    async fn select_by_article(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleProduct>>;

    /// Creates a link in a single constrained insert. The store's foreign
    /// keys reject a missing article or product and the unique constraint
    /// rejects a duplicate pair, both as `Constraint` errors.
    async fn link(&self, article_id: i32, product_id: i32) -> NorthwindResult<i32>;

    /// Removes a link. Returns `true` iff a row was removed.
    async fn unlink(&self, article_id: i32, product_id: i32) -> NorthwindResult<bool>;
}
