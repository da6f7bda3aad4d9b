//! PostgreSQL blogging DAO implementations.

use crate::dao::{guards, BlogArticleDao, BlogArticleProductDao, BlogCommentDao};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use northwind_core::{
    BlogArticle, BlogArticleProduct, BlogComment, NorthwindError, NorthwindResult, PageRequest,
};
use sqlx::{FromRow, PgPool};
use tracing::debug;

/// PostgreSQL blog article DAO.
#[derive(Clone)]
pub struct PgBlogArticleDao {
    pool: PgPool,
}

impl PgBlogArticleDao {
    /// Creates a new PostgreSQL blog article DAO.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    text: String,
    posted: Option<DateTime<Utc>>,
    author_id: i32,
}

impl From<ArticleRow> for BlogArticle {
    fn from(row: ArticleRow) -> Self {
        Self {
            article_id: row.article_id,
            title: row.title,
            text: row.text,
            posted: row.posted,
            author_id: row.author_id,
        }
    }
}

#[async_trait]
impl BlogArticleDao for PgBlogArticleDao {
    async fn insert(&self, article: &BlogArticle) -> NorthwindResult<i32> {
        guards::not_blank("title", &article.title)?;
        guards::not_blank("text", &article.text)?;
        guards::positive_id(article.author_id)?;
        debug!("Inserting blog article: {}", article.title);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO blog_articles (title, text, posted, author_id)
            VALUES ($1, $2, $3, $4)
            RETURNING article_id
            "#,
        )
        .bind(&article.title)
        .bind(&article.text)
        .bind(article.posted)
        .bind(article.author_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Deleting blog article: {}", id);

        let result = sqlx::query("DELETE FROM blog_articles WHERE article_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, article: &BlogArticle) -> NorthwindResult<bool> {
        guards::positive_id(article.article_id)?;
        guards::not_blank("title", &article.title)?;
        guards::not_blank("text", &article.text)?;
        debug!("Updating blog article: {}", article.article_id);

        // Only title and text are replaceable; posted and author stay.
        let result =
            sqlx::query("UPDATE blog_articles SET title = $1, text = $2 WHERE article_id = $3")
                .bind(&article.title)
                .bind(&article.text)
                .bind(article.article_id)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i32) -> NorthwindResult<BlogArticle> {
        guards::positive_id(id)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT article_id, title, text, posted, author_id FROM blog_articles WHERE article_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(BlogArticle::from)
            .ok_or(NorthwindError::not_found("BlogArticle", id))
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<BlogArticle>> {
        debug!(
            "Selecting blog articles, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT article_id, title, text, posted, author_id
            FROM blog_articles
            ORDER BY article_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogArticle::from).collect())
    }
}

impl std::fmt::Debug for PgBlogArticleDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgBlogArticleDao").finish_non_exhaustive()
    }
}

/// PostgreSQL blog comment DAO.
#[derive(Clone)]
pub struct PgBlogCommentDao {
    pool: PgPool,
}

impl PgBlogCommentDao {
    /// Creates a new PostgreSQL blog comment DAO.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i32,
    article_id: i32,
    text: String,
    published: Option<DateTime<Utc>>,
}

impl From<CommentRow> for BlogComment {
    fn from(row: CommentRow) -> Self {
        Self {
            comment_id: row.comment_id,
            article_id: row.article_id,
            text: row.text,
            published: row.published,
        }
    }
}

#[async_trait]
impl BlogCommentDao for PgBlogCommentDao {
    async fn insert(&self, comment: &BlogComment) -> NorthwindResult<i32> {
        guards::positive_id(comment.article_id)?;
        guards::not_blank("text", &comment.text)?;
        debug!("Inserting comment for article: {}", comment.article_id);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO blog_comments (article_id, text, published)
            VALUES ($1, $2, $3)
            RETURNING comment_id
            "#,
        )
        .bind(comment.article_id)
        .bind(&comment.text)
        .bind(comment.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Deleting comment: {}", id);

        let result = sqlx::query("DELETE FROM blog_comments WHERE comment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, comment: &BlogComment) -> NorthwindResult<bool> {
        guards::positive_id(comment.comment_id)?;
        guards::not_blank("text", &comment.text)?;
        debug!("Updating comment: {}", comment.comment_id);

        let result = sqlx::query("UPDATE blog_comments SET text = $1 WHERE comment_id = $2")
            .bind(&comment.text)
            .bind(comment.comment_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i32) -> NorthwindResult<BlogComment> {
        guards::positive_id(id)?;

        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT comment_id, article_id, text, published FROM blog_comments WHERE comment_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(BlogComment::from)
            .ok_or(NorthwindError::not_found("BlogComment", id))
    }

    async fn select_by_article(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogComment>> {
        guards::positive_id(article_id)?;

        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, article_id, text, published
            FROM blog_comments
            WHERE article_id = $1
            ORDER BY comment_id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(article_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogComment::from).collect())
    }
}

impl std::fmt::Debug for PgBlogCommentDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgBlogCommentDao").finish_non_exhaustive()
    }
}

/// PostgreSQL article-product link DAO.
#[derive(Clone)]
pub struct PgBlogArticleProductDao {
    pool: PgPool,
}

impl PgBlogArticleProductDao {
    /// Creates a new PostgreSQL article-product link DAO.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i32,
    article_id: i32,
    product_id: i32,
}

impl From<LinkRow> for BlogArticleProduct {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            article_id: row.article_id,
            product_id: row.product_id,
        }
    }
}

#[async_trait]
impl BlogArticleProductDao for PgBlogArticleProductDao {
    async fn select_by_article(
        &self,
        article_id: i32,
        page: PageRequest,
    ) -> NorthwindResult<Vec<BlogArticleProduct>> {
        guards::positive_id(article_id)?;

        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, article_id, product_id
            FROM blog_article_products
            WHERE article_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(article_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogArticleProduct::from).collect())
    }

    async fn link(&self, article_id: i32, product_id: i32) -> NorthwindResult<i32> {
        guards::positive_id(article_id)?;
        guards::positive_id(product_id)?;
        debug!("Linking article {} to product {}", article_id, product_id);

        // Single constrained insert: the foreign keys reject a missing
        // article or product, the unique pair rejects a duplicate link.
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO blog_article_products (article_id, product_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(article_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn unlink(&self, article_id: i32, product_id: i32) -> NorthwindResult<bool> {
        guards::positive_id(article_id)?;
        guards::positive_id(product_id)?;
        debug!("Unlinking article {} from product {}", article_id, product_id);

        let result = sqlx::query(
            "DELETE FROM blog_article_products WHERE article_id = $1 AND product_id = $2",
        )
        .bind(article_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgBlogArticleProductDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgBlogArticleProductDao").finish_non_exhaustive()
    }
}
