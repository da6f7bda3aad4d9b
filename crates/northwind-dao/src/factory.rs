//! Data access factory.
//!
//! Binds the process to one storage technology, selected from the
//! connection URL scheme at startup, and hands out DAO handles for it.

use crate::dao::{
    BlogArticleDao, BlogArticleProductDao, BlogCommentDao, CategoryDao, EmployeeDao, ProductDao,
};
use crate::postgres::{
    PgBlogArticleDao, PgBlogArticleProductDao, PgBlogCommentDao, PgCategoryDao, PgEmployeeDao,
    PgProductDao,
};
use crate::sqlite::{
    SqliteBlogArticleDao, SqliteBlogArticleProductDao, SqliteBlogCommentDao, SqliteCategoryDao,
    SqliteEmployeeDao, SqliteProductDao,
};
use northwind_config::{DatabaseBackend, DatabaseConfig};
use northwind_core::{NorthwindError, NorthwindResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, warn};

/// The process-wide data access factory.
///
/// One variant is live per process; every accessor returns a DAO for the
/// same backing store. Pooling is delegated entirely to SQLx.
#[derive(Clone)]
pub enum DataAccessFactory {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl DataAccessFactory {
    /// Connects to the store named by the configuration URL.
    pub async fn connect(config: &DatabaseConfig) -> NorthwindResult<Self> {
        match config.backend() {
            Some(DatabaseBackend::Postgres) => {
                info!("Connecting to PostgreSQL database...");
                let pool = PgPoolOptions::new()
                    .min_connections(config.min_connections)
                    .max_connections(config.max_connections)
                    .acquire_timeout(config.connect_timeout())
                    .idle_timeout(Some(config.idle_timeout()))
                    .connect(&config.url)
                    .await
                    .map_err(|e| {
                        warn!("Failed to connect to database: {}", e);
                        NorthwindError::Database(format!("Failed to connect: {}", e))
                    })?;
                info!("PostgreSQL connection pool established");
                Ok(Self::Postgres(pool))
            }
            Some(DatabaseBackend::Sqlite) => {
                info!("Connecting to SQLite database...");
                let options = SqliteConnectOptions::from_str(&config.url)
                    .map_err(|e| {
                        NorthwindError::Configuration(format!("Invalid SQLite URL: {}", e))
                    })?
                    .create_if_missing(true)
                    .foreign_keys(true);

                // An in-memory database exists per connection; cap the pool
                // at one so every DAO sees the same store.
                let max_connections = if config.url.contains(":memory:") {
                    1
                } else {
                    config.max_connections
                };

                let pool = SqlitePoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(config.connect_timeout())
                    .idle_timeout(Some(config.idle_timeout()))
                    .connect_with(options)
                    .await
                    .map_err(|e| {
                        warn!("Failed to connect to database: {}", e);
                        NorthwindError::Database(format!("Failed to connect: {}", e))
                    })?;
                info!("SQLite connection pool established");
                Ok(Self::Sqlite(pool))
            }
            None => Err(NorthwindError::Configuration(format!(
                "Unsupported database URL scheme: {}",
                config.url
            ))),
        }
    }

    /// Returns the employee DAO for the bound store.
    #[must_use]
    pub fn employee_dao(&self) -> Arc<dyn EmployeeDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgEmployeeDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteEmployeeDao::new(pool.clone())),
        }
    }

    /// Returns the product DAO for the bound store.
    #[must_use]
    pub fn product_dao(&self) -> Arc<dyn ProductDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgProductDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteProductDao::new(pool.clone())),
        }
    }

    /// Returns the product category DAO for the bound store.
    #[must_use]
    pub fn category_dao(&self) -> Arc<dyn CategoryDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgCategoryDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteCategoryDao::new(pool.clone())),
        }
    }

    /// Returns the blog article DAO for the bound store.
    #[must_use]
    pub fn blog_article_dao(&self) -> Arc<dyn BlogArticleDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgBlogArticleDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteBlogArticleDao::new(pool.clone())),
        }
    }

    /// Returns the blog comment DAO for the bound store.
    #[must_use]
    pub fn blog_comment_dao(&self) -> Arc<dyn BlogCommentDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgBlogCommentDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteBlogCommentDao::new(pool.clone())),
        }
    }

    /// Returns the article-product link DAO for the bound store.
    #[must_use]
    pub fn blog_article_product_dao(&self) -> Arc<dyn BlogArticleProductDao> {
        match self {
            Self::Postgres(pool) => Arc::new(PgBlogArticleProductDao::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteBlogArticleProductDao::new(pool.clone())),
        }
    }

    /// Runs the embedded schema migrations for the bound store.
    pub async fn run_migrations(&self) -> NorthwindResult<()> {
        info!("Running database migrations...");
        match self {
            Self::Postgres(pool) => sqlx::migrate!("../../migrations/postgres").run(pool).await,
            Self::Sqlite(pool) => sqlx::migrate!("../../migrations/sqlite").run(pool).await,
        }
        .map_err(|e| NorthwindError::Database(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> NorthwindResult<()> {
        match self {
            Self::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
            Self::Sqlite(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
            }
        }
        Ok(())
    }

    /// Closes the underlying pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
        info!("Database connection pool closed");
    }
}

impl std::fmt::Debug for DataAccessFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        };
        f.debug_struct("DataAccessFactory")
            .field("backend", &backend)
            .finish()
    }
}
