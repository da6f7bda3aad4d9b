//! SQLite product category DAO implementation.

use crate::dao::{guards, CategoryDao};
use async_trait::async_trait;
use northwind_core::{Category, NorthwindError, NorthwindResult, PageRequest};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

const CATEGORY_COLUMNS: &str = "category_id, category_name, description, picture";

/// SQLite product category DAO.
#[derive(Clone)]
pub struct SqliteCategoryDao {
    pool: SqlitePool,
}

impl SqliteCategoryDao {
    /// Creates a new SQLite category DAO.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a category.
#[derive(Debug, FromRow)]
struct CategoryRow {
    category_id: i32,
    category_name: String,
    description: Option<String>,
    picture: Option<Vec<u8>>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            category_id: row.category_id,
            category_name: row.category_name,
            description: row.description,
            picture: row.picture,
        }
    }
}

#[async_trait]
impl CategoryDao for SqliteCategoryDao {
    async fn insert(&self, category: &Category) -> NorthwindResult<i32> {
        guards::not_blank("category_name", &category.category_name)?;
        debug!("Inserting category: {}", category.category_name);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (category_name, description, picture)
            VALUES (?, ?, ?)
            RETURNING category_id
            "#,
        )
        .bind(&category.category_name)
        .bind(&category.description)
        .bind(&category.picture)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Deleting category: {}", id);

        let result = sqlx::query("DELETE FROM categories WHERE category_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, category: &Category) -> NorthwindResult<bool> {
        guards::positive_id(category.category_id)?;
        guards::not_blank("category_name", &category.category_name)?;
        debug!("Updating category: {}", category.category_id);

        // Picture changes only through store_picture.
        let result = sqlx::query(
            "UPDATE categories SET category_name = ?, description = ? WHERE category_id = ?",
        )
        .bind(&category.category_name)
        .bind(&category.description)
        .bind(category.category_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i32) -> NorthwindResult<Category> {
        guards::positive_id(id)?;
        debug!("Finding category: {}", id);

        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Category::from)
            .ok_or(NorthwindError::not_found("Category", id))
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Category>> {
        debug!(
            "Selecting categories, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let rows = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY category_id LIMIT ? OFFSET ?"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn select_by_name(&self, names: &[String]) -> NorthwindResult<Vec<Category>> {
        guards::not_empty("names", names)?;
        debug!("Selecting categories by {} name(s)", names.len());

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE category_name IN ("
        ));
        let mut separated = builder.separated(", ");
        for name in names {
            separated.push_bind(name);
        }
        drop(separated);
        builder.push(") ORDER BY category_id");

        let rows = builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn fetch_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        guards::positive_id(id)?;

        let picture: Option<Option<Vec<u8>>> =
            sqlx::query_scalar("SELECT picture FROM categories WHERE category_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        picture.ok_or(NorthwindError::not_found("Category", id))
    }

    async fn store_picture(&self, id: i32, picture: Option<&[u8]>) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Storing picture for category: {}", id);

        let result = sqlx::query("UPDATE categories SET picture = ? WHERE category_id = ?")
            .bind(picture)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for SqliteCategoryDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCategoryDao").finish_non_exhaustive()
    }
}
