//! PostgreSQL product DAO implementation.

use crate::dao::{guards, ProductDao};
use async_trait::async_trait;
use northwind_core::{NorthwindError, NorthwindResult, PageRequest, Product};
use sqlx::{FromRow, PgPool};
use tracing::debug;

const PRODUCT_COLUMNS: &str = "product_id, product_name, supplier_id, category_id, \
     quantity_per_unit, unit_price, units_in_stock, units_on_order, \
     reorder_level, discontinued";

/// PostgreSQL product DAO.
#[derive(Clone)]
pub struct PgProductDao {
    pool: PgPool,
}

impl PgProductDao {
    /// Creates a new PostgreSQL product DAO.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: i32,
    product_name: String,
    supplier_id: Option<i32>,
    category_id: Option<i32>,
    quantity_per_unit: Option<String>,
    unit_price: Option<f64>,
    units_in_stock: Option<i16>,
    units_on_order: Option<i16>,
    reorder_level: Option<i16>,
    discontinued: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            supplier_id: row.supplier_id,
            category_id: row.category_id,
            quantity_per_unit: row.quantity_per_unit,
            unit_price: row.unit_price,
            units_in_stock: row.units_in_stock,
            units_on_order: row.units_on_order,
            reorder_level: row.reorder_level,
            discontinued: row.discontinued,
        }
    }
}

#[async_trait]
impl ProductDao for PgProductDao {
    async fn insert(&self, product: &Product) -> NorthwindResult<i32> {
        guards::not_blank("product_name", &product.product_name)?;
        debug!("Inserting product: {}", product.product_name);

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO products (product_name, supplier_id, category_id, quantity_per_unit,
                                  unit_price, units_in_stock, units_on_order, reorder_level,
                                  discontinued)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING product_id
            "#,
        )
        .bind(&product.product_name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(product.discontinued)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete(&self, id: i32) -> NorthwindResult<bool> {
        guards::positive_id(id)?;
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, product: &Product) -> NorthwindResult<bool> {
        guards::positive_id(product.product_id)?;
        guards::not_blank("product_name", &product.product_name)?;
        debug!("Updating product: {}", product.product_id);

        let result = sqlx::query(
            r#"
            UPDATE products
            SET product_name = $1, supplier_id = $2, category_id = $3,
                quantity_per_unit = $4, unit_price = $5, units_in_stock = $6,
                units_on_order = $7, reorder_level = $8, discontinued = $9
            WHERE product_id = $10
            "#,
        )
        .bind(&product.product_name)
        .bind(product.supplier_id)
        .bind(product.category_id)
        .bind(&product.quantity_per_unit)
        .bind(product.unit_price)
        .bind(product.units_in_stock)
        .bind(product.units_on_order)
        .bind(product.reorder_level)
        .bind(product.discontinued)
        .bind(product.product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find(&self, id: i32) -> NorthwindResult<Product> {
        guards::positive_id(id)?;
        debug!("Finding product: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::from)
            .ok_or(NorthwindError::not_found("Product", id))
    }

    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Product>> {
        debug!(
            "Selecting products, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn select_by_name(&self, names: &[String]) -> NorthwindResult<Vec<Product>> {
        guards::not_empty("names", names)?;
        debug!("Selecting products by {} name(s)", names.len());

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_name = ANY($1) ORDER BY product_id"
        ))
        .bind(names)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn select_by_category(&self, category_ids: &[i32]) -> NorthwindResult<Vec<Product>> {
        guards::not_empty("category_ids", category_ids)?;
        debug!("Selecting products by {} category id(s)", category_ids.len());

        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = ANY($1) ORDER BY product_id"
        ))
        .bind(category_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}

impl std::fmt::Debug for PgProductDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgProductDao").finish_non_exhaustive()
    }
}
