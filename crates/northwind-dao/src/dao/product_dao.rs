//! ProductDao trait — low-level product data access abstraction.

use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, Product};

/// Low-level product data access object.
#[async_trait]
pub trait ProductDao: Send + Sync {
    /// Inserts a new product and returns the store-assigned id.
    async fn insert(&self, product: &Product) -> NorthwindResult<i32>;

    /// Deletes a product by id. Returns `true` iff a row was removed.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Replaces the whole record identified by `product.product_id`.
    async fn update(&self, product: &Product) -> NorthwindResult<bool>;

    /// Finds a product by id. Fails with `NotFound` when absent.
    async fn find(&self, id: i32) -> NorthwindResult<Product>;

    /// Selects a page of products ordered by id ascending.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Product>>;

    /// Selects every product whose name is in the given set.
    ///
    /// Fails with a validation error when the set is empty. Names are
    /// always bound as parameters, never spliced into the query text.
    async fn select_by_name(&self, names: &[String]) -> NorthwindResult<Vec<Product>>;

    /// Selects every product belonging to one of the given categories.
    async fn select_by_category(&self, category_ids: &[i32]) -> NorthwindResult<Vec<Product>>;
}
