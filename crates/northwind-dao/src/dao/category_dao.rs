//! CategoryDao trait — low-level product category data access abstraction.

use async_trait::async_trait;
use northwind_core::{Category, NorthwindResult, PageRequest};

/// Low-level product category data access object.
#[async_trait]
pub trait CategoryDao: Send + Sync {
    /// Inserts a new category and returns the store-assigned id.
    async fn insert(&self, category: &Category) -> NorthwindResult<i32>;

    /// Deletes a category by id. Returns `true` iff a row was removed.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Replaces the whole record identified by `category.category_id`.
    async fn update(&self, category: &Category) -> NorthwindResult<bool>;

    /// Finds a category by id. Fails with `NotFound` when absent.
    async fn find(&self, id: i32) -> NorthwindResult<Category>;

    /// Selects a page of categories ordered by id ascending.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Category>>;

    /// Selects every category whose name is in the given set.
    async fn select_by_name(&self, names: &[String]) -> NorthwindResult<Vec<Category>>;

    /// Fetches the picture column. `NotFound` when the category is absent,
    /// `Ok(None)` when it has no picture.
    async fn fetch_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Stores (or clears, with `None`) the picture column.
    async fn store_picture(&self, id: i32, picture: Option<&[u8]>) -> NorthwindResult<bool>;
}
