//! Product management service.

use crate::dto::{ProductRequest, ProductResponse};
use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ValidateExt};
use northwind_dao::{ProductDao, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Product management service trait.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Shows a page of products.
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductResponse>>;

    /// Shows a single product; `None` when absent.
    async fn try_show(&self, id: i32) -> NorthwindResult<Option<ProductResponse>>;

    /// Creates a new product and returns its id.
    async fn create(&self, request: ProductRequest) -> NorthwindResult<i32>;

    /// Replaces a product. Returns `false` when the id does not exist.
    async fn update(&self, id: i32, request: ProductRequest) -> NorthwindResult<bool>;

    /// Deletes a product. Returns `false` when the id does not exist.
    async fn destroy(&self, id: i32) -> NorthwindResult<bool>;

    /// Looks up products by exact name.
    async fn lookup_by_name(&self, names: Vec<String>) -> NorthwindResult<Vec<ProductResponse>>;

    /// Looks up products by category id.
    async fn lookup_by_category(
        &self,
        category_ids: Vec<i32>,
    ) -> NorthwindResult<Vec<ProductResponse>>;
}

/// Product management service backed by a DAO.
pub struct ProductServiceImpl {
    dao: Arc<dyn ProductDao>,
    read_retry: RetryPolicy,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    #[must_use]
    pub fn new(dao: Arc<dyn ProductDao>) -> Self {
        Self {
            dao,
            read_retry: RetryPolicy::default(),
        }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<ProductResponse>> {
        debug!(
            "Showing products, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let products = self.read_retry.execute(|| self.dao.select_page(page)).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn try_show(&self, id: i32) -> NorthwindResult<Option<ProductResponse>> {
        debug!("Showing product: {}", id);

        match self.read_retry.execute(|| self.dao.find(id)).await {
            Ok(product) => Ok(Some(ProductResponse::from(product))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, request: ProductRequest) -> NorthwindResult<i32> {
        request.validate_request()?;

        let id = self.dao.insert(&request.into_model(0)).await?;
        info!("Product created: {}", id);
        Ok(id)
    }

    async fn update(&self, id: i32, request: ProductRequest) -> NorthwindResult<bool> {
        request.validate_request()?;

        let updated = self.dao.update(&request.into_model(id)).await?;
        if updated {
            info!("Product updated: {}", id);
        }
        Ok(updated)
    }

    async fn destroy(&self, id: i32) -> NorthwindResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            info!("Product deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn lookup_by_name(&self, names: Vec<String>) -> NorthwindResult<Vec<ProductResponse>> {
        debug!("Looking up products by {} name(s)", names.len());

        let products = self
            .read_retry
            .execute(|| self.dao.select_by_name(&names))
            .await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn lookup_by_category(
        &self,
        category_ids: Vec<i32>,
    ) -> NorthwindResult<Vec<ProductResponse>> {
        debug!("Looking up products by {} category id(s)", category_ids.len());

        let products = self
            .read_retry
            .execute(|| self.dao.select_by_category(&category_ids))
            .await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
