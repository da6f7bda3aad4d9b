//! Product category management service.

use crate::dto::{CategoryRequest, CategoryResponse};
use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ValidateExt};
use northwind_dao::{CategoryDao, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Product category management service trait.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Shows a page of categories.
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<CategoryResponse>>;

    /// Shows a single category; `None` when absent.
    async fn try_show(&self, id: i32) -> NorthwindResult<Option<CategoryResponse>>;

    /// Creates a new category and returns its id.
    async fn create(&self, request: CategoryRequest) -> NorthwindResult<i32>;

    /// Replaces a category. Returns `false` when the id does not exist.
    async fn update(&self, id: i32, request: CategoryRequest) -> NorthwindResult<bool>;

    /// Deletes a category. Returns `false` when the id does not exist.
    async fn destroy(&self, id: i32) -> NorthwindResult<bool>;

    /// Looks up categories by exact name.
    async fn lookup_by_name(&self, names: Vec<String>) -> NorthwindResult<Vec<CategoryResponse>>;

    /// Shows a category's picture; `None` when the category or the
    /// picture is absent.
    async fn try_show_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Replaces a category's picture with the given bytes.
    async fn update_picture(&self, id: i32, bytes: Vec<u8>) -> NorthwindResult<bool>;

    /// Clears a category's picture.
    async fn destroy_picture(&self, id: i32) -> NorthwindResult<bool>;
}

/// Product category management service backed by a DAO.
pub struct CategoryServiceImpl {
    dao: Arc<dyn CategoryDao>,
    read_retry: RetryPolicy,
}

impl CategoryServiceImpl {
    /// Creates a new category service.
    #[must_use]
    pub fn new(dao: Arc<dyn CategoryDao>) -> Self {
        Self {
            dao,
            read_retry: RetryPolicy::default(),
        }
    }
}

#[async_trait]
impl CategoryService for CategoryServiceImpl {
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<CategoryResponse>> {
        debug!(
            "Showing categories, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let categories = self.read_retry.execute(|| self.dao.select_page(page)).await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn try_show(&self, id: i32) -> NorthwindResult<Option<CategoryResponse>> {
        debug!("Showing category: {}", id);

        match self.read_retry.execute(|| self.dao.find(id)).await {
            Ok(category) => Ok(Some(CategoryResponse::from(category))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, request: CategoryRequest) -> NorthwindResult<i32> {
        request.validate_request()?;

        let id = self.dao.insert(&request.into_model(0)).await?;
        info!("Category created: {}", id);
        Ok(id)
    }

    async fn update(&self, id: i32, request: CategoryRequest) -> NorthwindResult<bool> {
        request.validate_request()?;

        let updated = self.dao.update(&request.into_model(id)).await?;
        if updated {
            info!("Category updated: {}", id);
        }
        Ok(updated)
    }

    async fn destroy(&self, id: i32) -> NorthwindResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            info!("Category deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn lookup_by_name(&self, names: Vec<String>) -> NorthwindResult<Vec<CategoryResponse>> {
        debug!("Looking up categories by {} name(s)", names.len());

        let categories = self
            .read_retry
            .execute(|| self.dao.select_by_name(&names))
            .await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn try_show_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        match self.read_retry.execute(|| self.dao.fetch_picture(id)).await {
            Ok(picture) => Ok(picture),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_picture(&self, id: i32, bytes: Vec<u8>) -> NorthwindResult<bool> {
        let stored = self.dao.store_picture(id, Some(&bytes)).await?;
        if stored {
            info!("Picture updated for category: {}", id);
        }
        Ok(stored)
    }

    async fn destroy_picture(&self, id: i32) -> NorthwindResult<bool> {
        let cleared = self.dao.store_picture(id, None).await?;
        if cleared {
            info!("Picture cleared for category: {}", id);
        }
        Ok(cleared)
    }
}

impl std::fmt::Debug for CategoryServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::{Category, NorthwindError};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory mock DAO for testing.
    struct MockCategoryDao {
        rows: Mutex<BTreeMap<i32, Category>>,
        next_id: Mutex<i32>,
    }

    impl MockCategoryDao {
        fn new() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl CategoryDao for MockCategoryDao {
        async fn insert(&self, category: &Category) -> NorthwindResult<i32> {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;

            let mut stored = category.clone();
            stored.category_id = id;
            self.rows.lock().unwrap().insert(id, stored);
            Ok(id)
        }

        async fn delete(&self, id: i32) -> NorthwindResult<bool> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }

        async fn update(&self, category: &Category) -> NorthwindResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&category.category_id) {
                Some(existing) => {
                    let picture = existing.picture.clone();
                    *existing = category.clone();
                    existing.picture = picture;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn find(&self, id: i32) -> NorthwindResult<Category> {
            self.rows
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(NorthwindError::not_found("Category", id))
        }

        async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Category>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect())
        }

        async fn select_by_name(&self, names: &[String]) -> NorthwindResult<Vec<Category>> {
            if names.is_empty() {
                return Err(NorthwindError::validation("names must not be empty"));
            }
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .filter(|c| names.contains(&c.category_name))
                .cloned()
                .collect())
        }

        async fn fetch_picture(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
            self.rows
                .lock()
                .unwrap()
                .get(&id)
                .map(|c| c.picture.clone())
                .ok_or(NorthwindError::not_found("Category", id))
        }

        async fn store_picture(&self, id: i32, picture: Option<&[u8]>) -> NorthwindResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(category) => {
                    category.picture = picture.map(<[u8]>::to_vec);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn sample_request(name: &str) -> CategoryRequest {
        CategoryRequest {
            category_name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_by_name() {
        let service = CategoryServiceImpl::new(Arc::new(MockCategoryDao::new()));

        service.create(sample_request("Beverages")).await.unwrap();
        service.create(sample_request("Condiments")).await.unwrap();

        let found = service
            .lookup_by_name(vec!["Condiments".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category_name, "Condiments");
    }

    #[tokio::test]
    async fn test_try_show_absent_is_none() {
        let service = CategoryServiceImpl::new(Arc::new(MockCategoryDao::new()));
        assert!(service.try_show(9).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_picture_lifecycle() {
        let service = CategoryServiceImpl::new(Arc::new(MockCategoryDao::new()));
        let id = service.create(sample_request("Beverages")).await.unwrap();

        assert!(service.try_show_picture(id).await.unwrap().is_none());

        let picture = vec![4, 5, 6];
        assert!(service.update_picture(id, picture.clone()).await.unwrap());
        assert_eq!(service.try_show_picture(id).await.unwrap(), Some(picture));

        assert!(service.destroy_picture(id).await.unwrap());
        assert!(service.try_show_picture(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_preserves_picture() {
        let service = CategoryServiceImpl::new(Arc::new(MockCategoryDao::new()));
        let id = service.create(sample_request("Beverages")).await.unwrap();
        service.update_picture(id, vec![7]).await.unwrap();

        let mut request = sample_request("Beverages");
        request.description = Some("Updated".to_string());
        assert!(service.update(id, request).await.unwrap());

        assert_eq!(service.try_show_picture(id).await.unwrap(), Some(vec![7]));
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let service = CategoryServiceImpl::new(Arc::new(MockCategoryDao::new()));
        let err = service
            .create(sample_request("A name longer than fifteen"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
