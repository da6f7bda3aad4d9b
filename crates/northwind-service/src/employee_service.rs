//! Employee management service.

use crate::dto::{EmployeeRequest, EmployeeResponse};
use async_trait::async_trait;
use northwind_core::{NorthwindResult, PageRequest, ValidateExt};
use northwind_dao::{EmployeeDao, RetryPolicy};
use std::sync::Arc;
use tracing::{debug, info};

/// Employee management service trait.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Shows a page of employees.
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeResponse>>;

    /// Shows a single employee; `None` when absent.
    async fn try_show(&self, id: i32) -> NorthwindResult<Option<EmployeeResponse>>;

    /// Creates a new employee and returns its id.
    async fn create(&self, request: EmployeeRequest) -> NorthwindResult<i32>;

    /// Replaces an employee. Returns `false` when the id does not exist.
    async fn update(&self, id: i32, request: EmployeeRequest) -> NorthwindResult<bool>;

    /// Deletes an employee. Returns `false` when the id does not exist.
    async fn destroy(&self, id: i32) -> NorthwindResult<bool>;

    /// Shows an employee's photo; `None` when the employee or the photo
    /// is absent.
    async fn try_show_photo(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Replaces an employee's photo with the given bytes.
    async fn update_photo(&self, id: i32, bytes: Vec<u8>) -> NorthwindResult<bool>;

    /// Clears an employee's photo.
    async fn destroy_photo(&self, id: i32) -> NorthwindResult<bool>;
}

/// Employee management service backed by a DAO.
pub struct EmployeeServiceImpl {
    dao: Arc<dyn EmployeeDao>,
    read_retry: RetryPolicy,
}

impl EmployeeServiceImpl {
    /// Creates a new employee service.
    #[must_use]
    pub fn new(dao: Arc<dyn EmployeeDao>) -> Self {
        Self {
            dao,
            read_retry: RetryPolicy::default(),
        }
    }

    /// Creates a new employee service with an explicit read-retry policy.
    #[must_use]
    pub fn with_retry(dao: Arc<dyn EmployeeDao>, read_retry: RetryPolicy) -> Self {
        Self { dao, read_retry }
    }
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    async fn show_page(&self, page: PageRequest) -> NorthwindResult<Vec<EmployeeResponse>> {
        debug!(
            "Showing employees, offset: {}, limit: {}",
            page.offset(),
            page.limit()
        );

        let employees = self.read_retry.execute(|| self.dao.select_page(page)).await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    async fn try_show(&self, id: i32) -> NorthwindResult<Option<EmployeeResponse>> {
        debug!("Showing employee: {}", id);

        match self.read_retry.execute(|| self.dao.find(id)).await {
            Ok(employee) => Ok(Some(EmployeeResponse::from(employee))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, request: EmployeeRequest) -> NorthwindResult<i32> {
        request.validate_request()?;

        let id = self.dao.insert(&request.into_model(0)).await?;
        info!("Employee created: {}", id);
        Ok(id)
    }

    async fn update(&self, id: i32, request: EmployeeRequest) -> NorthwindResult<bool> {
        request.validate_request()?;

        let updated = self.dao.update(&request.into_model(id)).await?;
        if updated {
            info!("Employee updated: {}", id);
        }
        Ok(updated)
    }

    async fn destroy(&self, id: i32) -> NorthwindResult<bool> {
        let deleted = self.dao.delete(id).await?;
        if deleted {
            info!("Employee deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn try_show_photo(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
        match self.read_retry.execute(|| self.dao.fetch_photo(id)).await {
            Ok(photo) => Ok(photo),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn update_photo(&self, id: i32, bytes: Vec<u8>) -> NorthwindResult<bool> {
        let stored = self.dao.store_photo(id, Some(&bytes)).await?;
        if stored {
            info!("Photo updated for employee: {}", id);
        }
        Ok(stored)
    }

    async fn destroy_photo(&self, id: i32) -> NorthwindResult<bool> {
        let cleared = self.dao.store_photo(id, None).await?;
        if cleared {
            info!("Photo cleared for employee: {}", id);
        }
        Ok(cleared)
    }
}

impl std::fmt::Debug for EmployeeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use northwind_core::{Employee, NorthwindError};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory mock DAO for testing.
    struct MockEmployeeDao {
        rows: Mutex<BTreeMap<i32, Employee>>,
        next_id: Mutex<i32>,
    }

    impl MockEmployeeDao {
        fn new() -> Self {
            Self {
                rows: Mutex::new(BTreeMap::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl EmployeeDao for MockEmployeeDao {
        async fn insert(&self, employee: &Employee) -> NorthwindResult<i32> {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;

            let mut stored = employee.clone();
            stored.employee_id = id;
            self.rows.lock().unwrap().insert(id, stored);
            Ok(id)
        }

        async fn delete(&self, id: i32) -> NorthwindResult<bool> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }

        async fn update(&self, employee: &Employee) -> NorthwindResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&employee.employee_id) {
                Some(existing) => {
                    let photo = existing.photo.clone();
                    *existing = employee.clone();
                    existing.photo = photo;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn find(&self, id: i32) -> NorthwindResult<Employee> {
            self.rows
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(NorthwindError::not_found("Employee", id))
        }

        async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Employee>> {
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

        async fn fetch_photo(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>> {
            self.rows
                .lock()
                .unwrap()
                .get(&id)
                .map(|e| e.photo.clone())
                .ok_or(NorthwindError::not_found("Employee", id))
        }

        async fn store_photo(&self, id: i32, photo: Option<&[u8]>) -> NorthwindResult<bool> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&id) {
                Some(employee) => {
                    employee.photo = photo.map(<[u8]>::to_vec);
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    fn sample_request() -> EmployeeRequest {
        EmployeeRequest {
            last_name: "Doe".to_string(),
            first_name: "Jane".to_string(),
            title: None,
            title_of_courtesy: None,
            birth_date: None,
            hire_date: None,
            address: None,
            city: None,
            region: None,
            postal_code: None,
            country: None,
            home_phone: None,
            extension: None,
            notes: None,
            reports_to: None,
            photo_path: None,
        }
    }

    fn service() -> EmployeeServiceImpl {
        EmployeeServiceImpl::new(Arc::new(MockEmployeeDao::new()))
    }

    #[tokio::test]
    async fn test_create_then_try_show() {
        let service = service();

        let id = service.create(sample_request()).await.unwrap();
        assert_eq!(id, 1);

        let shown = service.try_show(id).await.unwrap().unwrap();
        assert_eq!(shown.first_name, "Jane");
        assert_eq!(shown.last_name, "Doe");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let service = service();

        let mut request = sample_request();
        request.last_name = " ".to_string();

        let err = service.create(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_try_show_absent_is_none_not_error() {
        let service = service();
        assert!(service.try_show(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_absent_returns_false() {
        let service = service();
        assert!(!service.update(42, sample_request()).await.unwrap());
    }

    #[tokio::test]
    async fn test_destroy_twice_returns_false_second_time() {
        let service = service();
        let id = service.create(sample_request()).await.unwrap();

        assert!(service.destroy(id).await.unwrap());
        assert!(!service.destroy(id).await.unwrap());
        assert!(service.try_show(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_photo_lifecycle() {
        let service = service();
        let id = service.create(sample_request()).await.unwrap();

        // Employee exists but carries no photo yet.
        assert!(service.try_show_photo(id).await.unwrap().is_none());

        let photo = vec![1, 2, 3];
        assert!(service.update_photo(id, photo.clone()).await.unwrap());
        assert_eq!(service.try_show_photo(id).await.unwrap(), Some(photo));

        assert!(service.destroy_photo(id).await.unwrap());
        assert!(service.try_show_photo(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_photo_for_absent_employee_is_none() {
        let service = service();
        assert!(service.try_show_photo(42).await.unwrap().is_none());
        assert!(!service.update_photo(42, vec![1]).await.unwrap());
        assert!(!service.destroy_photo(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_does_not_clear_photo() {
        let service = service();
        let id = service.create(sample_request()).await.unwrap();
        service.update_photo(id, vec![9, 9]).await.unwrap();

        let mut request = sample_request();
        request.title = Some("Sales Manager".to_string());
        assert!(service.update(id, request).await.unwrap());

        assert_eq!(service.try_show_photo(id).await.unwrap(), Some(vec![9, 9]));
    }

    #[tokio::test]
    async fn test_show_page_maps_models() {
        let service = service();
        for _ in 0..3 {
            service.create(sample_request()).await.unwrap();
        }

        let page = service
            .show_page(PageRequest::new(1, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].employee_id, 2);
    }
}
