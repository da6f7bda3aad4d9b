//! EmployeeDao trait — low-level employee data access abstraction.

use async_trait::async_trait;
use northwind_core::{Employee, NorthwindResult, PageRequest};

/// Low-level employee data access object.
#[async_trait]
pub trait EmployeeDao: Send + Sync {
    /// Inserts a new employee and returns the store-assigned id.
    ///
    /// Fails with a validation error when a required name field is blank.
    /// The `employee_id` field of the argument is ignored.
    async fn insert(&self, employee: &Employee) -> NorthwindResult<i32>;

    /// Deletes an employee by id. Returns `true` iff a row was removed.
    async fn delete(&self, id: i32) -> NorthwindResult<bool>;

    /// Replaces the whole record identified by `employee.employee_id`.
    /// Returns `true` iff a row was affected; never creates a row.
    async fn update(&self, employee: &Employee) -> NorthwindResult<bool>;

    /// Finds an employee by id. Fails with `NotFound` when absent.
    async fn find(&self, id: i32) -> NorthwindResult<Employee>;

    /// Selects a page of employees ordered by id ascending.
    async fn select_page(&self, page: PageRequest) -> NorthwindResult<Vec<Employee>>;

    /// Fetches the photo column for an employee.
    ///
    /// Fails with `NotFound` when the employee is absent; returns
    /// `Ok(None)` when the employee exists but has no photo.
    async fn fetch_photo(&self, id: i32) -> NorthwindResult<Option<Vec<u8>>>;

    /// Stores (or clears, with `None`) the photo column in a single
    /// statement. Returns `true` iff a row was affected.
    async fn store_photo(&self, id: i32, photo: Option<&[u8]>) -> NorthwindResult<bool>;
}
