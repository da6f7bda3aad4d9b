//! Application state for Axum handlers.

use northwind_service::{BloggingService, CategoryService, EmployeeService, ProductService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<dyn EmployeeService>,
    pub product_service: Arc<dyn ProductService>,
    pub category_service: Arc<dyn CategoryService>,
    pub blogging_service: Arc<dyn BloggingService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        product_service: Arc<dyn ProductService>,
        category_service: Arc<dyn CategoryService>,
        blogging_service: Arc<dyn BloggingService>,
    ) -> Self {
        Self {
            employee_service,
            product_service,
            category_service,
            blogging_service,
        }
    }
}
