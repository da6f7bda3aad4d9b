//! # Northwind Service
//!
//! Management service layer for the Northwind REST service. Wraps the DAO
//! layer with DTO mapping and the try-pattern: the "absent entity" case is
//! an `Option`, never an error unwound through the boundary.

pub mod blogging_service;
pub mod category_service;
pub mod dto;
pub mod employee_service;
pub mod product_service;

pub use blogging_service::*;
pub use category_service::*;
pub use dto::*;
pub use employee_service::*;
pub use product_service::*;
