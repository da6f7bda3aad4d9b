//! Request and response DTOs.
//!
//! Requests carry no identifier (the path is authoritative) and validate
//! against the Northwind column widths. Responses omit raw binary columns;
//! photos and pictures travel through their own endpoints.

mod blog_dto;
mod category_dto;
mod employee_dto;
mod product_dto;

pub use blog_dto::*;
pub use category_dto::*;
pub use employee_dto::*;
pub use product_dto::*;
