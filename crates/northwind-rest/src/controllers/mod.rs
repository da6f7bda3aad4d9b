//! REST API controllers.

pub mod blog_controller;
pub mod category_controller;
pub mod employee_controller;
pub mod health_controller;
pub mod product_controller;

pub use health_controller::*;
