//! PostgreSQL DAO implementations.

mod blog_dao;
mod category_dao;
mod employee_dao;
mod product_dao;

pub use blog_dao::*;
pub use category_dao::*;
pub use employee_dao::*;
pub use product_dao::*;
