//! Domain models for the Northwind schema.
//!
//! These are flat transfer objects: one struct per table row, no behavior,
//! no back-references. DAO implementations own the mapping between store
//! rows and these models; services map them onto request/response DTOs.

mod blog;
mod category;
mod employee;
mod product;

pub use blog::*;
pub use category::*;
pub use employee::*;
pub use product::*;
