//! # Northwind Core
//!
//! Core types, domain models, and error definitions for the Northwind REST
//! service. This crate provides the foundational abstractions shared by the
//! data-access, service, and presentation layers.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;
