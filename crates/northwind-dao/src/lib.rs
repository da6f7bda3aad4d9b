//! # Northwind DAO
//!
//! Data access layer for the Northwind REST service.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn EmployeeDao> (+ Product, Category, Blog*)   ← dao/
//! PgEmployeeDao | SqliteEmployeeDao                        ← postgres/ | sqlite/
//!   ↓
//! PostgreSQL | SQLite
//! ```
//!
//! Exactly one implementation set is live per process: the
//! [`DataAccessFactory`] inspects the connection URL scheme at startup and
//! hands out `Arc<dyn …Dao>` handles for that backend. Every operation is a
//! single parameterized statement on a pooled connection; caller strings are
//! never interpolated into SQL text.

pub mod dao;
pub mod factory;
pub mod postgres;
pub mod retry;
pub mod sqlite;

pub use dao::*;
pub use factory::*;
pub use retry::*;
