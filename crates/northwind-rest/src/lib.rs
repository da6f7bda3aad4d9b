//! # Northwind REST
//!
//! REST API layer using Axum for the Northwind service. Controllers decode
//! HTTP requests, call exactly one service method, and map the outcome onto
//! a status code.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
