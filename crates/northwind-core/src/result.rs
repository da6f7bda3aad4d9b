//! Result type aliases for the Northwind service.

use crate::NorthwindError;

/// A specialized `Result` type for Northwind operations.
pub type NorthwindResult<T> = Result<T, NorthwindError>;

/// A boxed future returning a `NorthwindResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = NorthwindResult<T>> + Send + 'a>>;
