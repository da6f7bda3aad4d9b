//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the Northwind service.
///
/// Covers caller-input failures, the "absent entity" case, store-level
/// rejections, and infrastructure faults. DAOs raise these directly;
/// services recover `NotFound` into `Option` at try boundaries; the REST
/// layer maps everything else onto an HTTP status.
#[derive(Error, Debug)]
pub enum NorthwindError {
    /// Malformed caller input: blank required field, non-positive id,
    /// empty lookup set, out-of-range pagination.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity absent at the requested id.
    #[error("{resource} not found: id {id}")]
    NotFound { resource: &'static str, id: i32 },

    /// Store-level rejection (foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Connection-level fault worth retrying for idempotent reads.
    #[error("Transient store failure: {0}")]
    Transient(String),

    /// Any other database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NorthwindError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::Constraint(_) => 400,
            Self::Transient(_) => 503,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Constraint(_) => "CONSTRAINT_VIOLATION",
            Self::Transient(_) => "TRANSIENT_STORE_FAILURE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub const fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a constraint violation error.
    #[must_use]
    pub fn constraint<T: Into<String>>(message: T) -> Self {
        Self::Constraint(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is transient and safe to retry for an
    /// idempotent read.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// True for the "absent entity" case recovered at service boundaries.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for NorthwindError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource: "row",
                id: 0,
            },
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    Self::Constraint(db_err.message().to_string())
                }
                _ => Self::Database(err.to_string()),
            },
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                Self::Transient(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for NorthwindError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `NorthwindError`.
    #[must_use]
    pub fn from_error(error: &NorthwindError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&NorthwindError> for ErrorResponse {
    fn from(error: &NorthwindError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(NorthwindError::not_found("Employee", 1).status_code(), 404);
        assert_eq!(NorthwindError::validation("blank name").status_code(), 400);
        assert_eq!(NorthwindError::constraint("duplicate link").status_code(), 400);
        assert_eq!(NorthwindError::Transient("pool timeout".to_string()).status_code(), 503);
        assert_eq!(NorthwindError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(NorthwindError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(NorthwindError::not_found("Employee", 1).error_code(), "NOT_FOUND");
        assert_eq!(NorthwindError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(NorthwindError::constraint("fk").error_code(), "CONSTRAINT_VIOLATION");
        assert_eq!(
            NorthwindError::Transient("io".to_string()).error_code(),
            "TRANSIENT_STORE_FAILURE"
        );
        assert_eq!(NorthwindError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_transient_errors() {
        assert!(NorthwindError::Transient("connection lost".to_string()).is_transient());
        assert!(!NorthwindError::Database("syntax error".to_string()).is_transient());
        assert!(!NorthwindError::not_found("Product", 1).is_transient());
        assert!(!NorthwindError::validation("bad input").is_transient());
    }

    #[test]
    fn test_not_found_predicate() {
        assert!(NorthwindError::not_found("Category", 7).is_not_found());
        assert!(!NorthwindError::constraint("dup").is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err = NorthwindError::not_found("Employee", 42);
        assert!(err.to_string().contains("Employee"));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_error_response_from_error() {
        let err = NorthwindError::not_found("Employee", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_details() {
        let err = NorthwindError::validation("bad input");
        let details = vec![FieldError {
            field: "last_name".to_string(),
            message: "must not be blank".to_string(),
            code: "not_blank".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert_eq!(response.details.unwrap().len(), 1);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let err: NorthwindError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_pool_timeout_maps_to_transient() {
        let err: NorthwindError = sqlx::Error::PoolTimedOut.into();
        assert!(err.is_transient());
    }
}
