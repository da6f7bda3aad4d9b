//! DAO (Data Access Object) traits.
//!
//! One trait per entity; each implementation targets a single data source
//! and owns the mapping between store rows and domain models. Operations
//! raise typed errors: malformed arguments fail with `Validation`, an
//! absent entity on `find` fails with `NotFound` — services recover the
//! latter into an `Option` at try boundaries.

mod blog_dao;
mod category_dao;
mod employee_dao;
mod product_dao;

pub use blog_dao::*;
pub use category_dao::*;
pub use employee_dao::*;
pub use product_dao::*;

/// Argument guards shared by every DAO implementation.
pub(crate) mod guards {
    use northwind_core::{NorthwindError, NorthwindResult};

    /// An identifier must be strictly positive.
    pub fn positive_id(id: i32) -> NorthwindResult<()> {
        if id <= 0 {
            return Err(NorthwindError::validation(format!(
                "id must be greater than zero, got {id}"
            )));
        }
        Ok(())
    }

    /// A required text field must not be blank.
    pub fn not_blank(field: &'static str, value: &str) -> NorthwindResult<()> {
        if value.trim().is_empty() {
            return Err(NorthwindError::validation(format!(
                "{field} must not be blank"
            )));
        }
        Ok(())
    }

    /// A lookup set must contain at least one element.
    pub fn not_empty<T>(field: &'static str, values: &[T]) -> NorthwindResult<()> {
        if values.is_empty() {
            return Err(NorthwindError::validation(format!(
                "{field} must not be empty"
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_positive_id() {
            assert!(positive_id(1).is_ok());
            assert!(positive_id(0).is_err());
            assert!(positive_id(-7).is_err());
        }

        #[test]
        fn test_not_blank() {
            assert!(not_blank("last_name", "Doe").is_ok());
            assert!(not_blank("last_name", "  ").is_err());
        }

        #[test]
        fn test_not_empty() {
            assert!(not_empty("names", &["Chai".to_string()]).is_ok());
            assert!(not_empty::<String>("names", &[]).is_err());
        }
    }
}
