//! Pagination types for list operations.

use crate::{NorthwindError, NorthwindResult};
use serde::{Deserialize, Serialize};

/// A validated request for a slice of an ordered result set.
///
/// The wire contract is offset/limit: skip `offset` rows of the
/// primary-key-ordered set, return at most `limit` rows. Construction
/// rejects a negative offset and a non-positive limit, and clamps the
/// limit to [`Self::MAX_LIMIT`] so a caller cannot request an unbounded
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_LIMIT: i64 = 25;
    /// The maximum allowed page size.
    pub const MAX_LIMIT: i64 = 100;

    /// Creates a new page request.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `offset < 0` or `limit < 1`.
    pub fn new(offset: i64, limit: i64) -> NorthwindResult<Self> {
        if offset < 0 {
            return Err(NorthwindError::validation(format!(
                "offset must be greater than or equal to zero, got {offset}"
            )));
        }
        if limit < 1 {
            return Err(NorthwindError::validation(format!(
                "limit must be greater than zero, got {limit}"
            )));
        }
        Ok(Self {
            offset,
            limit: limit.min(Self::MAX_LIMIT),
        })
    }

    /// Creates a request for the start of the set with the default limit.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Returns the number of rows to skip.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.offset
    }

    /// Returns the maximum number of rows to return.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_valid() {
        let page = PageRequest::new(20, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn test_page_request_negative_offset_rejected() {
        assert!(PageRequest::new(-1, 10).is_err());
    }

    #[test]
    fn test_page_request_zero_limit_rejected() {
        assert!(PageRequest::new(0, 0).is_err());
        assert!(PageRequest::new(0, -5).is_err());
    }

    #[test]
    fn test_page_request_limit_clamped() {
        let page = PageRequest::new(0, 10_000).unwrap();
        assert_eq!(page.limit(), PageRequest::MAX_LIMIT);
    }

    #[test]
    fn test_page_request_first() {
        let page = PageRequest::first();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), PageRequest::DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_request_default() {
        assert_eq!(PageRequest::default(), PageRequest::first());
    }
}
