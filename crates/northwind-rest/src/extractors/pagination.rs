//! Pagination extractor.

use northwind_core::{NorthwindResult, PageRequest};
use serde::Deserialize;

/// Query parameters for pagination.
///
/// Fields stay signed so a negative value reaches validation and comes
/// back as a 400 instead of being rejected during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

impl PaginationQuery {
    /// Validates the query into a page request.
    pub fn into_page(self) -> NorthwindResult<PageRequest> {
        PageRequest::new(
            self.offset.unwrap_or(0),
            self.limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PaginationQuery::default().into_page().unwrap();
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), PageRequest::DEFAULT_LIMIT);
    }

    #[test]
    fn test_negative_offset_rejected() {
        let query = PaginationQuery {
            offset: Some(-1),
            limit: None,
        };
        assert!(query.into_page().is_err());
    }

    #[test]
    fn test_limit_clamped() {
        let query = PaginationQuery {
            offset: None,
            limit: Some(100_000),
        };
        assert_eq!(query.into_page().unwrap().limit(), PageRequest::MAX_LIMIT);
    }
}
