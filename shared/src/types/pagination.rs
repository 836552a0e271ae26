//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Raw pagination parameters as they arrive on the query string.
///
/// `offset` is a page index, not a row offset: the row offset handed
/// to the store is `limit * offset`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page size; must be a positive integer
    pub limit: i64,

    /// Page index; must be a non-negative integer
    pub offset: i64,
}

impl PageQuery {
    /// Row offset for SQL queries. Saturates instead of wrapping so an
    /// absurd limit/offset pair can never panic in a release build;
    /// callers reject such pairs before the query runs.
    pub fn row_offset(&self) -> i64 {
        self.limit.saturating_mul(self.offset)
    }
}

/// Pagination metadata returned alongside a page of results.
///
/// `offset` echoes the row offset, `total` is the count of rows
/// matching the same filter with pagination ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageMeta {
    pub limit: i64,
    pub offset: i64,
    pub total: i64,
}

impl PageMeta {
    /// Build metadata from the request's page query and the
    /// independently computed total
    pub fn new(page: PageQuery, total: i64) -> Self {
        Self {
            limit: page.limit,
            offset: page.row_offset(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_a_page_index() {
        let page = PageQuery {
            limit: 10,
            offset: 3,
        };
        assert_eq!(page.row_offset(), 30);
    }

    #[test]
    fn test_first_page_starts_at_row_zero() {
        let page = PageQuery {
            limit: 25,
            offset: 0,
        };
        assert_eq!(page.row_offset(), 0);
    }

    #[test]
    fn test_row_offset_saturates_instead_of_overflowing() {
        let page = PageQuery {
            limit: i64::MAX,
            offset: 2,
        };
        assert_eq!(page.row_offset(), i64::MAX);
    }

    #[test]
    fn test_meta_echoes_row_offset() {
        let page = PageQuery {
            limit: 10,
            offset: 2,
        };
        let meta = PageMeta::new(page, 100);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.offset, 20);
        assert_eq!(meta.total, 100);
    }
}
