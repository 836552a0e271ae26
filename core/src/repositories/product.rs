//! Product repository trait and listing filter.

use async_trait::async_trait;
use uuid::Uuid;

use mercato_shared::types::PageQuery;

use crate::domain::entities::{Condition, Product};
use crate::errors::DomainError;

/// Whitelisted sort columns for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Insertion id, the deterministic default
    #[default]
    Id,
    Price,
    CreatedAt,
}

impl ProductSort {
    /// Parse the query-string value; anything off the whitelist is
    /// rejected by the caller
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "price" => Some(ProductSort::Price),
            "created_at" => Some(ProductSort::CreatedAt),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Fully resolved listing filter.
///
/// `owner` is set when the caller asked for their own products only.
/// The same filter drives both the page query and the independent
/// total count. Ordering is deterministic: ties are broken by id.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    /// Restrict to products owned by this user
    pub owner: Option<Uuid>,

    /// Any-overlap match against stored tag sets
    pub tags: Vec<String>,

    /// Exact condition match
    pub condition: Option<Condition>,

    /// Inclusive price range; both bounds always present together
    pub price_range: Option<(i64, i64)>,

    /// Substring match on the product name
    pub search: Option<String>,

    /// Sort column
    pub sort: ProductSort,

    /// Sort direction
    pub order: SortOrder,

    /// Page to return
    pub page: PageQuery,
}

/// Persistence operations for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError>;

    /// Insert a new product
    async fn create(&self, product: Product) -> Result<Product, DomainError>;

    /// Overwrite an existing product's mutable fields
    async fn update(&self, product: Product) -> Result<Product, DomainError>;

    /// Delete a product; `false` when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Fetch one page of products matching the filter
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;

    /// Count all products matching the filter, ignoring pagination
    async fn count(&self, filter: &ProductFilter) -> Result<i64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_whitelist() {
        assert_eq!(ProductSort::parse("price"), Some(ProductSort::Price));
        assert_eq!(ProductSort::parse("created_at"), Some(ProductSort::CreatedAt));
        assert_eq!(ProductSort::parse("user_id"), None);
        assert_eq!(ProductSort::parse("id; DROP TABLE products"), None);
    }

    #[test]
    fn test_order_whitelist() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("desc"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("ASC"), None);
    }
}
