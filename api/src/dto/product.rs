//! Product DTOs and listing query parsing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mercato_core::domain::entities::{Condition, Product};
use mercato_core::errors::DomainError;
use mercato_core::services::{ProductDetail, ProductInput, ProductListQuery, SellerSummary};

use super::bank_account::BankAccountData;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub stock: i64,
    pub condition: String,
    pub tags: Vec<String>,
    pub is_purchasable: bool,
}

impl ProductRequest {
    pub fn into_input(self) -> Result<ProductInput, DomainError> {
        let condition = Condition::parse(&self.condition)
            .ok_or_else(|| DomainError::validation("condition", "must be new or second"))?;
        Ok(ProductInput {
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            stock: self.stock,
            condition,
            tags: self.tags,
            is_purchasable: self.is_purchasable,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub stock: i64,
    pub condition: Condition,
    pub tags: Vec<String>,
    pub is_purchasable: bool,
    pub purchase_count: i64,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductData {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            stock: product.stock,
            condition: product.condition,
            tags: product.tags,
            is_purchasable: product.is_purchasable,
            purchase_count: product.purchase_count,
            user_id: product.user_id,
            created_at: product.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerData {
    pub name: String,
    pub product_sold_total: i64,
    pub bank_accounts: Vec<BankAccountData>,
}

impl From<SellerSummary> for SellerData {
    fn from(seller: SellerSummary) -> Self {
        Self {
            name: seller.name,
            product_sold_total: seller.product_sold_total,
            bank_accounts: seller
                .bank_accounts
                .into_iter()
                .map(BankAccountData::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetailData {
    pub product: ProductData,
    pub seller: SellerData,
}

impl From<ProductDetail> for ProductDetailData {
    fn from(detail: ProductDetail) -> Self {
        Self {
            product: detail.product.into(),
            seller: detail.seller.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StockData {
    pub stock: i64,
}

/// Parses the listing query string.
///
/// Done by hand because `tags` arrives as repeated keys
/// (`tags=a&tags=b`), which `web::Query` cannot deserialize into a
/// `Vec`. Unknown keys are ignored; value-level rules are checked in
/// the domain layer.
pub fn parse_list_query(query: &str) -> ProductListQuery {
    let mut parsed = ProductListQuery::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "userOnly" => parsed.user_only = value == "true",
            "limit" => parsed.limit = value.parse().ok(),
            "offset" => parsed.offset = value.parse().ok(),
            "tags" => parsed.tags.push(value.into_owned()),
            "condition" => parsed.condition = Some(value.into_owned()),
            "minPrice" => parsed.min_price = value.parse().ok(),
            "maxPrice" => parsed.max_price = value.parse().ok(),
            "search" => parsed.search = Some(value.into_owned()),
            "sortBy" => parsed.sort_by = Some(value.into_owned()),
            "orderBy" => parsed.order_by = Some(value.into_owned()),
            _ => {}
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_tags() {
        let query = parse_list_query("limit=10&offset=0&tags=home&tags=garden");
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(0));
        assert_eq!(query.tags, vec!["home".to_string(), "garden".to_string()]);
    }

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let query = parse_list_query("limit=5&offset=0&search=vintage%20lamp");
        assert_eq!(query.search.as_deref(), Some("vintage lamp"));
    }

    #[test]
    fn test_parse_user_only_flag() {
        assert!(parse_list_query("userOnly=true").user_only);
        assert!(!parse_list_query("userOnly=false").user_only);
        assert!(!parse_list_query("").user_only);
    }

    #[test]
    fn test_unparsable_limit_is_treated_as_missing() {
        let query = parse_list_query("limit=abc&offset=0");
        assert_eq!(query.limit, None);
    }

    #[test]
    fn test_request_rejects_unknown_condition() {
        let request = ProductRequest {
            name: "Vintage lamp".to_string(),
            price: 1000,
            image_url: "https://cdn.example.com/lamp.jpg".to_string(),
            stock: 5,
            condition: "used".to_string(),
            tags: vec![],
            is_purchasable: true,
        };
        let err = request.into_input().unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "condition"));
    }
}
