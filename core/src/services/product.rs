//! Product catalog: filtered listing, detail view, and
//! ownership-guarded mutations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use mercato_shared::types::{PageMeta, PageQuery};

use crate::domain::entities::{BankAccount, Condition, Product};
use crate::errors::DomainError;
use crate::repositories::{
    BankAccountRepository, ProductFilter, ProductRepository, ProductSort, SortOrder,
    UserRepository,
};
use crate::validation;

use super::ownership::ensure_owner;

/// Fields accepted when creating or updating a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub price: i64,
    pub image_url: String,
    pub stock: i64,
    pub condition: Condition,
    pub tags: Vec<String>,
    pub is_purchasable: bool,
}

/// Listing parameters as they arrive from the query string, before
/// whitelist checks and caller resolution.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub user_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub tags: Vec<String>,
    pub condition: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
}

impl ProductListQuery {
    /// Checks every field against its rule and resolves the caller,
    /// producing the filter handed to the repository.
    pub fn resolve(self, caller: Option<Uuid>) -> Result<ProductFilter, DomainError> {
        let limit = self
            .limit
            .ok_or_else(|| DomainError::validation("limit", "is required"))?;
        validation::require_min("limit", limit, 1)?;

        let offset = self
            .offset
            .ok_or_else(|| DomainError::validation("offset", "is required"))?;
        validation::require_min("offset", offset, 0)?;
        if limit.checked_mul(offset).is_none() {
            return Err(DomainError::validation("offset", "is out of range"));
        }

        let owner = if self.user_only {
            match caller {
                Some(id) => Some(id),
                None => {
                    return Err(DomainError::Forbidden(
                        "userOnly filter can be used only when logged in".to_string(),
                    ))
                }
            }
        } else {
            None
        };

        let condition = match self.condition.as_deref() {
            None | Some("") => None,
            Some(value) => Some(Condition::parse(value).ok_or_else(|| {
                DomainError::validation("condition", "must be new or second")
            })?),
        };

        let price_range = match (self.min_price, self.max_price) {
            (None, None) => None,
            (Some(min), Some(max)) => {
                validation::require_min("minPrice", min, 0)?;
                if max < min {
                    return Err(DomainError::validation(
                        "maxPrice",
                        "must not be below minPrice",
                    ));
                }
                Some((min, max))
            }
            (Some(_), None) => {
                return Err(DomainError::validation("maxPrice", "is required"));
            }
            (None, Some(_)) => {
                return Err(DomainError::validation("minPrice", "is required"));
            }
        };

        let sort = match self.sort_by.as_deref() {
            None | Some("") => ProductSort::default(),
            Some(value) => ProductSort::parse(value)
                .ok_or_else(|| DomainError::validation("sortBy", "must be price or created_at"))?,
        };

        let order = match self.order_by.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(value) => SortOrder::parse(value)
                .ok_or_else(|| DomainError::validation("orderBy", "must be asc or desc"))?,
        };

        Ok(ProductFilter {
            owner,
            tags: self.tags,
            condition,
            price_range,
            search: self.search.filter(|s| !s.is_empty()),
            sort,
            order,
            page: PageQuery { limit, offset },
        })
    }
}

/// Seller summary joined onto the product detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerSummary {
    pub name: String,
    pub product_sold_total: i64,
    pub bank_accounts: Vec<BankAccount>,
}

/// Product detail plus its seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    pub product: Product,
    pub seller: SellerSummary,
}

/// Product catalog service.
pub struct ProductService<P, U, B>
where
    P: ProductRepository,
    U: UserRepository,
    B: BankAccountRepository,
{
    products: Arc<P>,
    users: Arc<U>,
    bank_accounts: Arc<B>,
}

impl<P, U, B> ProductService<P, U, B>
where
    P: ProductRepository,
    U: UserRepository,
    B: BankAccountRepository,
{
    pub fn new(products: Arc<P>, users: Arc<U>, bank_accounts: Arc<B>) -> Self {
        Self {
            products,
            users,
            bank_accounts,
        }
    }

    /// Filtered, paginated listing. The total is computed against the
    /// same filter with pagination ignored.
    pub async fn list(
        &self,
        query: ProductListQuery,
        caller: Option<Uuid>,
    ) -> Result<(Vec<Product>, PageMeta), DomainError> {
        let filter = query.resolve(caller)?;
        let total = self.products.count(&filter).await?;
        let items = self.products.list(&filter).await?;
        Ok((items, PageMeta::new(filter.page, total)))
    }

    /// Product detail joined with the seller summary and the seller's
    /// bank accounts.
    pub async fn show(&self, product_id: Uuid) -> Result<ProductDetail, DomainError> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("product"))?;

        let seller = self
            .users
            .find_by_id(product.user_id)
            .await?
            .ok_or_else(|| DomainError::Database("seller row missing".to_string()))?;

        let bank_accounts = self.bank_accounts.list_by_owner(seller.id).await?;

        Ok(ProductDetail {
            product,
            seller: SellerSummary {
                name: seller.name,
                product_sold_total: seller.product_sold_total,
                bank_accounts,
            },
        })
    }

    /// Creates a product owned by the caller.
    pub async fn create(
        &self,
        caller: Uuid,
        input: ProductInput,
    ) -> Result<Product, DomainError> {
        validation::validate_product(&input.name, input.price, &input.image_url, input.stock)?;

        let product = Product::new(
            input.name,
            input.price,
            input.image_url,
            input.stock,
            input.condition,
            input.tags,
            input.is_purchasable,
            caller,
        );
        self.products.create(product).await
    }

    /// Updates a product after the ownership check.
    pub async fn update(
        &self,
        caller: Uuid,
        product_id: Uuid,
        input: ProductInput,
    ) -> Result<Product, DomainError> {
        validation::validate_product(&input.name, input.price, &input.image_url, input.stock)?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("product"))?;
        ensure_owner(product.user_id, caller)?;

        product.name = input.name;
        product.price = input.price;
        product.image_url = input.image_url;
        product.stock = input.stock;
        product.condition = input.condition;
        product.tags = input.tags;
        product.is_purchasable = input.is_purchasable;
        product.updated_at = chrono::Utc::now();

        self.products.update(product).await
    }

    /// Deletes a product after the ownership check.
    pub async fn delete(&self, caller: Uuid, product_id: Uuid) -> Result<(), DomainError> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("product"))?;
        ensure_owner(product.user_id, caller)?;

        self.products.delete(product_id).await?;
        Ok(())
    }

    /// Current stock count; visible to the owner only.
    pub async fn stock(&self, caller: Uuid, product_id: Uuid) -> Result<i64, DomainError> {
        let product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("product"))?;
        ensure_owner(product.user_id, caller)?;

        Ok(product.stock)
    }
}
