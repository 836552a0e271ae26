//! Postgres implementation of the ProductRepository trait.
//!
//! Listing filters are assembled with `QueryBuilder`; every value is
//! bound, and the ORDER BY column comes from the whitelisted
//! `ProductSort` enum, never from the request string.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder, Row};
use uuid::Uuid;

use mercato_core::domain::entities::{Condition, Product};
use mercato_core::errors::DomainError;
use mercato_core::repositories::{ProductFilter, ProductRepository, ProductSort, SortOrder};

/// Postgres-backed product store.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &sqlx::postgres::PgRow) -> Result<Product, DomainError> {
        let condition: String = row
            .try_get("condition")
            .map_err(|e| DomainError::Database(format!("Failed to get condition: {}", e)))?;
        let condition = Condition::parse(&condition).ok_or_else(|| {
            DomainError::Database(format!("Unknown condition value: {}", condition))
        })?;

        Ok(Product {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))?,
            price: row
                .try_get("price")
                .map_err(|e| DomainError::Database(format!("Failed to get price: {}", e)))?,
            image_url: row
                .try_get("image_url")
                .map_err(|e| DomainError::Database(format!("Failed to get image_url: {}", e)))?,
            stock: row
                .try_get("stock")
                .map_err(|e| DomainError::Database(format!("Failed to get stock: {}", e)))?,
            condition,
            tags: row
                .try_get("tags")
                .map_err(|e| DomainError::Database(format!("Failed to get tags: {}", e)))?,
            is_purchasable: row.try_get("is_purchasable").map_err(|e| {
                DomainError::Database(format!("Failed to get is_purchasable: {}", e))
            })?,
            purchase_count: row.try_get("purchase_count").map_err(|e| {
                DomainError::Database(format!("Failed to get purchase_count: {}", e))
            })?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DomainError::Database(format!("Failed to get user_id: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    /// Appends the WHERE clauses shared by the page and count queries.
    fn push_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ProductFilter) {
        builder.push(" WHERE TRUE");

        if let Some(owner) = filter.owner {
            builder.push(" AND user_id = ").push_bind(owner);
        }
        if !filter.tags.is_empty() {
            // Any-overlap against the stored tag array
            builder.push(" AND tags && ").push_bind(&filter.tags);
        }
        if let Some(condition) = filter.condition {
            builder.push(" AND condition = ").push_bind(condition.as_str());
        }
        if let Some((min, max)) = filter.price_range {
            builder.push(" AND price >= ").push_bind(min);
            builder.push(" AND price <= ").push_bind(max);
        }
        if let Some(search) = &filter.search {
            builder
                .push(" AND name LIKE ")
                .push_bind(format!("%{}%", search));
        }
    }

    fn sort_column(sort: ProductSort) -> &'static str {
        match sort {
            ProductSort::Id => "id",
            ProductSort::Price => "price",
            ProductSort::CreatedAt => "created_at",
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let query = r#"
            SELECT id, name, price, image_url, stock, condition, tags,
                   is_purchasable, purchase_count, user_id, created_at, updated_at
            FROM products
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let query = r#"
            INSERT INTO products (id, name, price, image_url, stock, condition,
                                  tags, is_purchasable, purchase_count, user_id,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#;

        sqlx::query(query)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.stock)
            .bind(product.condition.as_str())
            .bind(&product.tags)
            .bind(product.is_purchasable)
            .bind(product.purchase_count)
            .bind(product.user_id)
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database insert failed: {}", e)))?;

        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let query = r#"
            UPDATE products
            SET name = $2, price = $3, image_url = $4, stock = $5,
                condition = $6, tags = $7, is_purchasable = $8, updated_at = $9
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.image_url)
            .bind(product.stock)
            .bind(product.condition.as_str())
            .bind(&product.tags)
            .bind(product.is_purchasable)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("product"));
        }
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database delete failed: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(
            "SELECT id, name, price, image_url, stock, condition, tags, \
             is_purchasable, purchase_count, user_id, created_at, updated_at \
             FROM products",
        );
        Self::push_filter(&mut builder, filter);

        let direction = match filter.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        builder.push(" ORDER BY ");
        builder.push(Self::sort_column(filter.sort));
        builder.push(" ");
        builder.push(direction);
        // Tie-break keeps pages disjoint when the sort key repeats
        builder.push(", id ASC");

        builder.push(" LIMIT ").push_bind(filter.page.limit);
        builder.push(" OFFSET ").push_bind(filter.page.row_offset());

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn count(&self, filter: &ProductFilter) -> Result<i64, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM products");
        Self::push_filter(&mut builder, filter);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {}", e)))?;

        Ok(count)
    }
}
