//! In-memory repository implementations for testing.
//!
//! All mocks share one [`MemoryStore`] so the payment mock can touch
//! user and product state in the same critical section, mirroring what
//! the SQL transaction does in production. `fail_purchase` simulates a
//! store failure inside the purchase transaction: the call errors and
//! leaves no state behind.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{BankAccount, Payment, Product, User};
use crate::errors::DomainError;
use crate::services::image::ImageStore;

use super::bank_account::BankAccountRepository;
use super::payment::PaymentRepository;
use super::product::{ProductFilter, ProductRepository, ProductSort, SortOrder};
use super::user::UserRepository;

/// Shared backing store for the mock repositories.
#[derive(Default)]
pub struct MemoryStore {
    pub users: RwLock<HashMap<Uuid, User>>,
    pub products: RwLock<HashMap<Uuid, Product>>,
    pub bank_accounts: RwLock<HashMap<Uuid, BankAccount>>,
    pub payments: RwLock<HashMap<Uuid, Payment>>,
    /// When set, `record_purchase` fails without mutating anything
    pub fail_purchase: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

/// Mock user repository
pub struct MemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.store.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.store.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let users = self.store.users.read().await;
        Ok(users.values().any(|u| u.username == username))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.store.users.write().await;

        // The unique constraint backstop
        if users.values().any(|u| u.username == user.username) {
            return Err(DomainError::AlreadyExists("username".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Mock product repository with full filter semantics
pub struct MemoryProductRepository {
    store: Arc<MemoryStore>,
}

impl MemoryProductRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    fn matches(product: &Product, filter: &ProductFilter) -> bool {
        if let Some(owner) = filter.owner {
            if product.user_id != owner {
                return false;
            }
        }
        if !filter.tags.is_empty() && !filter.tags.iter().any(|t| product.tags.contains(t)) {
            return false;
        }
        if let Some(condition) = filter.condition {
            if product.condition != condition {
                return false;
            }
        }
        if let Some((min, max)) = filter.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            if !product.name.contains(search.as_str()) {
                return false;
            }
        }
        true
    }

    fn sort(products: &mut [Product], filter: &ProductFilter) {
        products.sort_by(|a, b| {
            let primary = match filter.sort {
                ProductSort::Id => a.id.cmp(&b.id),
                ProductSort::Price => a.price.cmp(&b.price),
                ProductSort::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            let primary = match filter.order {
                SortOrder::Asc => primary,
                SortOrder::Desc => primary.reverse(),
            };
            // id tie-break keeps ordering deterministic
            primary.then(a.id.cmp(&b.id))
        });
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, DomainError> {
        let products = self.store.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn create(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.store.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.store.products.write().await;
        if !products.contains_key(&product.id) {
            return Err(DomainError::not_found("product"));
        }
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut products = self.store.products.write().await;
        Ok(products.remove(&id).is_some())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError> {
        let products = self.store.products.read().await;
        let mut matching: Vec<Product> = products
            .values()
            .filter(|p| Self::matches(p, filter))
            .cloned()
            .collect();
        Self::sort(&mut matching, filter);

        let offset = filter.page.row_offset().max(0) as usize;
        let limit = filter.page.limit.max(0) as usize;
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<i64, DomainError> {
        let products = self.store.products.read().await;
        Ok(products.values().filter(|p| Self::matches(p, filter)).count() as i64)
    }
}

/// Mock bank account repository
pub struct MemoryBankAccountRepository {
    store: Arc<MemoryStore>,
}

impl MemoryBankAccountRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BankAccountRepository for MemoryBankAccountRepository {
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<BankAccount>, DomainError> {
        let accounts = self.store.bank_accounts.read().await;
        let mut owned: Vec<BankAccount> = accounts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|a| a.id);
        Ok(owned)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BankAccount>, DomainError> {
        let accounts = self.store.bank_accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: BankAccount) -> Result<BankAccount, DomainError> {
        let mut accounts = self.store.bank_accounts.write().await;
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: BankAccount) -> Result<BankAccount, DomainError> {
        let mut accounts = self.store.bank_accounts.write().await;
        if !accounts.contains_key(&account.id) {
            return Err(DomainError::not_found("bank account"));
        }
        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.store.bank_accounts.write().await;
        Ok(accounts.remove(&id).is_some())
    }
}

/// Mock payment repository
pub struct MemoryPaymentRepository {
    store: Arc<MemoryStore>,
}

impl MemoryPaymentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn seller_for_purchase(
        &self,
        bank_account_id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<Uuid>, DomainError> {
        let accounts = self.store.bank_accounts.read().await;
        let products = self.store.products.read().await;

        let account_owner = accounts.get(&bank_account_id).map(|a| a.user_id);
        let product_owner = products.get(&product_id).map(|p| p.user_id);

        match (account_owner, product_owner) {
            (Some(a), Some(p)) if a == p => Ok(Some(a)),
            _ => Ok(None),
        }
    }

    async fn record_purchase(
        &self,
        payment: Payment,
        seller_id: Uuid,
    ) -> Result<Payment, DomainError> {
        if self.store.fail_purchase.load(Ordering::SeqCst) {
            // Models a transaction that rolled back: nothing mutated
            return Err(DomainError::Database("simulated purchase failure".to_string()));
        }

        let mut users = self.store.users.write().await;
        let mut products = self.store.products.write().await;
        let mut payments = self.store.payments.write().await;

        let seller = users
            .get_mut(&seller_id)
            .ok_or_else(|| DomainError::Database("seller row missing".to_string()))?;
        let product = products
            .get_mut(&payment.product_id)
            .ok_or_else(|| DomainError::Database("product row missing".to_string()))?;

        seller.product_sold_total += payment.quantity;
        product.purchase_count += payment.quantity;
        payments.insert(payment.id, payment.clone());

        Ok(payment)
    }
}

/// Mock image store recording uploads and answering with a fake URL
#[derive(Default)]
pub struct MemoryImageStore {
    pub uploads: RwLock<Vec<String>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn store(&self, filename: &str, _bytes: Vec<u8>) -> Result<String, DomainError> {
        let mut uploads = self.uploads.write().await;
        uploads.push(filename.to_string());
        Ok(format!("https://images.test/{filename}"))
    }
}
