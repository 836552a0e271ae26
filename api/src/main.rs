//! Server binary: configuration, pool, wiring, HTTP listener.

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mercato_api::app::create_app;
use mercato_api::state::AppState;
use mercato_core::services::{
    AuthService, BankAccountService, ImageStore, PaymentService, ProductService, TokenService,
};
use mercato_infra::database::{
    create_pool, run_migrations, PgBankAccountRepository, PgPaymentRepository,
    PgProductRepository, PgUserRepository,
};
use mercato_infra::storage::HttpImageStore;
use mercato_shared::config::{AuthConfig, DatabaseConfig, ServerConfig, StorageConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();
    let auth_config = AuthConfig::from_env();
    let storage_config = StorageConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let products = Arc::new(PgProductRepository::new(pool.clone()));
    let bank_accounts = Arc::new(PgBankAccountRepository::new(pool.clone()));
    let payments = Arc::new(PgPaymentRepository::new(pool));

    let tokens = Arc::new(TokenService::new(&auth_config));
    let images: Arc<dyn ImageStore> = Arc::new(HttpImageStore::new(storage_config));

    let state = web::Data::new(AppState {
        auth: AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            auth_config.bcrypt_cost,
        ),
        products: ProductService::new(
            Arc::clone(&products),
            Arc::clone(&users),
            Arc::clone(&bank_accounts),
        ),
        bank_accounts: BankAccountService::new(bank_accounts),
        payments: PaymentService::new(payments),
        tokens,
        images,
    });

    let bind_address = server_config.bind_address();
    info!(address = %bind_address, "starting mercato api");

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
