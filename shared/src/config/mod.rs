//! Configuration modules loaded from the environment at startup.
//!
//! Configuration is read once in `main` and passed down by value;
//! nothing re-reads the environment after startup.

mod auth;
mod database;
mod server;
mod storage;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;
