//! # Mercato Infrastructure
//!
//! Concrete implementations of the core repository and storage traits:
//! Postgres via sqlx, and an S3-compatible object store over HTTP.

pub mod database;
pub mod storage;
