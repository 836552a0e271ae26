//! Shared types and configuration for the Mercato backend.
//!
//! This crate holds the pieces every other workspace member depends on:
//! environment-driven configuration structs and the common API response
//! envelope and pagination types.

pub mod config;
pub mod types;
