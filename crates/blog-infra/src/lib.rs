//! # Blog Infrastructure
//!
//! SeaORM implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - file-backed or in-memory SQLite store
//! - `postgres` (default) - PostgreSQL store

pub mod database;

pub use database::{DatabaseConfig, SeaOrmPostRepository, Store};
