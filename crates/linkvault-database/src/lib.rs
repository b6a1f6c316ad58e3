//! # linkvault-database
//!
//! Persistence layer for LinkVault: the `UserStore`/`BookmarkStore`
//! traits, their PostgreSQL repository implementations, in-memory
//! implementations for single-node and test use, connection pool
//! management, and the migration runner.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{BookmarkStore, UserStore};
