//! In-memory store implementations.
//!
//! Functionally equivalent to the PostgreSQL repositories, backed by
//! lock-guarded maps. Suitable for single-node demos and the test
//! suites; the refresh-hash compare-and-swap runs under the write lock,
//! preserving the same winner-takes-all semantics as the conditional
//! UPDATE.

pub mod bookmark;
pub mod user;

pub use bookmark::MemoryBookmarkStore;
pub use user::MemoryUserStore;
