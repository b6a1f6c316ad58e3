//! Request extractors.

pub mod auth;

pub use auth::{AccessUser, RefreshUser};
