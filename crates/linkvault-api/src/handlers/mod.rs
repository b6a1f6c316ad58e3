//! HTTP request handlers.

pub mod auth;
pub mod bookmark;
pub mod health;
pub mod user;
