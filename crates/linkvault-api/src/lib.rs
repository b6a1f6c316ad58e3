//! # linkvault-api
//!
//! HTTP API layer for LinkVault built on Axum.
//!
//! Provides the REST endpoints, bearer-token extractors, DTOs, request
//! logging middleware, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
