//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use linkvault_auth::jwt::decoder::JwtDecoder;
use linkvault_auth::service::AuthService;
use linkvault_core::config::AppConfig;
use linkvault_database::store::{BookmarkStore, UserStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks. Stores
/// are held behind their traits so the same router runs over the
/// PostgreSQL repositories or the in-memory stores.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential store.
    pub user_store: Arc<dyn UserStore>,
    /// Bookmark store.
    pub bookmark_store: Arc<dyn BookmarkStore>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Auth orchestration service.
    pub auth_service: Arc<AuthService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("auth_service", &self.auth_service)
            .finish()
    }
}
