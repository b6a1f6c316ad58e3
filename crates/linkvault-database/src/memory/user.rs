//! In-memory user store using a Tokio RwLock for single-node use.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use linkvault_core::error::AppError;
use linkvault_core::result::AppResult;
use linkvault_entity::user::{NewUser, UpdateProfile, User};

use crate::store::UserStore;

/// In-memory user store keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let mut users = self.users.write().await;

        let taken = users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email));
        if taken {
            return Err(AppError::conflict("Email already registered"));
        }

        let now = Utc::now();
        let row = User {
            id: Uuid::new_v4(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            refresh_hash: None,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn set_refresh_hash(&self, id: Uuid, hash: Option<&str>) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.refresh_hash = hash.map(String::from);
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn clear_refresh_hash(&self, id: Uuid) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(&id) {
            if user.refresh_hash.is_some() {
                user.refresh_hash = None;
                user.updated_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn swap_refresh_hash(&self, id: Uuid, expected: &str, new: &str) -> AppResult<bool> {
        // Compare and swap under the write lock; only one concurrent
        // caller can observe `expected`.
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(&id) else {
            return Ok(false);
        };
        if user.refresh_hash.as_deref() != Some(expected) {
            return Ok(false);
        }
        user.refresh_hash = Some(new.to_string());
        user.updated_at = Utc::now();
        Ok(true)
    }

    async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> AppResult<User> {
        let mut users = self.users.write().await;

        if let Some(email) = &update.email {
            let taken = users
                .values()
                .any(|u| u.id != id && u.email.eq_ignore_ascii_case(email));
            if taken {
                return Err(AppError::conflict("Email already registered"));
            }
        }

        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &update.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &update.last_name {
            user.last_name = Some(last_name.clone());
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}
