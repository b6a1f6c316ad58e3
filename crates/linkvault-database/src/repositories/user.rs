//! PostgreSQL user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use linkvault_core::error::{AppError, ErrorKind};
use linkvault_core::result::AppResult;
use linkvault_entity::user::{NewUser, UpdateProfile, User};

use crate::store::UserStore;

/// Repository for user rows, including the refresh-hash slot the auth
/// core rotates.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &NewUser) -> AppResult<User> {
        // users_email_key is a unique index on LOWER(email); violations
        // carry the index name in the constraint field.
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn set_refresh_hash(&self, id: Uuid, hash: Option<&str>) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET refresh_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(hash)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update refresh hash", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    async fn clear_refresh_hash(&self, id: Uuid) -> AppResult<()> {
        // Conditional on the slot being set; clearing an already-NULL
        // slot is an idempotent no-op, not an error.
        sqlx::query(
            "UPDATE users SET refresh_hash = NULL, updated_at = NOW() \
             WHERE id = $1 AND refresh_hash IS NOT NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear refresh hash", e))?;
        Ok(())
    }

    async fn swap_refresh_hash(&self, id: Uuid, expected: &str, new: &str) -> AppResult<bool> {
        // Single conditional UPDATE: row-level atomicity guarantees at
        // most one concurrent caller observes `expected` and wins.
        let result = sqlx::query(
            "UPDATE users SET refresh_hash = $3, updated_at = NOW() \
             WHERE id = $1 AND refresh_hash = $2",
        )
        .bind(id)
        .bind(expected)
        .bind(new)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rotate refresh hash", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = COALESCE($2, email), \
                              first_name = COALESCE($3, first_name), \
                              last_name = COALESCE($4, last_name), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.email)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }
}
