//! PostgreSQL bookmark repository.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use linkvault_core::error::{AppError, ErrorKind};
use linkvault_core::result::AppResult;
use linkvault_entity::bookmark::{Bookmark, NewBookmark, UpdateBookmark};

use crate::store::BookmarkStore;

/// Repository for bookmark CRUD.
#[derive(Debug, Clone)]
pub struct BookmarkRepository {
    pool: PgPool,
}

impl BookmarkRepository {
    /// Create a new bookmark repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for BookmarkRepository {
    async fn create(&self, bookmark: &NewBookmark) -> AppResult<Bookmark> {
        sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (user_id, title, description, link) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(bookmark.user_id)
        .bind(&bookmark.title)
        .bind(&bookmark.description)
        .bind(&bookmark.link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create bookmark", e))
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>> {
        sqlx::query_as::<_, Bookmark>(
            "SELECT * FROM bookmarks WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookmarks", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bookmark>> {
        sqlx::query_as::<_, Bookmark>("SELECT * FROM bookmarks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find bookmark", e))
    }

    async fn update(&self, id: Uuid, update: &UpdateBookmark) -> AppResult<Bookmark> {
        sqlx::query_as::<_, Bookmark>(
            "UPDATE bookmarks SET title = COALESCE($2, title), \
                                  description = COALESCE($3, description), \
                                  link = COALESCE($4, link), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.link)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update bookmark", e))?
        .ok_or_else(|| AppError::not_found(format!("Bookmark {id} not found")))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete bookmark", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
