//! In-memory bookmark store using a Tokio RwLock for single-node use.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use linkvault_core::error::AppError;
use linkvault_core::result::AppResult;
use linkvault_entity::bookmark::{Bookmark, NewBookmark, UpdateBookmark};

use crate::store::BookmarkStore;

/// In-memory bookmark store keyed by bookmark id.
#[derive(Debug, Clone, Default)]
pub struct MemoryBookmarkStore {
    bookmarks: Arc<RwLock<HashMap<Uuid, Bookmark>>>,
}

impl MemoryBookmarkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn create(&self, bookmark: &NewBookmark) -> AppResult<Bookmark> {
        let now = Utc::now();
        let row = Bookmark {
            id: Uuid::new_v4(),
            user_id: bookmark.user_id,
            title: bookmark.title.clone(),
            description: bookmark.description.clone(),
            link: bookmark.link.clone(),
            created_at: now,
            updated_at: now,
        };
        self.bookmarks.write().await.insert(row.id, row.clone());
        Ok(row)
    }

    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>> {
        let mut rows: Vec<Bookmark> = self
            .bookmarks
            .read()
            .await
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bookmark>> {
        Ok(self.bookmarks.read().await.get(&id).cloned())
    }

    async fn update(&self, id: Uuid, update: &UpdateBookmark) -> AppResult<Bookmark> {
        let mut bookmarks = self.bookmarks.write().await;
        let bookmark = bookmarks
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Bookmark {id} not found")))?;
        if let Some(title) = &update.title {
            bookmark.title = title.clone();
        }
        if let Some(description) = &update.description {
            bookmark.description = Some(description.clone());
        }
        if let Some(link) = &update.link {
            bookmark.link = link.clone();
        }
        bookmark.updated_at = Utc::now();
        Ok(bookmark.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.bookmarks.write().await.remove(&id).is_some())
    }
}
