//! Bookmark entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved link owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    /// Unique bookmark identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The saved URL.
    pub link: String,
    /// When the bookmark was created.
    pub created_at: DateTime<Utc>,
    /// When the bookmark was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a bookmark.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    /// Owning user.
    pub user_id: Uuid,
    /// Short title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The saved URL.
    pub link: String,
}

/// Partial update of an existing bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookmark {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New URL.
    pub link: Option<String>,
}
