//! Store traits sitting between the auth core, the HTTP layer, and
//! persistence.
//!
//! Two implementations exist for each trait: the PostgreSQL repositories
//! in [`crate::repositories`] and the in-memory stores in
//! [`crate::memory`]. Handlers and the auth service only ever see
//! `Arc<dyn UserStore>` / `Arc<dyn BookmarkStore>`.

use async_trait::async_trait;
use uuid::Uuid;

use linkvault_core::result::AppResult;
use linkvault_entity::bookmark::{Bookmark, NewBookmark, UpdateBookmark};
use linkvault_entity::user::{NewUser, UpdateProfile, User};

/// Credential store: one row per user, holding the password hash and at
/// most one refresh-token hash.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Create a user. A duplicate email fails with `ErrorKind::Conflict`
    /// (a detectable condition, not a crash).
    async fn create(&self, user: &NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite the stored refresh-token hash unconditionally.
    ///
    /// Used on signup and signin, where the new session supersedes any
    /// outstanding refresh token.
    async fn set_refresh_hash(&self, id: Uuid, hash: Option<&str>) -> AppResult<()>;

    /// Clear the refresh-token hash only if one is currently set.
    /// A no-op when it is already NULL, so logout is idempotent.
    async fn clear_refresh_hash(&self, id: Uuid) -> AppResult<()>;

    /// Atomically replace the refresh-token hash, but only if the stored
    /// value still equals `expected`. Returns `true` if the swap won.
    ///
    /// This is the rotation step: two concurrent refreshes presenting
    /// the same token both verify against the same stored hash, but only
    /// one of them can observe `expected` at update time.
    async fn swap_refresh_hash(&self, id: Uuid, expected: &str, new: &str) -> AppResult<bool>;

    /// Update profile fields, returning the updated row.
    async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> AppResult<User>;
}

/// Per-user bookmark store. Every query is scoped to the owning user.
#[async_trait]
pub trait BookmarkStore: Send + Sync + 'static {
    /// Create a bookmark.
    async fn create(&self, bookmark: &NewBookmark) -> AppResult<Bookmark>;

    /// List all bookmarks owned by a user, newest first.
    async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>>;

    /// Find a bookmark by primary key, regardless of owner.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Bookmark>>;

    /// Update a bookmark, returning the updated row.
    async fn update(&self, id: Uuid, update: &UpdateBookmark) -> AppResult<Bookmark>;

    /// Delete a bookmark. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}
