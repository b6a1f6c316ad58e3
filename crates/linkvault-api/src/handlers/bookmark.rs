//! Bookmark CRUD handlers. All access-gated and ownership-checked.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use linkvault_core::error::AppError;
use linkvault_entity::bookmark::{Bookmark, NewBookmark, UpdateBookmark};

use crate::dto::request::{CreateBookmarkRequest, UpdateBookmarkRequest};
use crate::extractors::AccessUser;
use crate::state::AppState;

/// GET /api/bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    principal: AccessUser,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let bookmarks = state.bookmark_store.find_by_user(principal.user_id).await?;
    Ok(Json(bookmarks))
}

/// POST /api/bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    principal: AccessUser,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let bookmark = state
        .bookmark_store
        .create(&NewBookmark {
            user_id: principal.user_id,
            title: req.title,
            description: req.description,
            link: req.link,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// GET /api/bookmarks/{id}
///
/// Lookup is scoped to the owner: a foreign bookmark is
/// indistinguishable from a missing one.
pub async fn get_bookmark(
    State(state): State<AppState>,
    principal: AccessUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Bookmark>, AppError> {
    let bookmark = state
        .bookmark_store
        .find_by_id(id)
        .await?
        .filter(|b| b.user_id == principal.user_id)
        .ok_or_else(|| AppError::not_found(format!("Bookmark {id} not found")))?;

    Ok(Json(bookmark))
}

/// PATCH /api/bookmarks/{id}
pub async fn update_bookmark(
    State(state): State<AppState>,
    principal: AccessUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    check_ownership(&state, id, principal.user_id).await?;

    let update = UpdateBookmark {
        title: req.title,
        description: req.description,
        link: req.link,
    };
    let bookmark = state.bookmark_store.update(id, &update).await?;
    Ok(Json(bookmark))
}

/// DELETE /api/bookmarks/{id}
pub async fn delete_bookmark(
    State(state): State<AppState>,
    principal: AccessUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    check_ownership(&state, id, principal.user_id).await?;

    state.bookmark_store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mutations distinguish missing (404) from foreign (403).
async fn check_ownership(state: &AppState, id: Uuid, user_id: Uuid) -> Result<(), AppError> {
    let bookmark = state
        .bookmark_store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Bookmark {id} not found")))?;

    if bookmark.user_id != user_id {
        return Err(AppError::forbidden("Access to resource denied"));
    }
    Ok(())
}
