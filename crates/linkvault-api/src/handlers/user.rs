//! User self-service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use linkvault_core::error::AppError;
use linkvault_entity::user::UpdateProfile;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::UserResponse;
use crate::extractors::AccessUser;
use crate::state::AppState;

/// GET /api/users/me
pub async fn get_profile(
    State(state): State<AppState>,
    principal: AccessUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_store
        .find_by_id(principal.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user.into()))
}

/// PATCH /api/users/me
pub async fn update_profile(
    State(state): State<AppState>,
    principal: AccessUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let update = UpdateProfile {
        email: req.email,
        first_name: req.first_name,
        last_name: req.last_name,
    };
    let user = state
        .user_store
        .update_profile(principal.user_id, &update)
        .await?;

    Ok(Json(user.into()))
}
