//! Auth handlers: signup, signin, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use linkvault_core::error::AppError;

use crate::dto::request::CredentialsRequest;
use crate::dto::response::TokenResponse;
use crate::extractors::{AccessUser, RefreshUser};
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pair = state.auth_service.signup(&req.email, &req.password).await?;
    Ok((StatusCode::CREATED, Json(pair.into())))
}

/// POST /api/auth/signin
pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pair = state.auth_service.signin(&req.email, &req.password).await?;
    Ok(Json(pair.into()))
}

/// POST /api/auth/refresh
///
/// Gated by the refresh authenticator; the auth core then verifies the
/// presented token against the stored hash and rotates it.
pub async fn refresh(
    State(state): State<AppState>,
    principal: RefreshUser,
) -> Result<Json<TokenResponse>, AppError> {
    let pair = state
        .auth_service
        .refresh(principal.user_id, &principal.refresh_token)
        .await?;
    Ok(Json(pair.into()))
}

/// POST /api/auth/logout
///
/// Gated by the access authenticator. Revokes refresh capability only;
/// the presented access token stays valid until natural expiry.
pub async fn logout(
    State(state): State<AppState>,
    principal: AccessUser,
) -> Result<StatusCode, AppError> {
    state.auth_service.logout(principal.user_id).await?;
    Ok(StatusCode::OK)
}
