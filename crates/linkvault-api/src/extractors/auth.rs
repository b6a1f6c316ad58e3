//! Bearer-token extractors, the two request authenticators.
//!
//! `AccessUser` and `RefreshUser` share the same shape (pull the bearer
//! token, verify it against one of the two secrets, produce a typed
//! principal) and differ only in which secret applies and in the
//! refresh variant's extra user-existence check. Both are pure
//! verification gates: they never mutate stored state. The principal is
//! passed to handlers by value; there is no ambient request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use linkvault_auth::jwt::claims::TokenKind;
use linkvault_core::error::AppError;

use crate::state::AppState;

/// Principal extracted from a verified access token.
#[derive(Debug, Clone)]
pub struct AccessUser {
    /// Authenticated user ID (`sub` claim).
    pub user_id: Uuid,
    /// Email claim.
    pub email: String,
}

/// Principal extracted from a verified refresh token.
///
/// Carries the raw presented token so the auth core can verify it
/// against the stored hash and rotate it. The email comes from the
/// freshly loaded user row; the row's hash columns never leave the
/// store layer.
#[derive(Debug, Clone)]
pub struct RefreshUser {
    /// Authenticated user ID (`sub` claim).
    pub user_id: Uuid,
    /// Email from the current user row.
    pub email: String,
    /// The presented refresh token, verbatim.
    pub refresh_token: String,
}

impl FromRequestParts<AppState> for AccessUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode(token, TokenKind::Access)?;

        Ok(Self {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

impl FromRequestParts<AppState> for RefreshUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode(token, TokenKind::Refresh)?;

        // The extra check of this variant: the subject must still exist.
        let user = state
            .user_store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        Ok(Self {
            user_id: user.id,
            email: user.email,
            refresh_token: token.to_string(),
        })
    }
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
}
