//! JWT claims structure shared by access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload.
///
/// Access and refresh tokens carry the *same* claim set; what
/// distinguishes them is the signing secret selected by [`TokenKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: Uuid,
    /// Email at the time of token issuance.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Selects which of the two signing secrets (and which TTL) applies.
///
/// A small tagged variant rather than two near-identical types: the two
/// token kinds share structure and differ only in secret and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived token authorizing ordinary API calls.
    Access,
    /// Long-lived token whose sole purpose is obtaining a new pair.
    Refresh,
}
