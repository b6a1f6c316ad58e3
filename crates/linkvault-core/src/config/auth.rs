//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token signing and lifetime configuration.
///
/// Access and refresh tokens are signed with *distinct* secrets. That
/// split is what makes an access token structurally unable to pass as a
/// refresh token: the claims are identical, the signature is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing access tokens (HMAC-SHA256).
    pub access_secret: String,
    /// Secret key for signing refresh tokens (HMAC-SHA256).
    pub refresh_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
}

impl AuthConfig {
    /// Checks the secret invariants at startup: neither secret may be
    /// empty, and they may not be shared between the two token kinds.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(AppError::configuration(
                "Token signing secrets must not be empty",
            ));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "Access and refresh tokens must use distinct signing secrets",
            ));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    7
}
