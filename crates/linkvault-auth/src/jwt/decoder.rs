//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use linkvault_core::config::auth::AuthConfig;
use linkvault_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// Validates JWT tokens against the secret of the requested kind.
///
/// A token signed with the other kind's secret fails signature
/// verification, so an access token can never pass as a refresh token
/// (or vice versa) even though the claim sets are identical.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key for verifying access tokens.
    access_key: DecodingKey,
    /// HMAC key for verifying refresh tokens.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token of the given kind.
    ///
    /// Fails with `Unauthorized` on bad signature (including a token of
    /// the other kind), malformed input, or expiry.
    pub fn decode(&self, token: &str, kind: TokenKind) -> Result<Claims, AppError> {
        let key = match kind {
            TokenKind::Access => &self.access_key,
            TokenKind::Refresh => &self.refresh_key,
        };

        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }
}
