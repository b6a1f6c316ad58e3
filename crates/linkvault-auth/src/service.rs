//! Auth orchestration: signup, signin, refresh, logout.
//!
//! The "session" concept is entirely encoded in the user row's
//! `refresh_hash` slot: set means one refresh token is outstanding,
//! NULL means none. Rotation and revocation are updates to that slot.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use linkvault_core::error::{AppError, ErrorKind};
use linkvault_core::result::AppResult;
use linkvault_database::store::UserStore;
use linkvault_entity::user::NewUser;

use crate::jwt::encoder::{JwtEncoder, TokenPair};
use crate::password::PasswordHasher;

/// Orchestrates credential verification, dual-token issuance, and the
/// rotation/revocation protocol over the credential store.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store.
    user_store: Arc<dyn UserStore>,
    /// Argon2 hasher, shared by passwords and refresh-token hashes.
    hasher: PasswordHasher,
    /// Dual-secret token issuer.
    encoder: JwtEncoder,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(user_store: Arc<dyn UserStore>, hasher: PasswordHasher, encoder: JwtEncoder) -> Self {
        Self {
            user_store,
            hasher,
            encoder,
        }
    }

    /// Registers a new user and signs them in.
    ///
    /// A store-level uniqueness conflict becomes `CredentialsTaken`
    /// without saying which field collided; other store failures
    /// propagate unmodified.
    pub async fn signup(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let password_hash = self.hasher.hash(password)?;

        let user = self
            .user_store
            .create(&NewUser {
                email: email.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => AppError::credentials_taken(),
                _ => e,
            })?;

        info!(user_id = %user.id, "User registered");
        self.issue_and_persist(user.id, &user.email).await
    }

    /// Verifies credentials and issues a fresh token pair.
    ///
    /// Unknown email and wrong password fail identically so accounts
    /// cannot be enumerated. A successful signin overwrites the stored
    /// refresh hash, silently revoking any previously outstanding
    /// refresh token (single-slot model).
    pub async fn signin(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let user = self
            .user_store
            .find_by_email(email)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.hasher.verify(&user.password_hash, password) {
            warn!(user_id = %user.id, "Signin with wrong password");
            return Err(AppError::invalid_credentials());
        }

        info!(user_id = %user.id, "Signin successful");
        self.issue_and_persist(user.id, &user.email).await
    }

    /// Exchanges a valid refresh token for a new pair, rotating the
    /// stored hash.
    ///
    /// The caller is pre-authenticated by the refresh extractor, so the
    /// token's signature and expiry are already verified. The stored
    /// hash is replaced via compare-and-swap keyed on the value observed
    /// during verification; losing the swap means a concurrent refresh
    /// (or signin/logout) got there first, and this call fails
    /// `Unauthorized` rather than reusing the old token's privileges.
    pub async fn refresh(&self, user_id: Uuid, presented_token: &str) -> AppResult<TokenPair> {
        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        let Some(current_hash) = user.refresh_hash else {
            // Revoked by logout, or never issued.
            return Err(AppError::unauthorized("Refresh token has been revoked"));
        };

        if !self.hasher.verify(&current_hash, presented_token) {
            warn!(user_id = %user.id, "Refresh with stale or foreign token");
            return Err(AppError::unauthorized("Refresh token invalid"));
        }

        let pair = self.encoder.issue_pair(user.id, &user.email)?;
        let new_hash = self.hasher.hash(&pair.refresh_token)?;

        let won = self
            .user_store
            .swap_refresh_hash(user.id, &current_hash, &new_hash)
            .await?;
        if !won {
            warn!(user_id = %user.id, "Lost refresh rotation race");
            return Err(AppError::unauthorized("Refresh token invalid"));
        }

        info!(user_id = %user.id, "Refresh token rotated");
        Ok(pair)
    }

    /// Revokes the outstanding refresh token, if any.
    ///
    /// Idempotent. Outstanding access tokens are unaffected and remain
    /// valid until natural expiry; logout only prevents further
    /// refreshing.
    pub async fn logout(&self, user_id: Uuid) -> AppResult<()> {
        self.user_store.clear_refresh_hash(user_id).await?;
        info!(user_id = %user_id, "Logged out");
        Ok(())
    }

    /// Issues a token pair and persists the refresh hash as one unit.
    ///
    /// A persist failure propagates; tokens are never handed out with a
    /// half-applied session state.
    async fn issue_and_persist(&self, user_id: Uuid, email: &str) -> AppResult<TokenPair> {
        let pair = self.encoder.issue_pair(user_id, email)?;
        let refresh_hash = self.hasher.hash(&pair.refresh_token)?;

        self.user_store
            .set_refresh_hash(user_id, Some(&refresh_hash))
            .await?;

        Ok(pair)
    }
}
