//! Argon2id hashing and verification.
//!
//! The same primitive covers two independent uses: account passwords
//! and stored refresh-token hashes.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use linkvault_core::error::AppError;

/// Handles hashing and verification using Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext using Argon2id with a random salt.
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext against a stored Argon2id hash.
    ///
    /// Never errors: a malformed stored hash verifies as `false`. The
    /// refresh path compares attacker-supplied tokens against stored
    /// hashes, so parse failures must be indistinguishable from
    /// mismatches.
    pub fn verify(&self, hash: &str, plaintext: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
