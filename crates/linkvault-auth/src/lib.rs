//! # linkvault-auth
//!
//! Authentication core for LinkVault.
//!
//! ## Modules
//!
//! - `jwt`: dual-secret JWT creation and validation
//! - `password`: Argon2id hashing for passwords and refresh tokens
//! - `service`: signup/signin/refresh/logout orchestration and the
//!   refresh-token rotation protocol

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenKind, TokenPair};
pub use password::PasswordHasher;
pub use service::AuthService;
