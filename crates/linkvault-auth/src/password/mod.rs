//! Password and refresh-token hashing.

pub mod hasher;

pub use hasher::PasswordHasher;
