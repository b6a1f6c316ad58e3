//! # linkvault-entity
//!
//! Domain models for LinkVault. Plain data types with serde and sqlx
//! derives; no behavior beyond small accessors.

pub mod bookmark;
pub mod user;

pub use bookmark::{Bookmark, NewBookmark, UpdateBookmark};
pub use user::{NewUser, UpdateProfile, User};
