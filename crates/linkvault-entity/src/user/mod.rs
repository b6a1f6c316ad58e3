//! User entity.

pub mod model;

pub use model::{NewUser, UpdateProfile, User};
