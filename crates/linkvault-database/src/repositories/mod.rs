//! PostgreSQL repository implementations of the store traits.

pub mod bookmark;
pub mod user;

pub use bookmark::BookmarkRepository;
pub use user::UserRepository;
