//! Bookmark entity.

pub mod model;

pub use model::{Bookmark, NewBookmark, UpdateBookmark};
