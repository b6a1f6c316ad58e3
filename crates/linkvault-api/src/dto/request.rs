//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup and signin request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Update profile request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
}

/// Create bookmark request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    /// Short title.
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The URL to save.
    #[validate(url(message = "A valid URL is required"))]
    pub link: String,
}

/// Partial bookmark update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookmarkRequest {
    /// New title.
    #[validate(length(min = 1, max = 255, message = "Title must not be empty"))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New URL.
    #[validate(url(message = "A valid URL is required"))]
    pub link: Option<String>,
}
