//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Absent fields deserialize as empty strings so they surface as validation
//! errors rather than body parse errors.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject values that contain only whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Share a new happiness moment
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub author: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub body: String,
}

/// Comment on an existing post
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub author: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub body: String,
}
