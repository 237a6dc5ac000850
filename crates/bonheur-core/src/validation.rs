//! Presence checks for user-supplied text

use crate::error::DomainError;

/// Require a field to contain at least one non-whitespace character
pub fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
