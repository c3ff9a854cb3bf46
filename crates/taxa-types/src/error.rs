//! Input validation errors raised before any storage call.

use thiserror::Error;

use crate::path::normalize;

/// Errors produced while validating caller-supplied fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A required field was missing or empty after trimming.
    #[error("{field} is required")]
    EmptyField { field: &'static str },
}

/// Validate that a required field is non-empty, returning its normalized
/// (trimmed, lowercased) form.
///
/// # Examples
///
/// ```
/// use taxa_types::require_non_empty;
///
/// assert_eq!(require_non_empty("category", " Electronics ").unwrap(), "electronics");
/// assert!(require_non_empty("category", "   ").is_err());
/// ```
pub fn require_non_empty(field: &'static str, value: &str) -> Result<String, TypeError> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        return Err(TypeError::EmptyField { field });
    }
    Ok(normalized)
}
