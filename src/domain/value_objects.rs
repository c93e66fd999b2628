//! Domain value objects - Immutable objects that describe aspects of the domain

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Macro to implement common traits for string wrapper types
macro_rules! impl_string_wrapper {
    ($type:ident) => {
        impl From<String> for $type {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $type {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Opaque handle to a display image (icon, background, goal badge)
///
/// The core never loads or interprets the handle; the presentation layer
/// resolves it to an actual image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(String);

impl ImageHandle {
    pub fn new(location: String) -> Self {
        Self(location)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_string_wrapper!(ImageHandle);

/// Return `value` as an owned string if it contains a non-whitespace character
pub(crate) fn require_non_blank(value: impl Into<String>, what: &str) -> Result<String, DomainError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!("{what} cannot be blank")));
    }
    Ok(value)
}

/// Return `amount` if it is at least 1
pub(crate) fn require_positive(amount: i32, what: &str) -> Result<i32, DomainError> {
    if amount < 1 {
        return Err(DomainError::invalid_argument(format!(
            "{what} cannot be less than 1, got {amount}"
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_blank() {
        assert!(require_non_blank("   \t", "Title").is_err());
        assert_eq!(require_non_blank(" x ", "Title").unwrap(), " x ");
    }

    #[test]
    fn zero_is_not_positive() {
        assert!(require_positive(0, "Gold").is_err());
        assert!(require_positive(-3, "Gold").is_err());
        assert_eq!(require_positive(1, "Gold").unwrap(), 1);
    }

    #[test]
    fn image_handle_displays_its_location() {
        let handle = ImageHandle::from("images/icons/story_icon.png");
        assert_eq!(handle.to_string(), "images/icons/story_icon.png");
        assert_eq!(handle.as_str(), "images/icons/story_icon.png");
    }
}
