//! Username Value Object
//!
//! The public handle a user registers under. ASCII alphanumerics only,
//! stored lowercase.
//!
//! ## Invariants
//! - 3 to 25 characters after normalization
//! - `a-z` and `0-9` only (uppercase input is accepted and lowercased)

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum length for a username (in characters)
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum length for a username (in characters)
pub const USERNAME_MAX_LENGTH: usize = 25;

/// Username value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation and case normalization
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let name = raw.into().trim().to_lowercase();

        if name.len() < USERNAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at least {} characters",
                USERNAME_MIN_LENGTH
            )));
        }

        if name.len() > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "Username may only contain letters and digits",
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Username {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Username::new(s)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        assert!(Username::new("ada").is_ok());
        assert!(Username::new("marco99").is_ok());
        assert!(Username::new("a".repeat(USERNAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_username_invalid() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("a".repeat(USERNAME_MAX_LENGTH + 1)).is_err());
        assert!(Username::new("ada lovelace").is_err());
        assert!(Username::new("ada_lovelace").is_err());
        assert!(Username::new("ada!").is_err());
        assert!(Username::new("").is_err());
    }

    #[test]
    fn test_username_case_normalization() {
        let name = Username::new("AdaLovelace").unwrap();
        assert_eq!(name.as_str(), "adalovelace");
    }
}
