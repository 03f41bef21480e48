//! Country Code Value Object
//!
//! ISO 3166-1 alpha-3 country code, stored uppercase.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 alpha-3 country code
///
/// Shape validation only (three ASCII letters); the full ISO list is not
/// embedded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a new country code with validation
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let code = raw.into().trim().to_uppercase();

        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::bad_request(
                "Country must be an ISO 3166-1 alpha-3 code",
            ));
        }

        Ok(Self(code))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
