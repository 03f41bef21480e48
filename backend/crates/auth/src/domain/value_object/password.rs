//! Password Value Objects
//!
//! Domain wrappers around `platform::password`. `RawPassword` carries user
//! input (zeroized on drop), `PasswordHash` carries the Argon2id PHC string
//! that goes to storage.
//!
//! `PasswordHash` is write-only from the API's perspective: it is excluded
//! from every outbound representation, and the PHC string leaves this type
//! only toward the database and the refresh-token secret derivation.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with policy validation
    ///
    /// Length bounds and character checks live in `platform::password`;
    /// policy violations surface as 400-level `AppError`s.
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw)
            .map_err(|e| AppError::bad_request(e.to_string()))?;
        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (for storage)
// ============================================================================

/// Hashed password for database storage (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Create by hashing a raw password
    ///
    /// CPU-heavy; callers in async context run this under
    /// `tokio::task::spawn_blocking`.
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw.inner().hash().map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            PasswordHashError::InvalidHashFormat => {
                AppError::internal("Unexpected error during password hashing")
            }
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage or secret derivation
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// CPU-heavy, same `spawn_blocking` rule as [`PasswordHash::from_raw`].
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(raw.inner())
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
