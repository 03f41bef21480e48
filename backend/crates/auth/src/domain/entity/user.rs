//! User Entity
//!
//! The single identity record of the system: credentials, verification
//! state, and profile fields together, keyed by a database-assigned id.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    country::CountryCode, email::Email, password::PasswordHash, user_id::UserId,
    username::Username,
};

/// User entity (persisted)
///
/// `password_hash` never appears in outbound representations; the DTO layer
/// drops it when mapping.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Unique handle (lowercase)
    pub username: Username,
    /// Unique contact address (lowercase)
    pub email: Email,
    /// Argon2id PHC string
    pub password_hash: PasswordHash,
    /// Avatar URL (set by the asset subsystem; empty until then)
    pub image: String,
    /// Whether the account has been verified
    pub verified: bool,
    /// Profile: first name
    pub first_name: Option<String>,
    /// Profile: last name
    pub last_name: Option<String>,
    /// Profile: short biography
    pub bio: Option<String>,
    /// Profile: ISO 3166-1 alpha-3 country
    pub country: Option<CountryCode>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Set first name
    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = Some(first_name);
        self.touch();
    }

    /// Set last name
    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name = Some(last_name);
        self.touch();
    }

    /// Set biography
    pub fn set_bio(&mut self, bio: String) {
        self.bio = Some(bio);
        self.touch();
    }

    /// Set country
    pub fn set_country(&mut self, country: CountryCode) {
        self.country = Some(country);
        self.touch();
    }

    /// Replace the stored password hash
    ///
    /// Invariant side effect: the refresh-token secret is derived from this
    /// hash, so every refresh token issued before this call stops verifying
    /// once the change is persisted.
    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// User record that has not been persisted yet
///
/// The store assigns the id and returns the full [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub image: String,
    pub verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub country: Option<CountryCode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new unverified user record
    pub fn new(username: Username, email: Email, password_hash: PasswordHash) -> Self {
        let now = Utc::now();
        Self {
            username,
            email,
            password_hash,
            image: String::new(),
            verified: false,
            first_name: None,
            last_name: None,
            bio: None,
            country: None,
            created_at: now,
            updated_at: now,
        }
    }
}
