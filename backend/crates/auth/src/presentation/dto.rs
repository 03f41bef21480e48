//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::login::SessionOutput;
use crate::application::tokens::TokenPair;
use crate::domain::entity::user::User;

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Register
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub country: String,
}

// ============================================================================
// Refresh
// ============================================================================

/// Refresh request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// ============================================================================
// Update
// ============================================================================

/// Partial profile update request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Token pair response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

/// Outbound user representation
///
/// This is the ONLY mapping from [`User`] to a serializable shape, and it
/// has no password field; the hash cannot leak through this boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image: String,
    pub verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            image: user.image,
            verified: user.verified,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
            country: user.country.map(|c| c.as_str().to_string()),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login / refresh response: tokens plus the authenticated user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub tokens: TokenPairResponse,
    pub authenticated_user: UserResponse,
}

impl From<SessionOutput> for SessionResponse {
    fn from(output: SessionOutput) -> Self {
        Self {
            tokens: output.tokens.into(),
            authenticated_user: output.user.into(),
        }
    }
}

/// Response wrapper for the current-user endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUserResponse {
    pub authenticated_user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::NewUser;
    use crate::domain::value_object::{
        email::Email, password::{PasswordHash, RawPassword}, user_id::UserId, username::Username,
    };

    #[test]
    fn test_user_response_excludes_password() {
        let raw = RawPassword::new("longpassword1".to_string()).unwrap();
        let hash = PasswordHash::from_raw(&raw).unwrap();
        let phc = hash.as_phc_string().to_string();

        let new_user = NewUser::new(
            Username::new("ada").unwrap(),
            Email::new("ada@x.com").unwrap(),
            hash,
        );
        let user = User {
            user_id: UserId::from_i64(1),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            image: new_user.image,
            verified: new_user.verified,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            bio: new_user.bio,
            country: new_user.country,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["username"], "ada");
        assert_eq!(json["email"], "ada@x.com");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(!json.to_string().contains(&phc));
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(TokenPairResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
        })
        .unwrap();

        assert_eq!(json["accessToken"], "a");
        assert_eq!(json["refreshToken"], "r");
    }

    #[test]
    fn test_update_request_defaults_to_no_changes() {
        let patch: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.first_name.is_none());
        assert!(patch.password.is_none());
    }
}
