//! Token Issuance and Verification
//!
//! Mints and checks the two token kinds of the system:
//!
//! - **Access tokens** are signed with the static process-wide secret and
//!   carry `{sub, username, email}`.
//! - **Refresh tokens** are signed with a per-user derived secret: the
//!   static secret concatenated with the user's *current* password-hash PHC
//!   string. Invariant: persisting a new password hash changes the derived
//!   secret, so every refresh token issued before the change fails
//!   verification. This is the system's only revocation mechanism; no token
//!   is ever stored.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id
    pub sub: i64,
    pub username: String,
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Refresh token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// User id
    pub sub: i64,
    pub email: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// An access/refresh token pair as returned to clients
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Token issuing and verification service
#[derive(Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Signing key for refresh tokens: static secret ++ current password hash
    fn derived_refresh_secret(&self, user: &User) -> Vec<u8> {
        let mut secret = self.config.token_secret.as_bytes().to_vec();
        secret.extend_from_slice(user.password_hash.as_phc_string().as_bytes());
        secret
    }

    /// Issue a short-lived access token for the user
    pub fn issue_access_token(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.config.access_token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid access token TTL: {e}")))?;

        let claims = AccessClaims {
            sub: user.user_id.as_i64(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(platform::token::sign(
            &claims,
            self.config.token_secret.as_bytes(),
        )?)
    }

    /// Issue a refresh token for the user, keyed to the current password hash
    pub fn issue_refresh_token(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let ttl = chrono::Duration::from_std(self.config.refresh_token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid refresh token TTL: {e}")))?;

        let claims = RefreshClaims {
            sub: user.user_id.as_i64(),
            email: user.email.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        Ok(platform::token::sign(
            &claims,
            &self.derived_refresh_secret(user),
        )?)
    }

    /// Issue a token pair
    ///
    /// The access token is always freshly minted. When `existing_refresh` is
    /// supplied it is passed through verbatim; rotation of the refresh token
    /// is not forced on every access-token refresh.
    pub fn issue_pair(
        &self,
        user: &User,
        existing_refresh: Option<String>,
    ) -> AuthResult<TokenPair> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = match existing_refresh {
            Some(token) => token,
            None => self.issue_refresh_token(user)?,
        };

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify an access token's signature and expiry against the static secret
    pub fn verify_access(&self, token: &str) -> AuthResult<AccessClaims> {
        Ok(platform::token::verify(
            token,
            self.config.token_secret.as_bytes(),
        )?)
    }

    /// Extract the subject id from a refresh token WITHOUT verification
    ///
    /// Only the token's shape is trusted here. The caller must resolve the
    /// subject to a user and then call [`TokenService::verify_refresh`] with
    /// that user before acting on the token.
    pub fn decode_refresh_subject(&self, token: &str) -> AuthResult<UserId> {
        let claims: RefreshClaims = platform::token::decode_unverified(token)?;
        Ok(UserId::from_i64(claims.sub))
    }

    /// Verify a refresh token against the user's current derived secret
    pub fn verify_refresh(&self, token: &str, user: &User) -> AuthResult<RefreshClaims> {
        Ok(platform::token::verify(
            token,
            &self.derived_refresh_secret(user),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::NewUser;
    use crate::domain::value_object::{
        email::Email, password::{PasswordHash, RawPassword}, username::Username,
    };

    fn test_user(id: i64, password: &str) -> User {
        let raw = RawPassword::new(password.to_string()).unwrap();
        let new_user = NewUser::new(
            Username::new("ada").unwrap(),
            Email::new("ada@x.com").unwrap(),
            PasswordHash::from_raw(&raw).unwrap(),
        );
        User {
            user_id: UserId::from_i64(id),
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
        }
    }

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::new("static-test-secret")))
    }

    #[test]
    fn test_access_token_claims() {
        let service = service();
        let user = test_user(42, "longpassword1");

        let token = service.issue_access_token(&user).unwrap();
        let claims = service.verify_access(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.email, "ada@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_access_token_wrong_secret_rejected() {
        let user = test_user(1, "longpassword1");
        let token = service().issue_access_token(&user).unwrap();

        let other = TokenService::new(Arc::new(AuthConfig::new("another-secret")));
        assert!(matches!(
            other.verify_access(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_refresh_roundtrip() {
        let service = service();
        let user = test_user(7, "longpassword1");

        let token = service.issue_refresh_token(&user).unwrap();
        let claims = service.verify_refresh(&token, &user).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "ada@x.com");
    }

    #[test]
    fn test_refresh_invalidated_by_password_change() {
        let service = service();
        let mut user = test_user(7, "longpassword1");

        let token = service.issue_refresh_token(&user).unwrap();
        assert!(service.verify_refresh(&token, &user).is_ok());

        let raw = RawPassword::new("changedpassword2".to_string()).unwrap();
        user.set_password(PasswordHash::from_raw(&raw).unwrap());

        assert!(matches!(
            service.verify_refresh(&token, &user),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_refresh_not_valid_as_access() {
        // The derived secret differs from the static secret, so a refresh
        // token never passes access verification.
        let service = service();
        let user = test_user(7, "longpassword1");

        let refresh = service.issue_refresh_token(&user).unwrap();
        assert!(service.verify_access(&refresh).is_err());
    }

    #[test]
    fn test_decode_subject_without_verification() {
        let service = service();
        let user = test_user(99, "longpassword1");

        let token = service.issue_refresh_token(&user).unwrap();

        // Subject comes out even though no secret was checked
        let subject = service.decode_refresh_subject(&token).unwrap();
        assert_eq!(subject.as_i64(), 99);

        // Garbage still fails on shape
        assert!(matches!(
            service.decode_refresh_subject("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_issue_pair_reuses_existing_refresh() {
        let service = service();
        let user = test_user(5, "longpassword1");

        let original = service.issue_refresh_token(&user).unwrap();
        let pair = service
            .issue_pair(&user, Some(original.clone()))
            .unwrap();

        assert_eq!(pair.refresh_token, original);
        assert!(service.verify_access(&pair.access_token).is_ok());
    }

    #[test]
    fn test_issue_pair_mints_refresh_when_absent() {
        let service = service();
        let user = test_user(5, "longpassword1");

        let pair = service.issue_pair(&user, None).unwrap();
        assert!(service.verify_refresh(&pair.refresh_token, &user).is_ok());
    }
}
