//! Refresh Session Use Case
//!
//! Exchanges a refresh token for a new token pair. The flow is a fixed
//! two-phase sequence:
//!
//! 1. the token's claims are decoded WITHOUT verification, only to learn
//!    which user it names;
//! 2. that user's current credential state is loaded, the per-user secret
//!    is derived from it, and the original raw token is then fully verified
//!    (signature + expiry) against that secret.
//!
//! No side effect happens before step 2 completes. A refresh token issued
//! before the user's latest password change fails step 2.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::login::SessionOutput;
use crate::application::tokens::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Refresh session use case
pub struct RefreshSessionUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RefreshSessionUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, refresh_token: String) -> AuthResult<SessionOutput> {
        let tokens = TokenService::new(self.config.clone());

        // Phase 1: shape-only decode to find the claimed subject
        let subject = tokens.decode_refresh_subject(&refresh_token)?;

        let user = self
            .repo
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // Phase 2: full verification against the current derived secret
        tokens.verify_refresh(&refresh_token, &user)?;

        // New access token; the refresh token is passed through unchanged
        let pair = tokens.issue_pair(&user, Some(refresh_token))?;

        tracing::debug!(user_id = %user.user_id, "Session refreshed");

        Ok(SessionOutput { tokens: pair, user })
    }
}
