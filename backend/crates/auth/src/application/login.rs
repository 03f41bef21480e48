//! Login Use Case
//!
//! Authenticates a user by email + password and issues a fresh token pair.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::tokens::{TokenPair, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Output of login and refresh: a token pair plus the authenticated user
#[derive(Debug)]
pub struct SessionOutput {
    pub tokens: TokenPair,
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<SessionOutput> {
        // Every failure below maps to the same InvalidCredentials so the
        // response cannot be used to probe which emails are registered.
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        // Argon2 verification is CPU-bound; keep it off the async workers
        let hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || hash.verify(&password))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        // Fresh pair: login always mints a new refresh token
        let tokens = TokenService::new(self.config.clone()).issue_pair(&user, None)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(SessionOutput { tokens, user })
    }
}
