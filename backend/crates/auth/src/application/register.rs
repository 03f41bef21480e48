//! Register Use Case
//!
//! Creates a new user account with a hashed password.

use std::sync::Arc;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    country::CountryCode,
    email::Email,
    password::{PasswordHash, RawPassword},
    username::Username,
};
use crate::error::{AuthError, AuthResult};

/// Registration input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub country: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let username = Username::new(input.username)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let country = CountryCode::new(input.country)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailInUse);
        }

        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Argon2 hashing is CPU-bound; keep it off the async workers
        let password_hash =
            tokio::task::spawn_blocking(move || PasswordHash::from_raw(&raw_password))
                .await
                .map_err(|e| AuthError::Internal(e.to_string()))?
                .map_err(|e| AuthError::Internal(e.to_string()))?;

        let mut new_user = NewUser::new(username, email, password_hash);
        new_user.first_name = Some(input.first_name);
        new_user.last_name = Some(input.last_name);
        new_user.bio = Some(input.bio);
        new_user.country = Some(country);

        // The store enforces uniqueness too; the exists check above only
        // covers the common case before paying for the hash.
        let user = self.repo.create(&new_user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
