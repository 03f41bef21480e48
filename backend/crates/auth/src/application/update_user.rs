//! Update User Use Case
//!
//! Applies a partial profile update to the current user. Only fields
//! present in the patch are touched; the password is re-hashed only when a
//! new plaintext is supplied.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    country::CountryCode,
    password::{PasswordHash, RawPassword},
};
use crate::error::{AuthError, AuthResult};

/// Partial update input; `None` means "leave unchanged"
#[derive(Default)]
pub struct UpdateUserInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub password: Option<String>,
}

/// Update user use case
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, current: &User, input: UpdateUserInput) -> AuthResult<User> {
        // Re-fetch: the gate's copy may be stale by the time we mutate
        let mut user = self
            .repo
            .find_by_id(current.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(first_name) = input.first_name {
            user.set_first_name(first_name);
        }
        if let Some(last_name) = input.last_name {
            user.set_last_name(last_name);
        }
        if let Some(bio) = input.bio {
            user.set_bio(bio);
        }
        if let Some(country) = input.country {
            let country = CountryCode::new(country)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;
            user.set_country(country);
        }

        if let Some(password) = input.password {
            let raw_password = RawPassword::new(password)
                .map_err(|e| AuthError::Validation(e.message().to_string()))?;

            let password_hash =
                tokio::task::spawn_blocking(move || PasswordHash::from_raw(&raw_password))
                    .await
                    .map_err(|e| AuthError::Internal(e.to_string()))?
                    .map_err(|e| AuthError::Internal(e.to_string()))?;

            // Once this persists, refresh tokens issued under the old hash
            // no longer verify.
            user.set_password(password_hash);
        }

        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}
