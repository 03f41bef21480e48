//! Current User Use Case
//!
//! Re-fetches the authenticated user so the response reflects canonical
//! stored state rather than whatever the token was minted from.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Current user use case
pub struct CurrentUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CurrentUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, current: &User) -> AuthResult<User> {
        self.repo
            .find_by_id(current.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
