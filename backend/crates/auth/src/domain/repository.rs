//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId, username::Username};
use crate::error::AuthResult;

/// User repository trait
///
/// The store is the system of record and owns transactional guarantees;
/// a read after a committed write to the same user must observe that write.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user; the store assigns the id
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by email (stored form is lowercase)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &Username) -> AuthResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update an existing user
    async fn update(&self, user: &User) -> AuthResult<()>;
}
