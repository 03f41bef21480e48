//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and token issuance
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, authorization gate
//!
//! ## Features
//! - Registration and login with email + password
//! - Stateless JWT access/refresh token pairs
//! - Refresh tokens signed with a per-user derived secret
//! - Route-level public/protected authorization gate
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialized outward
//! - Refresh-token secret embeds the current password hash, so a password
//!   change invalidates every refresh token issued before it
//! - Login failures do not reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::tokens::{TokenPair, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgUserRepository as UserStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
