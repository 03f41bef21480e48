//! Application Layer
//!
//! Use cases and token issuance.

pub mod config;
pub mod current_user;
pub mod login;
pub mod refresh_session;
pub mod register;
pub mod tokens;
pub mod update_user;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginUseCase, SessionOutput};
pub use refresh_session::RefreshSessionUseCase;
pub use register::{RegisterInput, RegisterUseCase};
pub use tokens::{AccessClaims, RefreshClaims, TokenPair, TokenService};
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
