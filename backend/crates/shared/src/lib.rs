//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Common primitive value objects (ID types, etc.)

pub mod error;
pub mod id;

pub use error::app_error::{AppError, AppResult};
pub use error::kind::ErrorKind;
pub use id::Id;
