//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id)
//! - Signed-token primitives (JWT sign / verify / decode)
//! - Client identification (IP extraction)
//! - Rate limiting infrastructure

pub mod client;
pub mod crypto;
pub mod password;
pub mod rate_limit;
pub mod token;
