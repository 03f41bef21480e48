//! Value Object Module

pub mod country;
pub mod email;
pub mod password;
pub mod user_id;
pub mod username;

pub use country::CountryCode;
pub use email::Email;
pub use password::{PasswordHash, RawPassword};
pub use user_id::UserId;
pub use username::Username;
