//! Application Configuration
//!
//! Configuration for the Auth application layer. Built once at startup and
//! injected into router state; there is no mutable global secret.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Static token-signing secret, process-wide
    pub token_secret: String,
    /// Access token lifetime (15 days)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (30 days)
    pub refresh_token_ttl: Duration,
}

impl AuthConfig {
    /// Create config with the given signing secret and default TTLs
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            access_token_ttl: Duration::from_secs(15 * 24 * 3600),
            refresh_token_ttl: Duration::from_secs(30 * 24 * 3600),
        }
    }

    /// Create config with a random secret (for development)
    ///
    /// Tokens do not survive a restart with this config; production loads
    /// the secret from the environment instead.
    pub fn development() -> Self {
        let secret = platform::crypto::to_base64(&platform::crypto::random_bytes(32));
        Self::new(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttls() {
        let config = AuthConfig::new("secret");
        assert_eq!(config.access_token_ttl, Duration::from_secs(15 * 24 * 3600));
        assert_eq!(
            config.refresh_token_ttl,
            Duration::from_secs(30 * 24 * 3600)
        );
    }

    #[test]
    fn test_development_secret_is_random() {
        let a = AuthConfig::development();
        let b = AuthConfig::development();
        assert_ne!(a.token_secret, b.token_secret);
        assert!(!a.token_secret.is_empty());
    }
}
