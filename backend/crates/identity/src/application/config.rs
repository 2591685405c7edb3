//! Application Configuration
//!
//! Configuration for the identity application layer. The token signing
//! secret is explicit state handed in at construction: it is loaded once at
//! process start and never rotated at runtime.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Configuration construction errors. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An unset or empty secret must never silently produce insecure tokens
    #[error("token signing secret must not be empty")]
    EmptySecret,
}

/// Identity application configuration
#[derive(Clone)]
pub struct IdentityConfig {
    /// Secret key for token signing
    token_secret: Vec<u8>,
    /// Token lifetime
    token_ttl: Duration,
}

impl IdentityConfig {
    /// Default token lifetime (24 hours)
    pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

    /// Create a config from a signing secret.
    ///
    /// Rejects an empty secret so a missing `TOKEN_SECRET` fails loudly at
    /// startup instead of per-request.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let token_secret = secret.into();
        if token_secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        Ok(Self {
            token_secret,
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        })
    }

    /// Override the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Create config with a random secret (for development)
    pub fn development() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);

        Self {
            token_secret: secret.to_vec(),
            token_ttl: Self::DEFAULT_TOKEN_TTL,
        }
    }

    /// Get the signing secret
    pub fn token_secret(&self) -> &[u8] {
        &self.token_secret
    }

    /// Get the token lifetime
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_rejected() {
        assert_eq!(
            IdentityConfig::new(Vec::new()).unwrap_err(),
            ConfigError::EmptySecret
        );
        assert_eq!(
            IdentityConfig::new("").unwrap_err(),
            ConfigError::EmptySecret
        );
    }

    #[test]
    fn test_secret_accepted() {
        let config = IdentityConfig::new("a-signing-secret").unwrap();
        assert_eq!(config.token_secret(), b"a-signing-secret");
        assert_eq!(config.token_ttl(), IdentityConfig::DEFAULT_TOKEN_TTL);
    }

    #[test]
    fn test_with_token_ttl() {
        let config = IdentityConfig::new("secret")
            .unwrap()
            .with_token_ttl(Duration::from_secs(60));
        assert_eq!(config.token_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_development_has_nonempty_secret() {
        let config = IdentityConfig::development();
        assert!(!config.token_secret().is_empty());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = IdentityConfig::new("super-secret").unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("super-secret"));
    }
}
