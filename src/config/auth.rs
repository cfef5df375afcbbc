use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Token guard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Minutes a token stays valid after it is issued, tokens never expire
    /// on age alone when unset. Each token's own `expires_at` always applies.
    pub expiration: Option<u64>,
    /// Prepended to the secret part of newly issued tokens so leaked
    /// tokens are easy to spot by secret scanners
    pub token_prefix: String,
}

impl AuthConfig {
    /// A lifetime too large to represent saturates, so it never elapses
    pub fn expiration(&self) -> Option<Duration> {
        self.expiration.map(|minutes| {
            minutes
                .checked_mul(60)
                .map_or(Duration::MAX, Duration::from_secs)
        })
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.expiration == Some(0) {
            return Err(ConfigError::ValidationError(
                "auth.expiration must be > 0 when set".to_string(),
            ));
        }
        if self.token_prefix.contains('|') || self.token_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(
                "auth.token_prefix cannot contain '|' or whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
