use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 64;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 4;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 15;

const DEFAULT_RESERVED_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "api",
    "about",
    "help",
    "home",
    "login",
    "logout",
    "root",
    "settings",
    "signup",
    "support",
    "system",
];

/// Username policy applied to new signups.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignupConfig {
    pub min_username_length: usize,
    pub max_username_length: usize,
    /// Names nobody may claim, compared case-insensitively
    pub reserved_usernames: Vec<String>,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            reserved_usernames: DEFAULT_RESERVED_USERNAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl SignupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_username_length < MIN_USERNAME_LENGTH {
            return Err(ConfigError::signup(format!(
                "signup.min_username_length must be at least {}, got {}",
                MIN_USERNAME_LENGTH, self.min_username_length
            )));
        }

        if self.max_username_length > MAX_USERNAME_LENGTH {
            return Err(ConfigError::signup(format!(
                "signup.max_username_length must be at most {}, got {}",
                MAX_USERNAME_LENGTH, self.max_username_length
            )));
        }

        if self.min_username_length > self.max_username_length {
            return Err(ConfigError::signup(format!(
                "signup.min_username_length ({}) exceeds signup.max_username_length ({})",
                self.min_username_length, self.max_username_length
            )));
        }

        Ok(())
    }
}
