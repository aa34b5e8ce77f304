use crate::{ConfigError, ConfigErrorResult, DEFAULT_EMAIL_FROM_ADDRESS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// When false, confirmation emails are never dispatched and pending
    /// signups fail with an invalid-email error.
    pub enabled: bool,
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            from_address: String::from(DEFAULT_EMAIL_FROM_ADDRESS),
        }
    }
}

impl EmailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let address = self.from_address.trim();
        match address.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ConfigError::email(format!(
                "email.from_address is not an email address: '{}'",
                self.from_address
            ))),
        }
    }
}
