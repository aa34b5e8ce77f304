use reader_config::SignupConfig;

use std::collections::HashSet;

/// Rules a new username must satisfy.
///
/// Allowed: ASCII lowercase letters, digits and `_`, not starting or ending
/// with `_`, length within bounds, not reserved.
#[derive(Debug, Clone)]
pub struct UsernamePolicy {
    min_length: usize,
    max_length: usize,
    reserved: HashSet<String>,
}

impl UsernamePolicy {
    pub fn new(
        min_length: usize,
        max_length: usize,
        reserved: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            min_length,
            max_length,
            reserved: reserved
                .into_iter()
                .map(|name| name.to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &SignupConfig) -> Self {
        Self::new(
            config.min_username_length,
            config.max_username_length,
            config.reserved_usernames.iter().cloned(),
        )
    }

    pub fn validate(&self, username: &str) -> bool {
        let length = username.chars().count();
        if length < self.min_length || length > self.max_length {
            return false;
        }

        if username.starts_with('_') || username.ends_with('_') {
            return false;
        }

        let allowed = username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !allowed {
            return false;
        }

        !self.reserved.contains(&username.to_lowercase())
    }
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self::from_config(&SignupConfig::default())
    }
}
