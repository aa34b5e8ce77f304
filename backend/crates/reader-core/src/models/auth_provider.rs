//! Authentication provider a user signed up with.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity source of a user account.
///
/// OAuth providers carry the provider-side account id; password signups
/// carry nothing extra.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    /// Email + password signup
    Email,
    Google { source_user_id: String },
    Apple { source_user_id: String },
}

impl AuthProvider {
    /// Database representation of the `source` column
    pub fn source(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Google { .. } => "GOOGLE",
            Self::Apple { .. } => "APPLE",
        }
    }

    /// Provider-side account id, if the provider has one
    pub fn source_user_id(&self) -> Option<&str> {
        match self {
            Self::Email => None,
            Self::Google { source_user_id } | Self::Apple { source_user_id } => {
                Some(source_user_id.as_str())
            }
        }
    }

    /// Rebuild a provider from its stored `source` / `source_user_id` columns.
    #[track_caller]
    pub fn from_parts(source: &str, source_user_id: Option<String>) -> CoreErrorResult<Self> {
        match (source, source_user_id) {
            ("EMAIL", _) => Ok(Self::Email),
            ("GOOGLE", Some(source_user_id)) => Ok(Self::Google { source_user_id }),
            ("APPLE", Some(source_user_id)) => Ok(Self::Apple { source_user_id }),
            ("GOOGLE" | "APPLE", None) => Err(CoreError::InvalidAuthProvider {
                value: format!("{source} without source_user_id"),
                location: ErrorLocation::from(Location::caller()),
            }),
            _ => Err(CoreError::InvalidAuthProvider {
                value: source.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source())
    }
}
