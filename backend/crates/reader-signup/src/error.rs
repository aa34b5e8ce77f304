use reader_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Client-facing signup failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignupErrorCode {
    UserExists,
    InvalidUsername,
    InvalidEmail,
}

impl SignupErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserExists => "USER_EXISTS",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidEmail => "INVALID_EMAIL",
        }
    }
}

impl std::fmt::Display for SignupErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("User already exists: {email} {location}")]
    UserExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Invalid username: {username} {location}")]
    InvalidUsername {
        username: String,
        location: ErrorLocation,
    },

    /// Confirmation email could not be dispatched. The account itself is
    /// already committed in pending state.
    #[error("Confirmation email not sent for user {user_id} {location}")]
    InvalidEmail {
        user_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Database {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl SignupError {
    /// Domain failure code; `None` for infrastructure failures.
    pub fn code(&self) -> Option<SignupErrorCode> {
        match self {
            Self::UserExists { .. } => Some(SignupErrorCode::UserExists),
            Self::InvalidUsername { .. } => Some(SignupErrorCode::InvalidUsername),
            Self::InvalidEmail { .. } => Some(SignupErrorCode::InvalidEmail),
            Self::Database { .. } => None,
        }
    }
}

impl From<DbError> for SignupError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Database {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for SignupError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database {
            source: DbError::from(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SignupError>;
