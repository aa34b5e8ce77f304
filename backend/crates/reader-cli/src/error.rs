use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] reader_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] reader_db::DbError),

    #[error("Signup failed: {0}")]
    Signup(#[from] reader_signup::SignupError),

    #[error("Invalid argument: {source} {location}")]
    InvalidArgument {
        source: reader_core::CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("{what} not found {location}")]
    NotFound {
        what: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing output: {source} {location}")]
    Output {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Self::NotFound {
            what: what.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reader_core::CoreError> for CliError {
    #[track_caller]
    fn from(source: reader_core::CoreError) -> Self {
        Self::InvalidArgument {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for CliError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Database(reader_db::DbError::from(source))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
