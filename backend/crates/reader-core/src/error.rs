use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid auth provider: {value} {location}")]
    InvalidAuthProvider {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user status: {value} {location}")]
    InvalidUserStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
