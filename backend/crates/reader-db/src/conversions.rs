//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use reader_core::CoreError;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::warn;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| {
        warn!("Invalid UUID {:?} in {}", value, column);
        DbError::from(CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    })
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse_timestamp_millis(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
