//! Error types for zoneshift operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneShiftError {
    #[error("Unknown time zone: '{0}'")]
    UnknownTimeZone(String),
}

pub type Result<T> = std::result::Result<T, ZoneShiftError>;
