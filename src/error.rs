//! Error types for the star visibility library.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while validating inputs to visibility calculations.
///
/// Every error is raised before any trigonometric evaluation takes place;
/// once inputs pass validation, calculations are closed-form and cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid right ascension value (must be at least 0 and below 24 hours).
    #[error("invalid right ascension {value}h (must be at least 0 and below 24 hours)")]
    InvalidRightAscension {
        /// The invalid right ascension value provided.
        value: f64,
    },
    /// Invalid declination value (must be between -90 and +90 degrees).
    #[error("invalid declination {value}° (must be between -90° and +90°)")]
    InvalidDeclination {
        /// The invalid declination value provided.
        value: f64,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid altitude value (must be between -90 and +90 degrees).
    #[error("invalid altitude {value}° (must be between -90° and +90°)")]
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Invalid time window (end must be after start).
    #[error("invalid time window: end {end} is not after start {start}")]
    InvalidWindow {
        /// Window start.
        start: DateTime<Utc>,
        /// Window end.
        end: DateTime<Utc>,
    },
    /// Invalid date/time components.
    #[error("invalid date/time: {message}")]
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// An angle string that matches neither decimal degrees nor any DMS form.
    #[error("cannot parse angle from {input:?}")]
    UnparsableAngle {
        /// The rejected input string.
        input: String,
    },
    /// Numerical result failed an internal sanity check.
    #[error("computation error: {message}")]
    ComputationError {
        /// Description of the computation error.
        message: &'static str,
    },
}

impl Error {
    /// Creates an invalid right ascension error.
    #[must_use]
    pub const fn invalid_right_ascension(value: f64) -> Self {
        Self::InvalidRightAscension { value }
    }

    /// Creates an invalid declination error.
    #[must_use]
    pub const fn invalid_declination(value: f64) -> Self {
        Self::InvalidDeclination { value }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates right ascension is within the valid range (0 inclusive to 24 exclusive hours).
///
/// # Errors
/// Returns `InvalidRightAscension` if right ascension is outside [0, 24) hours.
pub fn check_right_ascension(ra_hours: f64) -> Result<()> {
    if !(0.0..24.0).contains(&ra_hours) {
        return Err(Error::invalid_right_ascension(ra_hours));
    }
    Ok(())
}

/// Validates declination is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidDeclination` if declination is outside -90 to +90 degrees.
pub fn check_declination(dec_degrees: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&dec_degrees) {
        return Err(Error::invalid_declination(dec_degrees));
    }
    Ok(())
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates an altitude angle to be within the range -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidAltitude` if altitude is outside -90 to +90 degrees.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}
