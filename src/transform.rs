//! Equatorial to horizontal coordinate transformation.
//!
//! Converts right ascension/declination into altitude/azimuth for a given
//! observer and instant, via local sidereal time and the spherical-astronomy
//! identities, plus the inverse relation. Both directions are pure functions:
//! identical inputs always produce bit-identical outputs.

use crate::angle::{clamp_unit, degrees_to_hours, normalize_degrees, normalize_hour_angle};
use crate::time::{local_sidereal_time, JulianDate};
use crate::types::{EquatorialCoordinates, HorizontalCoordinates, Observer};
use crate::Result;
use chrono::{DateTime, TimeZone};

/// Computes the horizontal position of an object for an observer at an instant.
///
/// Local sidereal time is derived from the instant (normalized to UTC) and the
/// observer longitude; the hour angle `H = LST - RA` then yields altitude and
/// azimuth through the standard identities:
///
/// ```text
/// sin(alt) = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(H)
/// az       = atan2(-cos(dec)·sin(H), sin(dec)·cos(lat) - cos(dec)·sin(lat)·cos(H))
/// ```
///
/// Azimuth is measured from North through East, normalized to [0, 360).
/// At the geographic poles the azimuth formula is degenerate and the result
/// carries azimuth 0° by convention; this case never errors or produces NaN.
///
/// # Errors
/// Returns error if the instant cannot be expressed as a Julian date.
///
/// # Example
/// ```
/// # use star_visibility::{transform, EquatorialCoordinates, Observer};
/// use chrono::{DateTime, Utc};
///
/// let vega = EquatorialCoordinates::new(18.615, 38.784).unwrap();
/// let london = Observer::new(51.5074, -0.1278).unwrap();
/// let instant = "2024-08-01T22:00:00Z".parse::<DateTime<Utc>>().unwrap();
///
/// let position = transform::horizontal_position(vega, london, &instant).unwrap();
/// assert!(position.is_above_horizon());
/// ```
pub fn horizontal_position<Tz: TimeZone>(
    equatorial: EquatorialCoordinates,
    observer: Observer,
    instant: &DateTime<Tz>,
) -> Result<HorizontalCoordinates> {
    let jd = JulianDate::from_datetime(instant)?;
    let lst = local_sidereal_time(jd, observer.longitude());
    let hour_angle = normalize_hour_angle(lst - equatorial.ra_degrees());
    horizontal_at_hour_angle(equatorial.dec_degrees(), observer, hour_angle)
}

/// Computes the equatorial coordinates that map to a given horizontal position
/// for the same observer and instant (the inverse of [`horizontal_position`]).
///
/// Away from the pole degeneracy this round-trips with the forward transform
/// to within floating tolerance.
///
/// # Errors
/// Returns error if the instant cannot be expressed as a Julian date.
pub fn equatorial_position<Tz: TimeZone>(
    horizontal: HorizontalCoordinates,
    observer: Observer,
    instant: &DateTime<Tz>,
) -> Result<EquatorialCoordinates> {
    let jd = JulianDate::from_datetime(instant)?;
    let lst = local_sidereal_time(jd, observer.longitude());

    let alt = horizontal.altitude().to_radians();
    let az = horizontal.azimuth().to_radians();
    let lat = observer.latitude().to_radians();

    let sin_dec = clamp_unit(alt.sin() * lat.sin() + alt.cos() * lat.cos() * az.cos());
    let dec_degrees = sin_dec.asin().to_degrees();

    // Same identity as the forward direction with altitude and declination
    // exchanging roles
    let hour_angle = (-az.sin() * alt.cos())
        .atan2(alt.sin() * lat.cos() - alt.cos() * lat.sin() * az.cos())
        .to_degrees();
    let ra_hours = degrees_to_hours(normalize_degrees(lst - hour_angle));

    EquatorialCoordinates::new(ra_hours, dec_degrees)
}

/// Altitude in degrees of an object with declination `dec_degrees` seen from
/// latitude `lat_degrees` at hour angle `hour_angle_degrees`.
///
/// The timing engine evaluates this at H = 0 and H = 180° for transit
/// altitudes; the argument of `asin` is clamped to absorb floating-point
/// overshoot at the boundaries.
#[must_use]
pub fn altitude_at_hour_angle(dec_degrees: f64, lat_degrees: f64, hour_angle_degrees: f64) -> f64 {
    let dec = dec_degrees.to_radians();
    let lat = lat_degrees.to_radians();
    let h = hour_angle_degrees.to_radians();

    let sin_alt = clamp_unit(dec.sin() * lat.sin() + dec.cos() * lat.cos() * h.cos());
    sin_alt.asin().to_degrees()
}

/// Shared altitude/azimuth evaluation for a known hour angle.
///
/// Also used by the batch helper in [`crate::visibility`], which computes the
/// sidereal time once and sweeps many objects at the same instant.
pub(crate) fn horizontal_at_hour_angle(
    dec_degrees: f64,
    observer: Observer,
    hour_angle_degrees: f64,
) -> Result<HorizontalCoordinates> {
    let altitude = altitude_at_hour_angle(dec_degrees, observer.latitude(), hour_angle_degrees);

    // cos(lat) = 0 at the poles leaves azimuth undefined; 0° by convention
    let azimuth = if observer.is_at_pole() {
        0.0
    } else {
        let dec = dec_degrees.to_radians();
        let lat = observer.latitude().to_radians();
        let h = hour_angle_degrees.to_radians();
        normalize_degrees(
            (-dec.cos() * h.sin())
                .atan2(dec.sin() * lat.cos() - dec.cos() * lat.sin() * h.cos())
                .to_degrees(),
        )
    };

    HorizontalCoordinates::new(altitude, azimuth)
}
