//! Rise, transit, and set timing, plus visibility windows.
//!
//! For a fixed-direction object the horizon crossing is governed by a single
//! closed-form equation in the hour angle:
//!
//! ```text
//! cos(H0) = -tan(dec) · tan(lat)
//! ```
//!
//! When the right-hand side leaves [-1, 1] there is no crossing: the object
//! is circumpolar (never sets) or never rises at that latitude. Otherwise the
//! object is above the horizon exactly while |H| < H0, and the wall-clock
//! times follow by inverting the sidereal-time relation (transit occurs when
//! LST equals the right ascension). No iterative root-finding is involved;
//! classification and timing are both analytic.
//!
//! The same construction generalizes from the horizon to an arbitrary
//! minimum-altitude threshold, which yields the closed-form visibility
//! windows of [`visibility_windows`].

use crate::angle::{clamp_unit, normalize_degrees, normalize_hour_angle};
use crate::catalog::CatalogStar;
use crate::error::check_altitude;
use crate::time::{
    duration_for_rotation, instant_of_sidereal_angle, local_sidereal_time, sidereal_day,
    JulianDate,
};
use crate::transform::{altitude_at_hour_angle, horizontal_at_hour_angle};
use crate::types::{
    EquatorialCoordinates, HorizontalCoordinates, ObjectTiming, Observer, ObservingWindow,
};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, TimeZone};

/// cos(H0) for the horizon crossing; outside [-1, 1] there is no crossing.
fn horizon_hour_angle_cosine(dec_degrees: f64, lat_degrees: f64) -> f64 {
    -(dec_degrees.to_radians().tan() * lat_degrees.to_radians().tan())
}

/// Checks whether an object never sets for this observer (circumpolar).
///
/// True exactly when `-tan(dec) · tan(lat) < -1`. Pure classification; no
/// date is involved because fixed-direction geometry does not change day to
/// day.
///
/// # Example
/// ```
/// # use star_visibility::{visibility, EquatorialCoordinates, Observer};
/// let polaris = EquatorialCoordinates::new(2.530, 89.264).unwrap();
/// let london = Observer::new(51.5074, -0.1278).unwrap();
/// assert!(visibility::is_circumpolar(polaris, london));
/// ```
#[must_use]
pub fn is_circumpolar(equatorial: EquatorialCoordinates, observer: Observer) -> bool {
    horizon_hour_angle_cosine(equatorial.dec_degrees(), observer.latitude()) < -1.0
}

/// Checks whether an object never clears the horizon for this observer.
///
/// True exactly when `-tan(dec) · tan(lat) > 1`.
#[must_use]
pub fn never_rises(equatorial: EquatorialCoordinates, observer: Observer) -> bool {
    horizon_hour_angle_cosine(equatorial.dec_degrees(), observer.latitude()) > 1.0
}

/// Computes rise, transit, and set times for one object on one UTC day.
///
/// Each event time is the first occurrence at or after 00:00 UTC of `date`,
/// placed by inverting the sidereal-time relation (transit at LST = RA, rise
/// at LST = RA - H0, set at LST = RA + H0). Because each event is normalized
/// into the day independently, a set time earlier in the day than the rise
/// time is a valid result for objects above the horizon at midnight.
///
/// The variant is decided analytically before any times are computed:
/// circumpolar objects carry transit plus their altitude extremes, and
/// objects that never rise carry only the (negative) upper-transit altitude.
/// Results are exact for the classification; no horizon search can miss a
/// grazing event.
///
/// # Errors
/// Returns error if the date cannot be expressed as a Julian date.
///
/// # Example
/// ```
/// # use star_visibility::{visibility, EquatorialCoordinates, Observer};
/// use chrono::NaiveDate;
///
/// let sirius = EquatorialCoordinates::new(6.752, -16.716).unwrap();
/// let london = Observer::new(51.5074, -0.1278).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// let timing = visibility::object_timing(sirius, london, date).unwrap();
/// assert!(timing.rises_and_sets());
/// assert!((timing.max_altitude() - 21.78).abs() < 0.01);
/// ```
pub fn object_timing(
    equatorial: EquatorialCoordinates,
    observer: Observer,
    date: NaiveDate,
) -> Result<ObjectTiming> {
    let day_start = date
        .and_hms_opt(0, 0, 0)
        .ok_or(Error::InvalidDateTime {
            message: "date has no midnight instant",
        })?
        .and_utc();

    let dec = equatorial.dec_degrees();
    let lat = observer.latitude();
    let max_altitude = altitude_at_hour_angle(dec, lat, 0.0);

    let cos_h0 = horizon_hour_angle_cosine(dec, lat);
    if cos_h0 > 1.0 {
        return Ok(ObjectTiming::NeverVisible { max_altitude });
    }

    let ra_degrees = equatorial.ra_degrees();
    let transit = instant_of_sidereal_angle(day_start, observer.longitude(), ra_degrees)?;

    if cos_h0 < -1.0 {
        return Ok(ObjectTiming::AlwaysVisible {
            transit,
            max_altitude,
            min_altitude: altitude_at_hour_angle(dec, lat, 180.0),
        });
    }

    let h0 = clamp_unit(cos_h0).acos().to_degrees();
    let rise = instant_of_sidereal_angle(
        day_start,
        observer.longitude(),
        normalize_degrees(ra_degrees - h0),
    )?;
    let set = instant_of_sidereal_angle(
        day_start,
        observer.longitude(),
        normalize_degrees(ra_degrees + h0),
    )?;

    Ok(ObjectTiming::RisesAndSets {
        rise,
        transit,
        set,
        max_altitude,
    })
}

/// Computes the sub-intervals of `span` during which the object's altitude
/// is at least `min_altitude_degrees`.
///
/// Replacing the horizon with a raised threshold changes the crossing
/// equation to
///
/// ```text
/// cos(Hm) = (sin(min_alt) - sin(dec)·sin(lat)) / (cos(dec)·cos(lat))
/// ```
///
/// so the object clears the threshold for an interval of half-width `Hm`
/// centered on every transit. When the right-hand side is at or below -1 the
/// object never drops to the threshold and the whole span is returned as one
/// window; at or above +1 the object never reaches it and the result is
/// empty. The returned windows are clipped to `span`, pairwise disjoint, and
/// in increasing time order, each shorter than one sidereal day.
///
/// # Errors
/// Returns `InvalidAltitude` if the threshold is outside -90 to +90 degrees,
/// or a time-conversion error for spans outside the supported range.
///
/// # Example
/// ```
/// # use star_visibility::{visibility, EquatorialCoordinates, Observer, ObservingWindow};
/// use chrono::{DateTime, Utc};
///
/// let vega = EquatorialCoordinates::new(18.615, 38.784).unwrap();
/// let london = Observer::new(51.5074, -0.1278).unwrap();
/// let span = ObservingWindow::new(
///     "2024-08-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
///     "2024-08-03T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
/// )
/// .unwrap();
///
/// // Vega is barely circumpolar from London, so it clears the horizon for
/// // the whole span but clears 40 degrees only around each transit.
/// assert_eq!(visibility::visibility_windows(vega, london, span, 0.0).unwrap(), vec![span]);
/// assert_eq!(visibility::visibility_windows(vega, london, span, 40.0).unwrap().len(), 3);
/// ```
pub fn visibility_windows(
    equatorial: EquatorialCoordinates,
    observer: Observer,
    span: ObservingWindow,
    min_altitude_degrees: f64,
) -> Result<Vec<ObservingWindow>> {
    check_altitude(min_altitude_degrees)?;

    let dec = equatorial.dec_degrees().to_radians();
    let lat = observer.latitude().to_radians();

    // At the poles (or for an object at a celestial pole) the altitude is
    // constant, so the threshold either holds everywhere or nowhere.
    // Inclusive, matching the cos_hm <= -1 case of the general branch
    if observer.is_at_pole() || equatorial.dec_degrees().abs() == 90.0 {
        let constant_altitude = clamp_unit(dec.sin() * lat.sin()).asin().to_degrees();
        return Ok(if constant_altitude >= min_altitude_degrees {
            vec![span]
        } else {
            Vec::new()
        });
    }

    let cos_hm =
        (min_altitude_degrees.to_radians().sin() - dec.sin() * lat.sin()) / (dec.cos() * lat.cos());
    if cos_hm <= -1.0 {
        return Ok(vec![span]);
    }
    if cos_hm >= 1.0 {
        return Ok(Vec::new());
    }

    let half_width = duration_for_rotation(cos_hm.acos().to_degrees());

    // Enumerate every transit whose window can intersect the span: the first
    // candidate is the earliest transit ending at or after the span start
    let mut transit = instant_of_sidereal_angle(
        span.start() - half_width,
        observer.longitude(),
        equatorial.ra_degrees(),
    )?;

    let mut windows = Vec::new();
    while transit - half_width < span.end() {
        let start = (transit - half_width).max(span.start());
        let end = (transit + half_width).min(span.end());
        if start < end {
            windows.push(ObservingWindow::new(start, end)?);
        }
        transit = transit + sidereal_day();
    }
    Ok(windows)
}

/// Computes the horizontal positions of every catalog star above
/// `min_altitude_degrees` at one instant, highest first.
///
/// The sidereal time is evaluated once and reused across the catalog, so the
/// cost is one Julian-date conversion plus constant work per star. Results
/// are sorted by descending altitude.
///
/// # Errors
/// Returns `InvalidAltitude` for an out-of-range threshold, or a
/// time-conversion error for the instant.
pub fn visible_stars<Tz: TimeZone>(
    stars: &[CatalogStar],
    observer: Observer,
    instant: &DateTime<Tz>,
    min_altitude_degrees: f64,
) -> Result<Vec<(CatalogStar, HorizontalCoordinates)>> {
    check_altitude(min_altitude_degrees)?;

    let jd = JulianDate::from_datetime(instant)?;
    let lst = local_sidereal_time(jd, observer.longitude());

    let mut visible = Vec::with_capacity(stars.len());
    for star in stars {
        let coordinates = star.coordinates();
        let hour_angle = normalize_hour_angle(lst - coordinates.ra_degrees());
        let position = horizontal_at_hour_angle(coordinates.dec_degrees(), observer, hour_angle)?;
        if position.altitude() > min_altitude_degrees {
            visible.push((star.clone(), position));
        }
    }
    visible.sort_by(|a, b| b.1.altitude().total_cmp(&a.1.altitude()));
    Ok(visible)
}
