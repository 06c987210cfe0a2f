//! Core data types for star visibility calculations.

use crate::angle::{hours_to_degrees, normalize_degrees};
use crate::error::{
    check_altitude, check_declination, check_latitude, check_longitude, check_right_ascension,
};
use crate::{Error, Result};
use chrono::{DateTime, Duration, Utc};

/// Equatorial coordinates of a fixed-direction object.
///
/// Right ascension is measured in hours [0, 24), declination in degrees
/// [-90, +90]. Immutable value; validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoordinates {
    ra_hours: f64,
    dec_degrees: f64,
}

impl EquatorialCoordinates {
    /// Creates validated equatorial coordinates.
    ///
    /// # Errors
    /// Returns `InvalidRightAscension` or `InvalidDeclination` for
    /// out-of-range values.
    ///
    /// # Example
    /// ```
    /// # use star_visibility::EquatorialCoordinates;
    /// let vega = EquatorialCoordinates::new(18.615, 38.784).unwrap();
    /// assert_eq!(vega.ra_hours(), 18.615);
    /// assert!(EquatorialCoordinates::new(24.0, 0.0).is_err());
    /// ```
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Result<Self> {
        check_right_ascension(ra_hours)?;
        check_declination(dec_degrees)?;
        Ok(Self {
            ra_hours,
            dec_degrees,
        })
    }

    /// Gets the right ascension in hours [0, 24).
    #[must_use]
    pub const fn ra_hours(&self) -> f64 {
        self.ra_hours
    }

    /// Gets the right ascension expressed in degrees [0, 360).
    #[must_use]
    pub fn ra_degrees(&self) -> f64 {
        hours_to_degrees(self.ra_hours)
    }

    /// Gets the declination in degrees [-90, +90].
    #[must_use]
    pub const fn dec_degrees(&self) -> f64 {
        self.dec_degrees
    }
}

/// Horizontal (altitude/azimuth) coordinates as seen by an observer.
///
/// Altitude is degrees above the horizon [-90, +90]; azimuth is degrees from
/// North through East [0, 360). A derived value: computed from equatorial
/// coordinates plus an observer and an instant, never authored directly by
/// application code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalCoordinates {
    altitude: f64,
    azimuth: f64,
}

impl HorizontalCoordinates {
    /// Creates horizontal coordinates; azimuth is normalized to [0, 360).
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if altitude is outside -90 to +90 degrees.
    pub fn new(altitude: f64, azimuth: f64) -> Result<Self> {
        check_altitude(altitude)?;
        if !azimuth.is_finite() {
            return Err(Error::ComputationError {
                message: "azimuth is not finite",
            });
        }
        Ok(Self {
            altitude,
            azimuth: normalize_degrees(azimuth),
        })
    }

    /// Gets the altitude in degrees above the horizon.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the azimuth in degrees from North through East.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Checks if the object is above the geometric horizon (altitude > 0°).
    #[must_use]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Observer location on Earth.
///
/// Latitude in degrees [-90, +90], longitude in degrees [-180, +180]
/// (East-positive). Elevation above sea level is carried for completeness but
/// does not enter the fixed-star calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation_m: Option<f64>,
}

impl Observer {
    /// Creates a validated observer location at sea level.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates. Values are never silently clamped.
    ///
    /// # Example
    /// ```
    /// # use star_visibility::Observer;
    /// let london = Observer::new(51.5074, -0.1278).unwrap();
    /// assert_eq!(london.latitude(), 51.5074);
    /// assert!(Observer::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
            elevation_m: None,
        })
    }

    /// Creates a validated observer location with an elevation in meters.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range
    /// coordinates.
    pub fn with_elevation(latitude: f64, longitude: f64, elevation_m: f64) -> Result<Self> {
        let mut observer = Self::new(latitude, longitude)?;
        observer.elevation_m = Some(elevation_m);
        Ok(observer)
    }

    /// Gets the latitude in degrees (North-positive).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (East-positive).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation above sea level in meters, if known.
    #[must_use]
    pub const fn elevation_m(&self) -> Option<f64> {
        self.elevation_m
    }

    /// True at the geographic poles, where azimuth is undefined and fixed to
    /// 0° by convention.
    #[must_use]
    pub fn is_at_pole(&self) -> bool {
        self.latitude.abs() == 90.0
    }
}

/// Outcome of a rise/transit/set calculation for one object on one UTC day.
///
/// Exactly one variant applies per query, determined analytically from the
/// hour-angle equation rather than by a search that may fail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectTiming<T = DateTime<Utc>> {
    /// Object rises and sets within the day.
    RisesAndSets {
        /// Time the object crosses the horizon upward.
        rise: T,
        /// Time of meridian transit (maximum altitude).
        transit: T,
        /// Time the object crosses the horizon downward.
        set: T,
        /// Altitude at transit, in degrees.
        max_altitude: f64,
    },
    /// Circumpolar object: never sets at this latitude.
    AlwaysVisible {
        /// Time of meridian transit (maximum altitude).
        transit: T,
        /// Altitude at upper transit, in degrees.
        max_altitude: f64,
        /// Altitude at lower transit, in degrees.
        min_altitude: f64,
    },
    /// Object never clears the horizon at this latitude.
    NeverVisible {
        /// Altitude at upper transit, in degrees (below the horizon).
        max_altitude: f64,
    },
}

impl<T> ObjectTiming<T> {
    /// Checks if this object rises and sets normally.
    pub const fn rises_and_sets(&self) -> bool {
        matches!(self, Self::RisesAndSets { .. })
    }

    /// Checks if this object is circumpolar (never sets).
    pub const fn is_always_visible(&self) -> bool {
        matches!(self, Self::AlwaysVisible { .. })
    }

    /// Checks if this object never rises.
    pub const fn is_never_visible(&self) -> bool {
        matches!(self, Self::NeverVisible { .. })
    }

    /// Gets the transit time, absent only for objects that never rise.
    pub const fn transit(&self) -> Option<&T> {
        match self {
            Self::RisesAndSets { transit, .. } | Self::AlwaysVisible { transit, .. } => {
                Some(transit)
            }
            Self::NeverVisible { .. } => None,
        }
    }

    /// Gets the rise time if the object rises and sets.
    pub const fn rise(&self) -> Option<&T> {
        if let Self::RisesAndSets { rise, .. } = self {
            Some(rise)
        } else {
            None
        }
    }

    /// Gets the set time if the object rises and sets.
    pub const fn set(&self) -> Option<&T> {
        if let Self::RisesAndSets { set, .. } = self {
            Some(set)
        } else {
            None
        }
    }

    /// Gets the transit altitude in degrees (populated in every variant).
    pub const fn max_altitude(&self) -> f64 {
        match self {
            Self::RisesAndSets { max_altitude, .. }
            | Self::AlwaysVisible { max_altitude, .. }
            | Self::NeverVisible { max_altitude } => *max_altitude,
        }
    }
}

/// Half-open UTC interval [start, end) during which a visibility condition
/// holds continuously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservingWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ObservingWindow {
    /// Creates a window; `end` must be strictly after `start`.
    ///
    /// # Errors
    /// Returns `InvalidWindow` if `end <= start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end <= start {
            return Err(Error::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Gets the window start (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Gets the window end (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Gets the window length.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks whether an instant falls inside the window.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_equatorial_validation() {
        assert!(EquatorialCoordinates::new(0.0, 0.0).is_ok());
        assert!(EquatorialCoordinates::new(23.999, 90.0).is_ok());
        assert!(EquatorialCoordinates::new(18.615, -90.0).is_ok());

        assert!(EquatorialCoordinates::new(24.0, 0.0).is_err());
        assert!(EquatorialCoordinates::new(-0.01, 0.0).is_err());
        assert!(EquatorialCoordinates::new(12.0, 90.5).is_err());
        assert!(EquatorialCoordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_ra_degrees() {
        let eq = EquatorialCoordinates::new(18.6, 38.8).unwrap();
        assert!((eq.ra_degrees() - 279.0).abs() < 1e-12);
    }

    #[test]
    fn test_horizontal_normalizes_azimuth() {
        let h = HorizontalCoordinates::new(45.0, 370.0).unwrap();
        assert_eq!(h.azimuth(), 10.0);
        let h = HorizontalCoordinates::new(0.0, -90.0).unwrap();
        assert_eq!(h.azimuth(), 270.0);

        assert!(HorizontalCoordinates::new(95.0, 0.0).is_err());
        assert!(HorizontalCoordinates::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_horizontal_above_horizon() {
        assert!(HorizontalCoordinates::new(0.1, 0.0)
            .unwrap()
            .is_above_horizon());
        assert!(!HorizontalCoordinates::new(0.0, 0.0)
            .unwrap()
            .is_above_horizon());
        assert!(!HorizontalCoordinates::new(-10.0, 0.0)
            .unwrap()
            .is_above_horizon());
    }

    #[test]
    fn test_observer_validation() {
        assert!(Observer::new(90.0, 180.0).is_ok());
        assert!(Observer::new(-90.0, -180.0).is_ok());
        assert!(Observer::new(90.001, 0.0).is_err());
        assert!(Observer::new(0.0, 180.001).is_err());

        let mauna_kea = Observer::with_elevation(19.8207, -155.4681, 4207.0).unwrap();
        assert_eq!(mauna_kea.elevation_m(), Some(4207.0));
        assert_eq!(Observer::new(0.0, 0.0).unwrap().elevation_m(), None);
    }

    #[test]
    fn test_observer_pole_detection() {
        assert!(Observer::new(90.0, 0.0).unwrap().is_at_pole());
        assert!(Observer::new(-90.0, 10.0).unwrap().is_at_pole());
        assert!(!Observer::new(89.999, 0.0).unwrap().is_at_pole());
    }

    #[test]
    fn test_object_timing_accessors() {
        let rise = utc("2024-08-01T10:00:00Z");
        let transit = utc("2024-08-01T16:00:00Z");
        let set = utc("2024-08-01T22:00:00Z");

        let timing = ObjectTiming::RisesAndSets {
            rise,
            transit,
            set,
            max_altitude: 77.3,
        };
        assert!(timing.rises_and_sets());
        assert!(!timing.is_always_visible());
        assert_eq!(timing.rise(), Some(&rise));
        assert_eq!(timing.transit(), Some(&transit));
        assert_eq!(timing.set(), Some(&set));
        assert_eq!(timing.max_altitude(), 77.3);

        let circumpolar: ObjectTiming = ObjectTiming::AlwaysVisible {
            transit,
            max_altitude: 55.0,
            min_altitude: 12.0,
        };
        assert!(circumpolar.is_always_visible());
        assert_eq!(circumpolar.rise(), None);
        assert_eq!(circumpolar.transit(), Some(&transit));

        let hidden: ObjectTiming = ObjectTiming::NeverVisible { max_altitude: -8.0 };
        assert!(hidden.is_never_visible());
        assert_eq!(hidden.transit(), None);
        assert_eq!(hidden.max_altitude(), -8.0);
    }

    #[test]
    fn test_observing_window() {
        let start = utc("2024-08-01T20:00:00Z");
        let end = utc("2024-08-02T04:00:00Z");

        let window = ObservingWindow::new(start, end).unwrap();
        assert_eq!(window.duration(), Duration::hours(8));
        assert!(window.contains(start));
        assert!(window.contains(utc("2024-08-02T00:00:00Z")));
        assert!(!window.contains(end));

        assert!(ObservingWindow::new(end, start).is_err());
        assert!(ObservingWindow::new(start, start).is_err());
    }
}
