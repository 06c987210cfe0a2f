//! Time-system conversions for star visibility calculations.
//!
//! Julian dates, Greenwich/local mean sidereal time, and the inversion of the
//! sidereal-time relation used to place meridian transits on the UTC timeline.

#![allow(clippy::unreadable_literal)]

use crate::angle::normalize_degrees;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC).
const J2000_JDN: f64 = 2_451_545.0;

/// Length of one mean sidereal day expressed in mean solar hours.
const SIDEREAL_DAY_HOURS: f64 = 23.934469591;

/// Ratio of one mean sidereal day to one mean solar day.
///
/// Multiplying a sidereal duration by this ratio converts it to the solar
/// (clock) duration over which the sky rotates through the same angle.
pub const SIDEREAL_TO_SOLAR: f64 = SIDEREAL_DAY_HOURS / 24.0;

/// Julian date representation for sidereal-time calculations.
///
/// Referenced to UT; constructed either from calendar components or from any
/// timezone-aware chrono `DateTime`, which is normalized to UTC first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// The datetime is converted to UTC before the Julian Date calculation,
    /// so equal instants expressed in different zones produce equal results.
    ///
    /// # Errors
    /// Returns error if the date/time components are outside the supported
    /// calendar (chrono instants are always valid, so this is unreachable in
    /// practice but kept explicit rather than unwrapped).
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Result<Self> {
        let utc = datetime.with_timezone(&Utc);
        Self::from_utc(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9,
        )
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// Follows the Meeus algorithm with the Gregorian calendar correction
    /// applied for dates from 1582-10-15 onward.
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges
    /// (month 1-12, day valid for the month, hour 0-23, minute 0-59,
    /// second 0-59.999...).
    ///
    /// # Example
    /// ```
    /// # use star_visibility::time::JulianDate;
    /// let jd = JulianDate::from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
    /// assert_eq!(jd.value(), 2_451_545.0);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        let mut y = year;
        let mut m = i64::from(month);
        // January and February count as months 13 and 14 of the previous year
        if m < 3 {
            y -= 1;
            m += 12;
        }

        let d = f64::from(day)
            + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

        let mut jd = (365.25 * (f64::from(y) + 4716.0)).floor()
            + (30.6001 * (m as f64 + 1.0)).floor()
            + d
            - 1524.5;

        // Gregorian correction from 1582-10-15 (JDN 2299161) onward
        if jd >= 2_299_161.0 {
            let a = (f64::from(y) / 100.0).floor();
            jd += 2.0 - a + (a / 4.0).floor();
        }

        Ok(Self { jd })
    }

    /// Gets the Julian Date value, referenced to UT.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.jd
    }

    /// Days elapsed since the J2000.0 epoch (can be negative).
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.jd - J2000_JDN
    }
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    // The Gregorian reform skipped these ten calendar dates
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in the Gregorian calendar",
        ));
    }

    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year, is_gregorian_date(year, month, day)) {
                29
            } else {
                28
            }
        }
    };
    Ok(days)
}

/// Greenwich Mean Sidereal Time in degrees for the given Julian date.
///
/// Standard polynomial approximation referenced to J2000.0 with the mean
/// sidereal rate of 360.98564736629 degrees per day; result normalized
/// to [0, 360).
#[must_use]
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> f64 {
    normalize_degrees(280.46061837 + 360.98564736629 * jd.days_since_j2000())
}

/// Local Mean Sidereal Time in degrees for an observer longitude.
///
/// LST = GMST + longitude (degrees, East-positive), normalized to [0, 360).
#[must_use]
pub fn local_sidereal_time(jd: JulianDate, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(jd) + longitude)
}

/// Length of one mean sidereal day as a chrono duration.
///
/// Millisecond resolution; event times carry the same resolution.
#[must_use]
pub fn sidereal_day() -> Duration {
    Duration::milliseconds((SIDEREAL_DAY_HOURS * 3_600_000.0).round() as i64)
}

/// Converts a sidereal rotation angle in degrees to the solar-clock duration
/// over which the sky turns through that angle (15 degrees per sidereal hour).
#[must_use]
pub fn duration_for_rotation(degrees: f64) -> Duration {
    let solar_hours = degrees / 15.0 * SIDEREAL_TO_SOLAR;
    Duration::milliseconds((solar_hours * 3_600_000.0).round() as i64)
}

/// First UTC instant at or after `anchor` at which the observer's Local
/// Sidereal Time equals `target_lst_degrees`.
///
/// This inverts the LST relation: the sky rotates at the sidereal rate, so
/// the wait from `anchor` is the normalized angular gap converted through
/// [`duration_for_rotation`]. Used to place meridian transits (LST = RA).
///
/// # Errors
/// Returns error if `anchor` cannot be expressed as a Julian date
/// (unreachable for chrono instants; kept explicit).
pub fn instant_of_sidereal_angle(
    anchor: DateTime<Utc>,
    longitude: f64,
    target_lst_degrees: f64,
) -> Result<DateTime<Utc>> {
    let jd = JulianDate::from_datetime(&anchor)?;
    let gap = normalize_degrees(target_lst_degrees - local_sidereal_time(jd, longitude));
    Ok(anchor + duration_for_rotation(gap))
}
