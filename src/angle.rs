//! Angle conversions, normalization, and sexagesimal parsing helpers.

use crate::{Error, Result};

/// Degrees of sky rotation per hour of right ascension (360° / 24h).
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Converts right-ascension hours to degrees (15 degrees per hour).
#[inline]
#[must_use]
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

/// Converts degrees to right-ascension hours.
#[inline]
#[must_use]
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / DEGREES_PER_HOUR
}

/// Normalizes an angle in degrees to the range [0, 360).
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let mut normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    // Adding the period to a tiny negative remainder can round to 360.0
    if normalized >= 360.0 {
        normalized -= 360.0;
    }
    normalized
}

/// Normalizes a value in hours to the range [0, 24).
#[must_use]
pub fn normalize_hours(hours: f64) -> f64 {
    let mut normalized = hours % 24.0;
    if normalized < 0.0 {
        normalized += 24.0;
    }
    if normalized >= 24.0 {
        normalized -= 24.0;
    }
    normalized
}

/// Normalizes an hour angle in degrees to the range (-180, 180].
#[must_use]
pub fn normalize_hour_angle(degrees: f64) -> f64 {
    let normalized = normalize_degrees(degrees);
    if normalized > 180.0 {
        normalized - 360.0
    } else {
        normalized
    }
}

/// Clamps an `asin`/`acos` argument to [-1, 1].
///
/// Floating-point evaluation of the spherical-trigonometry identities can
/// overshoot the unit interval at exact boundary cases (e.g. 1.0000000002);
/// every inverse-trig call in this crate goes through this clamp.
#[inline]
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Parses an angle string into signed decimal degrees.
///
/// Accepted forms:
/// - plain decimal degrees: `"40.7128"`, `"-74.0060"`
/// - degrees-minutes-seconds: `40°42'46"N`, and the ASCII variant `40d42m46sN`
/// - degrees-minutes: `40°42'N`
///
/// A trailing `S` or `W` hemisphere negates the value. Hemisphere letters are
/// case-insensitive, as are the `d`/`m`/`s` field markers.
///
/// # Errors
/// Returns `UnparsableAngle` if the input matches none of the accepted forms.
///
/// # Example
/// ```
/// # use star_visibility::angle::parse_dms;
/// let lat = parse_dms("40°42'46\"N").unwrap();
/// assert!((lat - 40.712_778).abs() < 1e-4);
/// assert_eq!(parse_dms("-74.006").unwrap(), -74.006);
/// ```
pub fn parse_dms(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(value);
    }

    let unparsable = || Error::UnparsableAngle {
        input: input.to_string(),
    };

    let mut fields: Vec<f64> = Vec::new();
    let mut current = String::new();
    let mut hemisphere: Option<char> = None;
    // Whether a seconds marker (" or s) was already consumed after field 3.
    // Needed to tell the marker in `46s` apart from a South hemisphere.
    let mut seconds_marked = false;

    let mut flush = |current: &mut String, fields: &mut Vec<f64>| -> Result<()> {
        if !current.is_empty() {
            if fields.len() == 3 {
                return Err(Error::UnparsableAngle {
                    input: input.to_string(),
                });
            }
            let value = current
                .parse::<f64>()
                .map_err(|_| Error::UnparsableAngle {
                    input: input.to_string(),
                })?;
            fields.push(value);
            current.clear();
        }
        Ok(())
    };

    for ch in trimmed.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            if hemisphere.is_some() {
                return Err(unparsable());
            }
            current.push(ch);
            continue;
        }
        flush(&mut current, &mut fields)?;
        match ch.to_ascii_uppercase() {
            '°' | 'D' | '\'' | 'M' | ' ' => {}
            '"' => seconds_marked = true,
            'S' if fields.len() == 3 && !seconds_marked && hemisphere.is_none() => {
                seconds_marked = true;
            }
            'N' | 'E' | 'W' | 'S' => {
                if hemisphere.is_some() {
                    return Err(unparsable());
                }
                hemisphere = Some(ch.to_ascii_uppercase());
            }
            _ => return Err(unparsable()),
        }
    }
    flush(&mut current, &mut fields)?;

    if fields.is_empty() {
        return Err(unparsable());
    }

    let degrees = fields[0];
    let minutes = fields.get(1).copied().unwrap_or(0.0);
    let seconds = fields.get(2).copied().unwrap_or(0.0);
    let mut decimal = degrees + minutes / 60.0 + seconds / 3600.0;

    if matches!(hemisphere, Some('S') | Some('W')) {
        decimal = -decimal;
    }
    Ok(decimal)
}
