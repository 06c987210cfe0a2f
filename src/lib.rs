//! # Star Visibility Library
//!
//! Closed-form visibility calculations for fixed-direction celestial objects:
//! where a star appears in an observer's sky, when it rises, transits, and
//! sets, and during which intervals it clears a minimum altitude.
//!
//! Three layers build on each other:
//! - **Coordinate transform**: equatorial (RA/Dec) to horizontal (Alt/Az)
//!   via local sidereal time, plus the inverse
//! - **Timing engine**: rise/transit/set times from the hour-angle equation
//!   `cos(H0) = -tan(dec)·tan(lat)`, with analytic circumpolar and
//!   never-visible classification (no horizon search, no missed grazes)
//! - **Visibility windows**: the sub-intervals of a query span during which
//!   an object exceeds an altitude threshold, in closed form
//!
//! A small catalog layer ([`catalog`]) adds named stars with magnitude,
//! constellation, and spectral-type filtering, and a batch sweep
//! ([`visibility::visible_stars`]) that shares one sidereal-time evaluation
//! across a whole catalog.
//!
//! Stars are treated as fixed directions on the celestial sphere: no proper
//! motion, precession, refraction, or parallax. Day-to-day drift of event
//! times (about 3m56s earlier per day) emerges from the sidereal/solar rate
//! difference rather than from any per-day correction.
//!
//! ## Quick Start
//!
//! ### Where is a star right now?
//! ```rust
//! use star_visibility::{transform, EquatorialCoordinates, Observer};
//! use chrono::{DateTime, Utc};
//!
//! let vega = EquatorialCoordinates::new(18.615, 38.784).unwrap();
//! let london = Observer::new(51.5074, -0.1278).unwrap();
//! let instant = "2024-08-01T22:00:00Z".parse::<DateTime<Utc>>().unwrap();
//!
//! let position = transform::horizontal_position(vega, london, &instant).unwrap();
//! println!("Altitude: {:.2}°", position.altitude());
//! println!("Azimuth:  {:.2}°", position.azimuth());
//! ```
//!
//! ### When does it rise and set?
//! ```rust
//! use star_visibility::{visibility, EquatorialCoordinates, ObjectTiming, Observer};
//! use chrono::NaiveDate;
//!
//! let sirius = EquatorialCoordinates::new(6.752, -16.716).unwrap();
//! let london = Observer::new(51.5074, -0.1278).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! match visibility::object_timing(sirius, london, date).unwrap() {
//!     ObjectTiming::RisesAndSets { rise, transit, set, max_altitude } => {
//!         println!("Rises {rise}, transits {transit} at {max_altitude:.1}°, sets {set}");
//!     }
//!     ObjectTiming::AlwaysVisible { .. } => println!("Circumpolar"),
//!     ObjectTiming::NeverVisible { .. } => println!("Never rises here"),
//! }
//! ```
//!
//! ### When is it worth observing?
//! ```rust
//! use star_visibility::{visibility, EquatorialCoordinates, Observer, ObservingWindow};
//! use chrono::{DateTime, Utc};
//!
//! let sirius = EquatorialCoordinates::new(6.752, -16.716).unwrap();
//! let london = Observer::new(51.5074, -0.1278).unwrap();
//! let span = ObservingWindow::new(
//!     "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
//!     "2024-01-16T00:00:00Z".parse::<DateTime<Utc>>().unwrap(),
//! )
//! .unwrap();
//!
//! for window in visibility::visibility_windows(sirius, london, span, 15.0).unwrap() {
//!     println!("Above 15°: {} to {}", window.start(), window.end());
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Right ascension**: hours, [0, 24)
//! - **Declination / latitude / altitude**: degrees, [-90, +90]
//! - **Azimuth**: degrees from North through East, [0, 360); 0° by
//!   convention at the geographic poles, where it is undefined
//! - **Longitude**: degrees East-positive, [-180, +180]
//! - **Times**: any `chrono::TimeZone` on input, normalized to UTC
//!   internally; results are UTC with millisecond resolution
//!
//! All calculations are pure functions of their arguments: identical inputs
//! give bit-identical outputs, and no state is shared between calls.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::catalog::{CatalogStar, SearchCriteria};
pub use crate::error::{Error, Result};
pub use crate::types::{
    EquatorialCoordinates, HorizontalCoordinates, ObjectTiming, Observer, ObservingWindow,
};

// Core modules
pub mod error;
pub mod types;

// Calculation modules
pub mod transform;
pub mod visibility;

// Catalog layer
pub mod catalog;

// Angle and time utilities
pub mod angle;
pub mod time;
