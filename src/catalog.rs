//! Star catalog records and search filters.
//!
//! A [`CatalogStar`] couples a name and equatorial coordinates with the
//! photometric attributes used for filtering: apparent magnitude,
//! constellation, and spectral type. Filters compose by chaining or through
//! [`SearchCriteria`], which applies every configured predicate and orders
//! the result brightest-first.

use crate::types::EquatorialCoordinates;

/// A named star with its catalog attributes.
///
/// Magnitude follows the astronomical convention: smaller is brighter
/// (Sirius is -1.46, the naked-eye limit is around +6.5).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogStar {
    name: String,
    coordinates: EquatorialCoordinates,
    magnitude: f64,
    constellation: Option<String>,
    spectral_type: Option<String>,
}

impl CatalogStar {
    /// Creates a catalog entry with no constellation or spectral type.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        coordinates: EquatorialCoordinates,
        magnitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates,
            magnitude,
            constellation: None,
            spectral_type: None,
        }
    }

    /// Sets the constellation name.
    #[must_use]
    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }

    /// Sets the spectral type (e.g. "A0V", "M1.5Iab").
    #[must_use]
    pub fn with_spectral_type(mut self, spectral_type: impl Into<String>) -> Self {
        self.spectral_type = Some(spectral_type.into());
        self
    }

    /// Gets the star name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the equatorial coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> EquatorialCoordinates {
        self.coordinates
    }

    /// Gets the apparent magnitude (smaller is brighter).
    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Gets the constellation name, if known.
    #[must_use]
    pub fn constellation(&self) -> Option<&str> {
        self.constellation.as_deref()
    }

    /// Gets the spectral type, if known.
    #[must_use]
    pub fn spectral_type(&self) -> Option<&str> {
        self.spectral_type.as_deref()
    }

    /// Gets the spectral class: the leading letter of the spectral type,
    /// uppercased (O, B, A, F, G, K, M for main-sequence stars).
    #[must_use]
    pub fn spectral_class(&self) -> Option<char> {
        self.spectral_type
            .as_deref()
            .and_then(|s| s.chars().next())
            .map(|c| c.to_ascii_uppercase())
    }
}

/// Keeps stars at least as bright as `max_magnitude` (magnitude <= limit).
#[must_use]
pub fn filter_by_magnitude(stars: &[CatalogStar], max_magnitude: f64) -> Vec<CatalogStar> {
    stars
        .iter()
        .filter(|star| star.magnitude <= max_magnitude)
        .cloned()
        .collect()
}

/// Keeps stars whose constellation contains `name`, case-insensitively.
/// Stars with no recorded constellation are excluded.
#[must_use]
pub fn filter_by_constellation(stars: &[CatalogStar], name: &str) -> Vec<CatalogStar> {
    let needle = name.to_lowercase();
    stars
        .iter()
        .filter(|star| {
            star.constellation
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keeps stars whose spectral class is one of `classes` (case-insensitive).
/// Stars with no recorded spectral type are excluded.
#[must_use]
pub fn filter_by_spectral_class(stars: &[CatalogStar], classes: &[char]) -> Vec<CatalogStar> {
    stars
        .iter()
        .filter(|star| {
            star.spectral_class()
                .is_some_and(|class| classes.iter().any(|c| c.to_ascii_uppercase() == class))
        })
        .cloned()
        .collect()
}

/// Sorts stars brightest-first (ascending magnitude). NaN magnitudes sort
/// last per IEEE total ordering.
pub fn sort_by_brightness(stars: &mut [CatalogStar]) {
    stars.sort_by(|a, b| a.magnitude.total_cmp(&b.magnitude));
}

/// Combined catalog search: every configured field must match.
///
/// Unset fields match everything, so `SearchCriteria::default()` returns the
/// whole catalog in input order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCriteria {
    /// Faintest magnitude to include (magnitude <= this value).
    pub max_magnitude: Option<f64>,
    /// Brightest magnitude to include (magnitude >= this value).
    pub min_magnitude: Option<f64>,
    /// Case-insensitive substring of the constellation name.
    pub constellation: Option<String>,
    /// Accepted spectral classes (leading letter of the spectral type).
    pub spectral_classes: Option<Vec<char>>,
    /// Orders results brightest-first after filtering.
    pub brightest_first: bool,
}

impl SearchCriteria {
    /// Checks whether a star satisfies every configured predicate.
    #[must_use]
    pub fn matches(&self, star: &CatalogStar) -> bool {
        if let Some(max) = self.max_magnitude {
            if star.magnitude > max {
                return false;
            }
        }
        if let Some(min) = self.min_magnitude {
            if star.magnitude < min {
                return false;
            }
        }
        if let Some(name) = &self.constellation {
            let needle = name.to_lowercase();
            if !star
                .constellation
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if let Some(classes) = &self.spectral_classes {
            if !star
                .spectral_class()
                .is_some_and(|class| classes.iter().any(|c| c.to_ascii_uppercase() == class))
            {
                return false;
            }
        }
        true
    }
}

/// Filters a catalog by `criteria`, sorting last when `brightest_first` is
/// set so the ordering reflects the filtered set.
#[must_use]
pub fn search(stars: &[CatalogStar], criteria: &SearchCriteria) -> Vec<CatalogStar> {
    let mut matched: Vec<CatalogStar> = stars
        .iter()
        .filter(|star| criteria.matches(star))
        .cloned()
        .collect();
    if criteria.brightest_first {
        sort_by_brightness(&mut matched);
    }
    matched
}
