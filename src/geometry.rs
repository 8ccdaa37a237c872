//! Cities in the plane and the distance between them.

use crate::error::{TspError, TspResult};

/// A city at fixed planar coordinates.
///
/// A city's identity is its index in the slice handed to a strategy.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::{City, distance};
///
/// let a = City::new(0.0, 0.0);
/// let b = City::new(3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Euclidean distance between two cities.
pub fn distance(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// Checks that a city set is usable by a strategy needing `min_cities`.
pub(crate) fn validate_cities(cities: &[City], min_cities: usize) -> TspResult<()> {
    if cities.is_empty() {
        return Err(TspError::invalid_input("city set is empty"));
    }
    if cities.len() < min_cities {
        return Err(TspError::invalid_input(format!(
            "need at least {min_cities} cities, got {}",
            cities.len()
        )));
    }
    if let Some(idx) = cities.iter().position(|c| !c.is_finite()) {
        return Err(TspError::invalid_input(format!(
            "city {idx} has non-finite coordinates"
        )));
    }
    Ok(())
}
