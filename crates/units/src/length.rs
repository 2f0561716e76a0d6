use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const AU_TO_KM: f64 = 1.496e8;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// A distance quantity with astronomical units (AU) as the base unit.
///
/// Zone limits, orbital radii, and orbit separations are all `Length`
/// values, which keeps the spacing arithmetic honest: a radius times a
/// dimensionless spacing factor is a radius, and the difference of two
/// radii is a separation.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let snow_line = Length::from_au(2.7);
/// let orbit = snow_line * 1.4;
/// assert!(orbit > snow_line);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / AU_TO_KM)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }

    /// Whether the length is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
