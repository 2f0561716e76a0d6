//! Zone limits and orbit admissibility.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::Length;

/// A band of radii destabilized by a companion star.
///
/// Orbits strictly inside the band are rejected; orbits on either edge
/// are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForbiddenZone {
    pub inner: Length,
    pub outer: Length,
}

impl ForbiddenZone {
    pub fn new(inner: Length, outer: Length) -> Self {
        Self { inner, outer }
    }
}

/// Rejected boundary configurations.
///
/// Raised by [`SystemBoundary::new`] before any dice are rolled; a
/// session never starts from a malformed boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    #[error("orbital limits must be positive, got inner {inner} AU, outer {outer} AU")]
    NonPositiveLimits { inner: f64, outer: f64 },

    #[error("inner limit {inner} AU exceeds outer limit {outer} AU")]
    InvertedLimits { inner: f64, outer: f64 },

    #[error("snow line must be positive, got {0} AU")]
    NonPositiveSnowLine(f64),

    #[error("forbidden zone is inverted: inner edge {inner} AU exceeds outer edge {outer} AU")]
    InvertedForbiddenZone { inner: f64, outer: f64 },

    #[error("forbidden zone ({inner} AU, {outer} AU) extends outside the orbital limits")]
    ForbiddenZoneOutOfBounds { inner: f64, outer: f64 },
}

/// Immutable zone parameters for one generation session.
///
/// Validated once at construction; every candidate orbit is then checked
/// against the same fixed limits via [`SystemBoundary::is_admissible`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemBoundary {
    inner_limit: Length,
    outer_limit: Length,
    snow_line: Length,
    forbidden_zone: Option<ForbiddenZone>,
}

impl SystemBoundary {
    /// Validate and freeze a set of zone parameters.
    ///
    /// Requires positive limits with `inner_limit <= outer_limit`, a
    /// positive snow line, and — when present — a forbidden zone whose
    /// edges are ordered and contained in `[inner_limit, outer_limit]`.
    pub fn new(
        inner_limit: Length,
        outer_limit: Length,
        snow_line: Length,
        forbidden_zone: Option<ForbiddenZone>,
    ) -> Result<Self, BoundaryError> {
        if !inner_limit.is_positive() || !outer_limit.is_positive() {
            return Err(BoundaryError::NonPositiveLimits {
                inner: inner_limit.to_au(),
                outer: outer_limit.to_au(),
            });
        }
        if inner_limit > outer_limit {
            return Err(BoundaryError::InvertedLimits {
                inner: inner_limit.to_au(),
                outer: outer_limit.to_au(),
            });
        }
        if !snow_line.is_positive() {
            return Err(BoundaryError::NonPositiveSnowLine(snow_line.to_au()));
        }
        if let Some(zone) = forbidden_zone {
            if zone.inner > zone.outer {
                return Err(BoundaryError::InvertedForbiddenZone {
                    inner: zone.inner.to_au(),
                    outer: zone.outer.to_au(),
                });
            }
            if zone.inner < inner_limit || zone.outer > outer_limit {
                return Err(BoundaryError::ForbiddenZoneOutOfBounds {
                    inner: zone.inner.to_au(),
                    outer: zone.outer.to_au(),
                });
            }
        }

        Ok(Self {
            inner_limit,
            outer_limit,
            snow_line,
            forbidden_zone,
        })
    }

    pub fn inner_limit(&self) -> Length {
        self.inner_limit
    }

    pub fn outer_limit(&self) -> Length {
        self.outer_limit
    }

    pub fn snow_line(&self) -> Length {
        self.snow_line
    }

    pub fn forbidden_zone(&self) -> Option<ForbiddenZone> {
        self.forbidden_zone
    }

    /// Whether an orbit at `radius` is physically admissible.
    ///
    /// Admissible means within `[inner_limit, outer_limit]` and, when a
    /// forbidden zone exists, on or outside one of its edges. Candidates
    /// vary continuously during sequence growth, so this is re-evaluated
    /// for every one.
    pub fn is_admissible(&self, radius: Length) -> bool {
        let in_limits = radius >= self.inner_limit && radius <= self.outer_limit;
        match self.forbidden_zone {
            Some(zone) => in_limits && (radius <= zone.inner || radius >= zone.outer),
            None => in_limits,
        }
    }
}
