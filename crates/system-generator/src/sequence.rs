//! Orbit sequence construction.
//!
//! Grows an ordered list of orbit radii from a seed: outward only when the
//! system has no defining giant (seeded at the inner limit), otherwise
//! inward and outward from the defining giant's radius. Each step rolls
//! 3d6 against the spacing table, then falls back through fixed spacing
//! tiers before giving up on that direction.

use dice::Roller;
use serde::Serialize;
use units::Length;

use crate::boundary::SystemBoundary;
use crate::generation::GenerationError;
use crate::spacing::spacing_multiplier;

/// Minimum separation between adjacent orbits, in AU.
pub const MIN_ORBIT_GAP_AU: f64 = 0.15;

/// Hard cap on orbits grown per direction.
///
/// Each accepted orbit consumes at least [`MIN_ORBIT_GAP_AU`] of a bounded
/// admissible zone, so growth terminates on any sane boundary; the cap
/// exists to fail loudly instead of spinning if that stops holding.
pub const MAX_ORBITS_PER_DIRECTION: usize = 256;

/// Minimal-step orbits sit exactly one gap from their neighbor, and float
/// rounding can land the measured gap a hair under the constant.
const GAP_TOLERANCE_AU: f64 = 1e-9;

/// Direction a sequence was growing when something went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrowthDirection {
    Inward,
    Outward,
}

impl std::fmt::Display for GrowthDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inward => write!(f, "inward"),
            Self::Outward => write!(f, "outward"),
        }
    }
}

/// An ordered sequence of orbit radii.
///
/// Strictly increasing, adjacent radii at least [`MIN_ORBIT_GAP_AU`]
/// apart. [`build_sequence`] is the sole producer during generation;
/// the sequence is read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrbitSequence {
    radii: Vec<Length>,
}

impl OrbitSequence {
    /// Build a sequence directly from a radius list, sorting ascending.
    ///
    /// For tests and manual system construction; generated sequences come
    /// from [`build_sequence`].
    pub fn from_radii(mut radii: Vec<Length>) -> Self {
        radii.sort_by(|a, b| {
            a.to_au()
                .partial_cmp(&b.to_au())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { radii }
    }

    pub fn radii(&self) -> &[Length] {
        &self.radii
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    pub fn innermost(&self) -> Option<Length> {
        self.radii.first().copied()
    }

    pub fn outermost(&self) -> Option<Length> {
        self.radii.last().copied()
    }

    /// Index of the orbit at exactly `radius`, if present.
    pub fn position_of(&self, radius: Length) -> Option<usize> {
        self.radii.iter().position(|&r| r == radius)
    }

    /// Whether the ordering and minimum-gap invariants hold.
    pub fn is_well_spaced(&self) -> bool {
        self.radii.windows(2).all(|pair| {
            pair[1] > pair[0] && (pair[1] - pair[0]).to_au() >= MIN_ORBIT_GAP_AU - GAP_TOLERANCE_AU
        })
    }
}

/// Construct the full orbit sequence for a system.
///
/// With a defining giant the seed is its radius and both directions are
/// grown (inward rolls first); without one the seed is the inner limit
/// and growth is outward only. The seed always appears in the result,
/// even when it is itself inadmissible — defining giants are placed
/// without a zone check and anchor the sequence regardless.
pub fn build_sequence<R: Roller + ?Sized>(
    boundary: &SystemBoundary,
    first_giant: Option<Length>,
    roller: &mut R,
) -> Result<OrbitSequence, GenerationError> {
    let radii = match first_giant {
        Some(seed) => {
            let mut radii = grow_inward(boundary, seed, roller)?;
            radii.push(seed);
            radii.extend(grow_outward(boundary, seed, roller)?);
            radii
        }
        None => {
            let seed = boundary.inner_limit();
            let mut radii = vec![seed];
            radii.extend(grow_outward(boundary, seed, roller)?);
            radii
        }
    };

    let sequence = OrbitSequence { radii };
    debug_assert!(sequence.is_well_spaced());
    Ok(sequence)
}

/// Outcome of one attempt to extend the sequence in a direction.
enum StepOutcome {
    Accepted(Length),
    Exhausted,
}

/// Fallback tiers for an outward step, tried in order.
enum OutwardStep {
    RollingSpacing,
    TryingFallback1,
    TryingFallback2,
    TryingMinimalStep,
}

/// Fallback tiers for an inward step.
enum InwardStep {
    RollingSpacing,
    TryingFallback,
}

fn accepts_outward(boundary: &SystemBoundary, current: Length, candidate: Length) -> bool {
    boundary.is_admissible(candidate) && (candidate - current).to_au() >= MIN_ORBIT_GAP_AU
}

fn accepts_inward(boundary: &SystemBoundary, current: Length, candidate: Length) -> bool {
    boundary.is_admissible(candidate) && (current - candidate).to_au() >= MIN_ORBIT_GAP_AU
}

fn next_outward<R: Roller + ?Sized>(
    boundary: &SystemBoundary,
    current: Length,
    roller: &mut R,
) -> StepOutcome {
    let mut step = OutwardStep::RollingSpacing;
    loop {
        step = match step {
            OutwardStep::RollingSpacing => {
                let candidate = current * spacing_multiplier(roller.roll(3, 0));
                if accepts_outward(boundary, current, candidate) {
                    return StepOutcome::Accepted(candidate);
                }
                OutwardStep::TryingFallback1
            }
            OutwardStep::TryingFallback1 => {
                let candidate = current * 1.4;
                if accepts_outward(boundary, current, candidate) {
                    return StepOutcome::Accepted(candidate);
                }
                OutwardStep::TryingFallback2
            }
            OutwardStep::TryingFallback2 => {
                let candidate = current * 2.0;
                if accepts_outward(boundary, current, candidate) {
                    return StepOutcome::Accepted(candidate);
                }
                OutwardStep::TryingMinimalStep
            }
            OutwardStep::TryingMinimalStep => {
                // Takes current + 0.15, but only when current * 1.4 is also
                // admissible. The second check is look-ahead on future
                // feasibility, not on the chosen orbit.
                let candidate = current + Length::from_au(MIN_ORBIT_GAP_AU);
                if boundary.is_admissible(candidate) && boundary.is_admissible(current * 1.4) {
                    return StepOutcome::Accepted(candidate);
                }
                return StepOutcome::Exhausted;
            }
        };
    }
}

fn next_inward<R: Roller + ?Sized>(
    boundary: &SystemBoundary,
    current: Length,
    roller: &mut R,
) -> StepOutcome {
    let mut step = InwardStep::RollingSpacing;
    loop {
        step = match step {
            InwardStep::RollingSpacing => {
                let candidate = current / spacing_multiplier(roller.roll(3, 0));
                if accepts_inward(boundary, current, candidate) {
                    return StepOutcome::Accepted(candidate);
                }
                InwardStep::TryingFallback
            }
            InwardStep::TryingFallback => {
                // One narrower fallback than outward growth: inner space is
                // scarcer, bounded below by the inner limit.
                let candidate = current / 1.4;
                if accepts_inward(boundary, current, candidate) {
                    return StepOutcome::Accepted(candidate);
                }
                return StepOutcome::Exhausted;
            }
        };
    }
}

/// Grow orbits outward from `seed` until no candidate fits.
///
/// Returns the new orbits in ascending order, `seed` excluded.
pub fn grow_outward<R: Roller + ?Sized>(
    boundary: &SystemBoundary,
    seed: Length,
    roller: &mut R,
) -> Result<Vec<Length>, GenerationError> {
    let mut orbits = Vec::new();
    let mut current = seed;
    loop {
        match next_outward(boundary, current, roller) {
            StepOutcome::Accepted(orbit) => {
                if orbits.len() >= MAX_ORBITS_PER_DIRECTION {
                    return Err(GenerationError::OrbitCapExceeded {
                        direction: GrowthDirection::Outward,
                    });
                }
                orbits.push(orbit);
                current = orbit;
            }
            StepOutcome::Exhausted => return Ok(orbits),
        }
    }
}

/// Grow orbits inward from `seed` until no candidate fits.
///
/// Returns the new orbits in ascending order, `seed` excluded.
pub fn grow_inward<R: Roller + ?Sized>(
    boundary: &SystemBoundary,
    seed: Length,
    roller: &mut R,
) -> Result<Vec<Length>, GenerationError> {
    let mut orbits = Vec::new();
    let mut current = seed;
    loop {
        match next_inward(boundary, current, roller) {
            StepOutcome::Accepted(orbit) => {
                if orbits.len() >= MAX_ORBITS_PER_DIRECTION {
                    return Err(GenerationError::OrbitCapExceeded {
                        direction: GrowthDirection::Inward,
                    });
                }
                orbits.push(orbit);
                current = orbit;
            }
            StepOutcome::Exhausted => {
                // Collected outermost-first while walking inward
                orbits.reverse();
                return Ok(orbits);
            }
        }
    }
}
