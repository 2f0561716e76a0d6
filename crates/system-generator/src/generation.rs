//! Generation session: the full pipeline from boundary to occupied orbits.

use dice::{DiceRoller, Roller};
use serde::Serialize;
use thiserror::Error;
use units::Length;

use crate::arrangement::GiantArrangement;
use crate::boundary::SystemBoundary;
use crate::occupancy::{GasGiant, OrbitOccupancy, assign_gas_giants};
use crate::sequence::{GrowthDirection, MAX_ORBITS_PER_DIRECTION, OrbitSequence, build_sequence};

/// Failures during an already-configured generation session.
///
/// Boundary problems are caught earlier, by [`SystemBoundary::new`];
/// the only way a session itself fails is the defensive growth cap,
/// which signals an internal invariant violation rather than an
/// exhausted (terminated) growth direction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error(
        "{direction} orbit growth exceeded the defensive cap of {MAX_ORBITS_PER_DIRECTION} orbits"
    )]
    OrbitCapExceeded { direction: GrowthDirection },
}

/// Radius of the defining gas giant, when the arrangement has one.
///
/// One dice roll per placed giant, none for `None`:
///
/// - `Conventional`: `(1 + 0.05 × 2d6−2) × snow line` — just past the line.
/// - `Eccentric`: `0.125 × 1d6 × snow line` — scattered well inside it.
/// - `Epistellar`: `0.1 × 3d6 × inner limit` — migrated in close.
///
/// The result is deliberately not checked against admissibility; the
/// defining giant anchors the whole sequence wherever it lands.
pub fn place_first_giant<R: Roller + ?Sized>(
    arrangement: GiantArrangement,
    boundary: &SystemBoundary,
    roller: &mut R,
) -> Option<Length> {
    match arrangement {
        GiantArrangement::None => None,
        GiantArrangement::Conventional => {
            Some((1.0 + 0.05 * f64::from(roller.roll(2, -2))) * boundary.snow_line())
        }
        GiantArrangement::Eccentric => {
            Some(0.125 * f64::from(roller.roll(1, 0)) * boundary.snow_line())
        }
        GiantArrangement::Epistellar => {
            Some(0.1 * f64::from(roller.roll(3, 0)) * boundary.inner_limit())
        }
    }
}

/// A generated orbital layout: the ordered orbit radii and which of them
/// hold gas giants.
///
/// Produced whole by [`PlanetSystem::generate`]; no partial results exist.
/// Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetSystem {
    pub boundary: SystemBoundary,
    /// Host star luminosity (L☉), forwarded to every placed giant
    pub luminosity: f64,
    pub arrangement: GiantArrangement,
    /// Seed radius of the defining giant; `None` for arrangement `None`
    pub first_giant_orbit: Option<Length>,
    pub orbits: OrbitSequence,
    pub contents: OrbitOccupancy,
}

impl PlanetSystem {
    /// Run the full generation pipeline against one roller.
    ///
    /// Every stage draws from the same roller in a fixed order —
    /// arrangement, first giant, inward growth, outward growth, then
    /// occupancy (small orbits before large, each ascending) — so a
    /// seeded roller reproduces the same system bit for bit.
    pub fn generate<R: Roller + ?Sized>(
        boundary: SystemBoundary,
        luminosity: f64,
        roller: &mut R,
    ) -> Result<Self, GenerationError> {
        let arrangement = GiantArrangement::sample(roller);
        let first_giant_orbit = place_first_giant(arrangement, &boundary, roller);
        let orbits = build_sequence(&boundary, first_giant_orbit, roller)?;
        let contents = assign_gas_giants(
            arrangement,
            &orbits,
            &boundary,
            luminosity,
            first_giant_orbit,
            roller,
        );

        Ok(Self {
            boundary,
            luminosity,
            arrangement,
            first_giant_orbit,
            orbits,
            contents,
        })
    }

    /// Generate with a ChaCha roller seeded from `seed`.
    pub fn generate_seeded(
        boundary: SystemBoundary,
        luminosity: f64,
        seed: u64,
    ) -> Result<Self, GenerationError> {
        let mut roller = DiceRoller::seeded(seed);
        Self::generate(boundary, luminosity, &mut roller)
    }

    /// Orbits paired with their occupants, in ascending radius order.
    pub fn orbit_contents(&self) -> impl Iterator<Item = (Length, Option<&GasGiant>)> {
        self.orbits
            .radii()
            .iter()
            .copied()
            .zip(self.contents.slots())
    }

    pub fn gas_giant_count(&self) -> usize {
        self.contents.giant_count()
    }
}
