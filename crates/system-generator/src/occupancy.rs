//! Gas giant occupancy assignment.
//!
//! Walks a completed orbit sequence in two passes: the defining giant
//! claims the seed orbit, then every still-empty orbit is rolled once
//! against an arrangement-specific threshold, small orbits (inside the
//! snow line) before large ones.

use dice::Roller;
use serde::{Deserialize, Serialize};
use units::Length;

use crate::arrangement::GiantArrangement;
use crate::boundary::SystemBoundary;
use crate::sequence::OrbitSequence;

/// A gas giant occupying one orbit.
///
/// Carries the context its sizing depends on (host luminosity, orbit
/// radius, snow line) plus the bonus-eligibility flag; the size and mass
/// rolls themselves happen downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasGiant {
    /// Host star luminosity (L☉)
    pub luminosity: f64,
    pub orbit: Length,
    pub snow_line: Length,
    /// Qualifies for the enhanced sizing roll
    pub bonus_eligible: bool,
}

/// Which orbits hold gas giants, slot-for-slot with an [`OrbitSequence`].
///
/// Slot `i` describes the orbit at sequence index `i`, so the key set is
/// exactly the sequence's radii by construction. Mutated only by
/// [`assign_gas_giants`], read-only afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrbitOccupancy {
    slots: Vec<Option<GasGiant>>,
}

impl OrbitOccupancy {
    /// All-empty occupancy for a sequence of `orbit_count` orbits.
    pub fn empty(orbit_count: usize) -> Self {
        Self {
            slots: vec![None; orbit_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The giant at sequence index `index`, if any.
    pub fn occupant(&self, index: usize) -> Option<&GasGiant> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// All slots in sequence order, empty or not.
    pub fn slots(&self) -> impl Iterator<Item = Option<&GasGiant>> {
        self.slots.iter().map(|slot| slot.as_ref())
    }

    /// Occupied slots only, as (sequence index, giant) pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &GasGiant)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|giant| (index, giant)))
    }

    pub fn giant_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    fn place(&mut self, index: usize, giant: GasGiant) {
        debug_assert!(self.slots[index].is_none(), "orbit already occupied");
        self.slots[index] = Some(giant);
    }
}

/// Whether the giant at sequence index `index` qualifies for the
/// enhanced sizing roll.
///
/// Eligible at or inside the snow line. Outside it, eligible only when
/// the sequence-preceding orbit lies strictly inside the snow line — the
/// giant sits just past the line, next to an icy inner neighbor. The rule
/// is positional: it looks at the previous index in the final ordering,
/// not merely at radii.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `sequence`.
pub fn bonus_eligible(sequence: &OrbitSequence, index: usize, snow_line: Length) -> bool {
    let radius = sequence.radii()[index];
    if radius <= snow_line {
        return true;
    }
    index > 0 && sequence.radii()[index - 1] < snow_line
}

/// Assign gas giants to a completed orbit sequence.
///
/// Pass 1 places the defining giant at `first_giant` (when the
/// arrangement has one). Pass 2 rolls 3d6 once per remaining orbit
/// against the arrangement's thresholds, small orbits in ascending
/// order, then large orbits in ascending order. Orbits exactly on the
/// snow line belong to neither partition and stay unplaced.
pub fn assign_gas_giants<R: Roller + ?Sized>(
    arrangement: GiantArrangement,
    sequence: &OrbitSequence,
    boundary: &SystemBoundary,
    luminosity: f64,
    first_giant: Option<Length>,
    roller: &mut R,
) -> OrbitOccupancy {
    let snow_line = boundary.snow_line();
    let mut contents = OrbitOccupancy::empty(sequence.len());

    // Pass 1: defining giant at the seed radius
    if arrangement.has_defining_giant() {
        if let Some(orbit) = first_giant {
            if let Some(index) = sequence.position_of(orbit) {
                let giant = GasGiant {
                    luminosity,
                    orbit,
                    snow_line,
                    bonus_eligible: bonus_eligible(sequence, index, snow_line),
                };
                contents.place(index, giant);
            }
        }
    }

    // Pass 2: secondary giants on the orbits still empty
    let unfilled: Vec<usize> = (0..sequence.len())
        .filter(|&index| contents.occupant(index).is_none())
        .collect();
    let small_orbits = unfilled
        .iter()
        .copied()
        .filter(|&index| sequence.radii()[index] < snow_line);
    let large_orbits = unfilled
        .iter()
        .copied()
        .filter(|&index| sequence.radii()[index] > snow_line);

    if let Some(threshold) = arrangement.small_orbit_threshold() {
        for index in small_orbits {
            if roller.roll(3, 0) <= threshold {
                let giant = GasGiant {
                    luminosity,
                    orbit: sequence.radii()[index],
                    snow_line,
                    // Inside the snow line, always eligible
                    bonus_eligible: true,
                };
                contents.place(index, giant);
            }
        }
    }

    if let Some(threshold) = arrangement.large_orbit_threshold() {
        for index in large_orbits {
            if roller.roll(3, 0) <= threshold {
                let giant = GasGiant {
                    luminosity,
                    orbit: sequence.radii()[index],
                    snow_line,
                    bonus_eligible: bonus_eligible(sequence, index, snow_line),
                };
                contents.place(index, giant);
            }
        }
    }

    contents
}
