//! Procedural gas giant orbital layout generation.
//!
//! Given a star's zone limits, snow line, and luminosity (plus an optional
//! forbidden band carved out by a companion), this crate produces a
//! rule-constrained orbital layout: an ordered list of stable orbit radii
//! and a mapping of which orbits hold gas giants.
//!
//! The pipeline runs in four stages, all drawing dice from one
//! [`dice::Roller`] in a fixed order, so a seeded roller reproduces the
//! same system bit for bit:
//!
//! 1. [`GiantArrangement::sample`] — one roll classifying the system.
//! 2. [`generation::place_first_giant`] — the defining giant's radius.
//! 3. [`sequence::build_sequence`] — orbit radii grown inward and outward
//!    from the seed, spaced by the 3d6 spacing table.
//! 4. [`occupancy::assign_gas_giants`] — secondary giants rolled per orbit.
//!
//! [`PlanetSystem::generate`] ties the stages together.

pub mod arrangement;
pub mod boundary;
pub mod generation;
pub mod occupancy;
pub mod sequence;
pub mod spacing;

// Re-export the pipeline surface at crate root
pub use arrangement::GiantArrangement;
pub use boundary::{BoundaryError, ForbiddenZone, SystemBoundary};
pub use generation::{GenerationError, PlanetSystem, place_first_giant};
pub use occupancy::{GasGiant, OrbitOccupancy, assign_gas_giants, bonus_eligible};
pub use sequence::{
    GrowthDirection, MIN_ORBIT_GAP_AU, OrbitSequence, build_sequence, grow_inward, grow_outward,
};
pub use spacing::spacing_multiplier;

#[cfg(test)]
mod arrangement_test;
#[cfg(test)]
mod occupancy_test;
