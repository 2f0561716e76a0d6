//! Gas giant arrangement classification

use dice::Roller;
use serde::{Deserialize, Serialize};

/// How the system's gas giants are arranged.
///
/// Chosen exactly once per system by a single 3d6 roll, immutable
/// thereafter. The category decides where the defining giant anchors and
/// how aggressively secondary giants fill the remaining orbits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GiantArrangement {
    /// No gas giants at all; orbits grow outward from the inner limit.
    None,
    /// A giant just beyond the snow line, where core accretion favors it.
    Conventional,
    /// A giant scattered inward of the snow line.
    Eccentric,
    /// A migrated giant hugging the star near the inner limit.
    Epistellar,
}

impl GiantArrangement {
    /// Classify a system from one 3d6 roll.
    ///
    /// Thresholds are monotonic upgrades: ≤10 `None`, 11–12
    /// `Conventional`, 13–14 `Eccentric`, ≥15 `Epistellar`.
    pub fn sample<R: Roller + ?Sized>(roller: &mut R) -> Self {
        let roll = roller.roll(3, 0);
        let mut arrangement = Self::None;
        if roll > 10 {
            arrangement = Self::Conventional;
        }
        if roll > 12 {
            arrangement = Self::Eccentric;
        }
        if roll > 14 {
            arrangement = Self::Epistellar;
        }
        arrangement
    }

    /// Whether a defining first giant exists for this arrangement.
    pub fn has_defining_giant(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// 3d6 threshold (roll ≤ threshold places a giant) for orbits below
    /// the snow line. `None` means such orbits are never rolled.
    pub fn small_orbit_threshold(&self) -> Option<i32> {
        match self {
            Self::None | Self::Conventional => None,
            Self::Eccentric => Some(8),
            Self::Epistellar => Some(6),
        }
    }

    /// 3d6 threshold for orbits beyond the snow line.
    pub fn large_orbit_threshold(&self) -> Option<i32> {
        match self {
            Self::None => None,
            Self::Conventional => Some(15),
            Self::Eccentric | Self::Epistellar => Some(14),
        }
    }
}

impl std::fmt::Display for GiantArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Conventional => write!(f, "Conventional"),
            Self::Eccentric => write!(f, "Eccentric"),
            Self::Epistellar => write!(f, "Epistellar"),
        }
    }
}
