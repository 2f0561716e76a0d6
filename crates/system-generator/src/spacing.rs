//! Orbital spacing lookup table.

/// Multiplicative spacing factor between adjacent orbits for a 3d6 total.
///
/// Fixed table, monotonic in the roll: low totals pack orbits tightly
/// (×1.4), high totals spread them out to a full doubling.
///
/// # Panics
///
/// Panics when `sum` lies outside the 3d6 range `[3, 18]`. Callers feed
/// dice results straight in, so out-of-range input is a bug in the
/// caller, not a runtime condition to recover from.
pub fn spacing_multiplier(sum: i32) -> f64 {
    match sum {
        3..=4 => 1.4,
        5..=6 => 1.5,
        7..=8 => 1.6,
        9..=12 => 1.7,
        13..=14 => 1.8,
        15..=16 => 1.9,
        17..=18 => 2.0,
        _ => panic!("orbital spacing roll outside the 3d6 range: {sum}"),
    }
}
