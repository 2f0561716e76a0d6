use dice::ScriptedRoller;
use units::Length;

use crate::arrangement::GiantArrangement;
use crate::boundary::SystemBoundary;
use crate::occupancy::{OrbitOccupancy, assign_gas_giants, bonus_eligible};
use crate::sequence::OrbitSequence;

fn au(value: f64) -> Length {
    Length::from_au(value)
}

fn boundary() -> SystemBoundary {
    SystemBoundary::new(au(0.2), au(10.0), au(3.0), None).unwrap()
}

fn sequence(radii: &[f64]) -> OrbitSequence {
    OrbitSequence::from_radii(radii.iter().map(|&r| au(r)).collect())
}

#[test]
fn test_bonus_inside_snow_line() {
    let seq = sequence(&[1.0, 2.0, 3.5, 6.0]);
    assert!(bonus_eligible(&seq, 0, au(3.0)));
    assert!(bonus_eligible(&seq, 1, au(3.0)));
}

#[test]
fn test_bonus_exactly_on_snow_line() {
    let seq = sequence(&[3.0, 6.0]);
    assert!(bonus_eligible(&seq, 0, au(3.0)));
}

#[test]
fn test_bonus_just_outside_with_icy_neighbor() {
    // 3.5 sits past the snow line but its inner neighbor (2.0) is below it
    let seq = sequence(&[1.0, 2.0, 3.5, 6.0]);
    assert!(bonus_eligible(&seq, 2, au(3.0)));
    // 6.0's neighbor is 3.5, itself outside the line
    assert!(!bonus_eligible(&seq, 3, au(3.0)));
}

#[test]
fn test_bonus_innermost_orbit_outside_snow_line() {
    let seq = sequence(&[3.5, 6.0]);
    assert!(!bonus_eligible(&seq, 0, au(3.0)));
}

#[test]
fn test_bonus_is_positional_not_radial() {
    // Same radius, different neighbor: eligibility flips with the index
    let with_icy_neighbor = sequence(&[2.0, 4.0]);
    let without = sequence(&[3.2, 4.0]);
    assert!(bonus_eligible(&with_icy_neighbor, 1, au(3.0)));
    assert!(!bonus_eligible(&without, 1, au(3.0)));
}

#[test]
fn test_epistellar_assignment() {
    let seq = sequence(&[0.5, 1.0, 2.0, 4.0, 6.0]);
    // Rolls: small orbits 0.5 (6 -> giant) and 1.0 (7 -> empty), then
    // large orbits 4.0 (14 -> giant) and 6.0 (15 -> empty). The defining
    // giant at 2.0 is never rolled.
    let mut roller = ScriptedRoller::new(&[6, 7, 14, 15]);

    let contents = assign_gas_giants(
        GiantArrangement::Epistellar,
        &seq,
        &boundary(),
        1.0,
        Some(au(2.0)),
        &mut roller,
    );

    assert_eq!(contents.len(), seq.len());
    assert_eq!(roller.remaining(), 0);
    assert_eq!(contents.giant_count(), 3);

    let defining = contents.occupant(2).unwrap();
    assert_eq!(defining.orbit, au(2.0));
    assert!(defining.bonus_eligible);

    let small = contents.occupant(0).unwrap();
    assert!(small.bonus_eligible, "small-orbit giants always get the bonus");
    assert!(contents.occupant(1).is_none());

    let large = contents.occupant(3).unwrap();
    assert!(large.bonus_eligible, "icy inner neighbor grants the bonus");
    assert!(contents.occupant(4).is_none());
}

#[test]
fn test_conventional_never_rolls_small_orbits() {
    let seq = sequence(&[0.5, 1.0, 2.0, 4.0, 6.0]);
    // Exactly two scripted rolls, one per large orbit; if a small orbit
    // were rolled the script would run dry and panic.
    let mut roller = ScriptedRoller::new(&[15, 16]);

    let contents = assign_gas_giants(
        GiantArrangement::Conventional,
        &seq,
        &boundary(),
        1.0,
        None,
        &mut roller,
    );

    assert_eq!(roller.remaining(), 0);
    assert_eq!(contents.giant_count(), 1);
    assert!(contents.occupant(3).is_some());
    assert!(contents.occupant(4).is_none());
    for index in 0..3 {
        assert!(contents.occupant(index).is_none());
    }
}

#[test]
fn test_eccentric_small_orbit_threshold() {
    let seq = sequence(&[0.5, 1.0, 2.0]);
    let mut roller = ScriptedRoller::new(&[8, 9, 8]);

    let contents = assign_gas_giants(
        GiantArrangement::Eccentric,
        &seq,
        &boundary(),
        1.0,
        None,
        &mut roller,
    );

    assert_eq!(contents.giant_count(), 2);
    assert!(contents.occupant(0).is_some());
    assert!(contents.occupant(1).is_none());
    assert!(contents.occupant(2).is_some());
}

#[test]
fn test_orbit_on_snow_line_is_never_rolled() {
    // 3.0 equals the snow line: excluded from both partitions, stays empty
    let seq = sequence(&[2.0, 3.0, 6.0]);
    let mut roller = ScriptedRoller::new(&[3, 3]);

    let contents = assign_gas_giants(
        GiantArrangement::Eccentric,
        &seq,
        &boundary(),
        1.0,
        None,
        &mut roller,
    );

    assert_eq!(roller.remaining(), 0);
    assert!(contents.occupant(0).is_some());
    assert!(contents.occupant(1).is_none(), "snow-line orbit must fall through");
    assert!(contents.occupant(2).is_some());
}

#[test]
fn test_arrangement_none_rolls_nothing() {
    let seq = sequence(&[0.5, 1.0, 4.0]);
    let mut roller = ScriptedRoller::new(&[]);

    let contents = assign_gas_giants(
        GiantArrangement::None,
        &seq,
        &boundary(),
        1.0,
        None,
        &mut roller,
    );

    assert_eq!(contents.giant_count(), 0);
    assert_eq!(contents.len(), 3);
}

#[test]
fn test_giants_carry_session_context() {
    let seq = sequence(&[4.0]);
    let mut roller = ScriptedRoller::new(&[3]);

    let contents = assign_gas_giants(
        GiantArrangement::Conventional,
        &seq,
        &boundary(),
        0.72,
        None,
        &mut roller,
    );

    let giant = contents.occupant(0).unwrap();
    assert_eq!(giant.luminosity, 0.72);
    assert_eq!(giant.orbit, au(4.0));
    assert_eq!(giant.snow_line, au(3.0));
}

#[test]
fn test_occupied_iterator_matches_occupants() {
    let seq = sequence(&[0.5, 4.0, 6.0]);
    let mut roller = ScriptedRoller::new(&[3, 18]);

    let contents = assign_gas_giants(
        GiantArrangement::Conventional,
        &seq,
        &boundary(),
        1.0,
        None,
        &mut roller,
    );

    let occupied: Vec<usize> = contents.occupied().map(|(index, _)| index).collect();
    assert_eq!(occupied, vec![1]);
    assert_eq!(contents.slots().count(), 3);
}

#[test]
fn test_empty_occupancy() {
    let contents = OrbitOccupancy::empty(0);
    assert!(contents.is_empty());
    assert_eq!(contents.giant_count(), 0);
    assert!(contents.occupant(0).is_none());
}
