use dice::{DiceRoller, ScriptedRoller};

use crate::GiantArrangement;

#[test]
fn test_sample_thresholds() {
    // Spot checks across every band of the 3d6 table
    let cases = [
        (3, GiantArrangement::None),
        (10, GiantArrangement::None),
        (11, GiantArrangement::Conventional),
        (12, GiantArrangement::Conventional),
        (13, GiantArrangement::Eccentric),
        (14, GiantArrangement::Eccentric),
        (15, GiantArrangement::Epistellar),
        (16, GiantArrangement::Epistellar),
        (18, GiantArrangement::Epistellar),
    ];
    for (roll, expected) in cases {
        let mut roller = ScriptedRoller::new(&[roll]);
        assert_eq!(
            GiantArrangement::sample(&mut roller),
            expected,
            "roll {roll} misclassified"
        );
    }
}

#[test]
fn test_sample_is_monotonic_in_the_roll() {
    fn rank(arrangement: GiantArrangement) -> u8 {
        match arrangement {
            GiantArrangement::None => 0,
            GiantArrangement::Conventional => 1,
            GiantArrangement::Eccentric => 2,
            GiantArrangement::Epistellar => 3,
        }
    }

    let mut previous = 0;
    for roll in 3..=18 {
        let mut roller = ScriptedRoller::new(&[roll]);
        let current = rank(GiantArrangement::sample(&mut roller));
        assert!(
            current >= previous,
            "arrangement downgraded between roll {} and {roll}",
            roll - 1
        );
        previous = current;
    }
}

#[test]
fn test_sample_consumes_one_roll() {
    let mut roller = ScriptedRoller::new(&[12]);
    GiantArrangement::sample(&mut roller);
    assert_eq!(roller.remaining(), 0);
}

#[test]
fn test_sample_distribution_favors_none() {
    // P(3d6 <= 10) = 0.5, so None should dominate but not monopolize
    let mut roller = DiceRoller::seeded(42);
    let mut none_count = 0;
    for _ in 0..1000 {
        if GiantArrangement::sample(&mut roller) == GiantArrangement::None {
            none_count += 1;
        }
    }
    assert!(
        (350..=650).contains(&none_count),
        "expected roughly half None, got {none_count}/1000"
    );
}

#[test]
fn test_occupancy_thresholds() {
    use GiantArrangement::*;

    assert_eq!(None.small_orbit_threshold(), Option::None);
    assert_eq!(Conventional.small_orbit_threshold(), Option::None);
    assert_eq!(Eccentric.small_orbit_threshold(), Some(8));
    assert_eq!(Epistellar.small_orbit_threshold(), Some(6));

    assert_eq!(None.large_orbit_threshold(), Option::None);
    assert_eq!(Conventional.large_orbit_threshold(), Some(15));
    assert_eq!(Eccentric.large_orbit_threshold(), Some(14));
    assert_eq!(Epistellar.large_orbit_threshold(), Some(14));
}

#[test]
fn test_defining_giant_presence() {
    assert!(!GiantArrangement::None.has_defining_giant());
    assert!(GiantArrangement::Conventional.has_defining_giant());
    assert!(GiantArrangement::Eccentric.has_defining_giant());
    assert!(GiantArrangement::Epistellar.has_defining_giant());
}

#[test]
fn test_display() {
    assert_eq!(GiantArrangement::Epistellar.to_string(), "Epistellar");
    assert_eq!(GiantArrangement::None.to_string(), "None");
}

// Quick sanity that a dry script fails loudly rather than misclassifying
#[test]
#[should_panic(expected = "scripted roller exhausted")]
fn test_sample_requires_a_roll() {
    let mut roller = ScriptedRoller::new(&[]);
    GiantArrangement::sample(&mut roller);
}
