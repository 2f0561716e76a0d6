//! Generate a batch of orbital layouts as CSV, one row per system
//!
//! Usage: cargo run -p system-generator --example generate_systems

use system_generator::{PlanetSystem, SystemBoundary};
use units::Length;

fn main() {
    let n_systems = 1000;

    // Sun-like host: snow line at 2.7 AU for L = 1 L☉
    let luminosity = 1.0;
    let boundary = SystemBoundary::new(
        Length::from_au(0.1),
        Length::from_au(40.0),
        Length::from_au(2.7),
        None,
    )
    .expect("valid boundary");

    println!("seed,arrangement,orbits,gas_giants,innermost_au,outermost_au,first_giant_au");

    for seed in 0..n_systems {
        let system = PlanetSystem::generate_seeded(boundary.clone(), luminosity, seed)
            .expect("generation within the orbit cap");

        println!(
            "{},{},{},{},{:.3},{:.3},{}",
            seed,
            system.arrangement,
            system.orbits.len(),
            system.gas_giant_count(),
            system.orbits.innermost().map_or(0.0, |r| r.to_au()),
            system.orbits.outermost().map_or(0.0, |r| r.to_au()),
            system
                .first_giant_orbit
                .map_or_else(|| "-".to_string(), |r| format!("{:.3}", r.to_au())),
        );
    }

    eprintln!("Generated {n_systems} systems");
}
