//! Pretty-print one generated orbital layout
//!
//! Usage: cargo run -p system-generator --example show_system [seed]

use system_generator::{ForbiddenZone, PlanetSystem, SystemBoundary};
use units::Length;

fn main() {
    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    // A binary companion carves out 1-2 AU
    let luminosity = 1.0;
    let boundary = SystemBoundary::new(
        Length::from_au(0.2),
        Length::from_au(20.0),
        Length::from_au(2.7),
        Some(ForbiddenZone::new(Length::from_au(1.0), Length::from_au(2.0))),
    )
    .expect("valid boundary");

    let system = PlanetSystem::generate_seeded(boundary, luminosity, seed)
        .expect("generation within the orbit cap");

    println!("--------------------");
    println!(" Planet System Info ");
    println!("--------------------");
    println!("Seed:           {seed}");
    println!("GG arrangement: {}", system.arrangement);
    match system.first_giant_orbit {
        Some(orbit) => println!("First GG orbit: {:.3} AU", orbit.to_au()),
        None => println!("First GG orbit: -"),
    }
    println!("Orbits:         {}", system.orbits.len());

    for (radius, occupant) in system.orbit_contents() {
        match occupant {
            Some(giant) if giant.bonus_eligible => {
                println!("  {:8.3} AU  gas giant (bonus eligible)", radius.to_au())
            }
            Some(_) => println!("  {:8.3} AU  gas giant", radius.to_au()),
            None => println!("  {:8.3} AU  empty", radius.to_au()),
        }
    }
}
