//! Physical quantities for orbital layout generation.
//!
//! Orbital radii, zone limits, and separations are all distances, so the
//! crate currently provides a single quantity: [`Length`], with astronomical
//! units (AU) as the base unit.

pub mod length;

pub use length::Length;
