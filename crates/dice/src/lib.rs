//! Dice rolling for orbital layout generation.
//!
//! The generator never touches random bits directly; every stochastic
//! decision goes through the [`Roller`] trait as a "roll N six-sided dice,
//! add a modifier" operation. Production code uses [`DiceRoller`] (ChaCha
//! backed, seedable for reproducible systems); tests substitute
//! [`ScriptedRoller`] to force exact roll sequences.

pub mod roller;

pub use roller::{DiceRoller, Roller, ScriptedRoller};
