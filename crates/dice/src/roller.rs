//! Six-sided dice rollers over a seedable random stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

/// Source of dice results for the generation pipeline.
///
/// Implementations return the total of `dice` six-sided dice plus
/// `modifier`. The whole generation session draws from a single `Roller`,
/// so the order of roll calls fully determines the output.
pub trait Roller {
    fn roll(&mut self, dice: u32, modifier: i32) -> i32;
}

/// Dice roller backed by a ChaCha stream cipher RNG.
///
/// ChaCha gives identical roll sequences for identical seeds on every
/// platform, which is what makes generated systems reproducible: the
/// generator itself carries no randomness of its own.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: ChaChaRng,
}

impl DiceRoller {
    /// Roller with a fixed seed. Same seed, same roll sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Roller seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaChaRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Roller for DiceRoller {
    fn roll(&mut self, dice: u32, modifier: i32) -> i32 {
        let mut total = modifier;
        for _ in 0..dice {
            total += self.rng.random_range(1..=6);
        }
        total
    }
}

/// Test double that replays a fixed list of roll results.
///
/// Each call to [`Roller::roll`] returns the next scripted value verbatim,
/// as the complete result of the roll (dice count and modifier are
/// ignored). After the script runs out, the roller returns the fallback
/// value if one was given, and panics otherwise — a dry script in a
/// non-fallback roller means the test's roll count is wrong.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    script: Vec<i32>,
    index: usize,
    fallback: Option<i32>,
}

impl ScriptedRoller {
    /// Roller that replays `script` and panics when it runs out.
    pub fn new(script: &[i32]) -> Self {
        Self {
            script: script.to_vec(),
            index: 0,
            fallback: None,
        }
    }

    /// Roller that replays `script`, then returns `fallback` forever.
    pub fn with_fallback(script: &[i32], fallback: i32) -> Self {
        Self {
            script: script.to_vec(),
            index: 0,
            fallback: Some(fallback),
        }
    }

    /// Roller that returns `value` for every roll.
    pub fn constant(value: i32) -> Self {
        Self::with_fallback(&[], value)
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.index)
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, _dice: u32, _modifier: i32) -> i32 {
        match self.script.get(self.index) {
            Some(&value) => {
                self.index += 1;
                value
            }
            None => match self.fallback {
                Some(value) => value,
                None => panic!(
                    "scripted roller exhausted after {} rolls",
                    self.script.len()
                ),
            },
        }
    }
}
