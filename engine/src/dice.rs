use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{CombatError, Result};

/// Source of the uniform values every roll in an encounter is drawn from.
pub trait RandomSource {
    /// Uniform integer in `1..=max`. Fails when `max <= 0`.
    fn roll_uniform_int(&mut self, max: i32) -> Result<i32>;

    /// Uniform fraction in `[0, 1)`.
    fn roll_uniform_fraction(&mut self) -> f64;
}

fn check_bound(max: i32) -> Result<()> {
    if max <= 0 {
        return Err(CombatError::invalid(format!(
            "roll bound must be positive, got {}",
            max
        )));
    }
    Ok(())
}

/// Seeded dice; the same seed always replays the same encounter.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for Dice {
    fn roll_uniform_int(&mut self, max: i32) -> Result<i32> {
        check_bound(max)?;
        Ok(self.rng.gen_range(1..=max))
    }

    fn roll_uniform_fraction(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Largest `f64` strictly below 1.0.
const FRACTION_CEILING: f64 = 1.0 - f64::EPSILON / 2.0;

/// Deterministic source for tests and replays.
///
/// Scripted integers are consumed in order, cycling once exhausted, and clamped
/// into `1..=max`. With no integers scripted every roll returns `max`. Fractions
/// behave the same way within `[0, 1)`, defaulting to the value just below 1.0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    ints: Vec<i32>,
    fractions: Vec<f64>,
    next_int: usize,
    next_fraction: usize,
}

impl ScriptedDice {
    pub fn new(ints: Vec<i32>, fractions: Vec<f64>) -> Self {
        Self {
            ints,
            fractions,
            next_int: 0,
            next_fraction: 0,
        }
    }

    pub fn from_ints(ints: Vec<i32>) -> Self {
        Self::new(ints, Vec::new())
    }

    pub fn from_fractions(fractions: Vec<f64>) -> Self {
        Self::new(Vec::new(), fractions)
    }

    /// Every integer roll lands on the top of its range.
    pub fn always_max() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedDice {
    fn roll_uniform_int(&mut self, max: i32) -> Result<i32> {
        check_bound(max)?;
        if self.ints.is_empty() {
            return Ok(max);
        }
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        Ok(value.clamp(1, max))
    }

    fn roll_uniform_fraction(&mut self) -> f64 {
        if self.fractions.is_empty() {
            return FRACTION_CEILING;
        }
        let value = self.fractions[self.next_fraction % self.fractions.len()];
        self.next_fraction += 1;
        value.clamp(0.0, FRACTION_CEILING)
    }
}
