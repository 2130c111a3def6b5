//! Round and encounter resolution.
//!
//! The engine owns the random source for the duration of a fight and only
//! reports structured results; narration and pacing belong to the caller.

mod encounter;
mod round;

pub use encounter::{EncounterOutcome, EncounterReport};
pub use round::RoundResult;

use crate::dice::RandomSource;

/// Safety cap on A-then-B exchanges per encounter.
pub const DEFAULT_MAX_EXCHANGES: u32 = 10_000;

pub struct CombatEngine<R: RandomSource> {
    dice: R,
    max_exchanges: u32,
}

impl<R: RandomSource> CombatEngine<R> {
    pub fn new(dice: R) -> Self {
        Self {
            dice,
            max_exchanges: DEFAULT_MAX_EXCHANGES,
        }
    }

    pub fn with_max_exchanges(mut self, max_exchanges: u32) -> Self {
        self.max_exchanges = max_exchanges;
        self
    }

    pub fn max_exchanges(&self) -> u32 {
        self.max_exchanges
    }

    pub fn dice_mut(&mut self) -> &mut R {
        &mut self.dice
    }

    pub fn into_dice(self) -> R {
        self.dice
    }
}
