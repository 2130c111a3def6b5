pub mod api;
pub mod combat;
pub mod content;
pub mod dice;
pub mod dodge;
pub mod error;
pub mod teleport;
pub mod warrior;

pub use combat::{
    CombatEngine, EncounterOutcome, EncounterReport, RoundResult,
    DEFAULT_MAX_EXCHANGES,
};
pub use dice::{Dice, RandomSource, ScriptedDice};
pub use dodge::{DodgeWarrior, DODGE_SENTINEL};
pub use error::{CombatError, Result};
pub use teleport::{TeleportOutcome, TeleportStrategy};
pub use warrior::{Block, Combatant, Warrior};
