use std::fmt;

use tracing::debug;

use crate::dice::RandomSource;
use crate::error::{CombatError, Result};
use crate::teleport::TeleportStrategy;
use crate::warrior::{Block, Combatant, Warrior};

/// Block value reported for a successful dodge; far above any realistic attack.
pub const DODGE_SENTINEL: i32 = 10_000;

/// A warrior that may evade an attack outright. Teleports by default.
#[derive(Debug, Clone, PartialEq)]
pub struct DodgeWarrior {
    base: Warrior,
    dodge_chance: f64,
}

fn check_chance(chance: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(CombatError::invalid(format!(
            "dodge chance must be within [0.0, 1.0], got {}",
            chance
        )));
    }
    Ok(())
}

impl DodgeWarrior {
    pub fn new(
        name: &str,
        health: i32,
        attack_max: i32,
        block_max: i32,
        dodge_chance: f64,
    ) -> Result<Self> {
        check_chance(dodge_chance)?;
        let base = Warrior::new(name, health, attack_max, block_max)?
            .with_teleport(TeleportStrategy::Succeeds);
        Ok(Self { base, dodge_chance })
    }

    pub fn dodge_chance(&self) -> f64 {
        self.dodge_chance
    }

    pub fn set_dodge_chance(&mut self, chance: f64) -> Result<()> {
        check_chance(chance)?;
        self.dodge_chance = chance;
        Ok(())
    }
}

impl Combatant for DodgeWarrior {
    fn warrior(&self) -> &Warrior {
        &self.base
    }

    fn warrior_mut(&mut self) -> &mut Warrior {
        &mut self.base
    }

    // A zero chance never dodges, even on a fraction roll of exactly 0.0.
    fn block(&self, dice: &mut dyn RandomSource) -> Result<Block> {
        let roll = dice.roll_uniform_fraction();
        if self.dodge_chance > 0.0 && roll <= self.dodge_chance {
            debug!(warrior = %self.base.name(), roll, "dodged the attack");
            return Ok(Block {
                value: DODGE_SENTINEL,
                dodged: true,
            });
        }
        self.base.roll_block(dice).map(Block::parried)
    }
}

impl fmt::Display for DodgeWarrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dodge {:.0}%", self.base, self.dodge_chance * 100.0)
    }
}
