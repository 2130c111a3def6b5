use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::CombatEngine;
use crate::dice::RandomSource;
use crate::error::{CombatError, Result};
use crate::warrior::Combatant;

/// Outcome of one attacker-vs-defender exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RoundResult {
    pub attacker: String,
    pub defender: String,
    pub attack_roll: i32,
    pub block_roll: i32,
    pub dodged: bool,
    pub damage: i32,
    pub defender_health: i32,
    pub defender_died: bool,
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ROUND] {} → {} atk={} blk={}{} dmg={} hp={}",
            self.attacker,
            self.defender,
            self.attack_roll,
            self.block_roll,
            if self.dodged { " (dodge)" } else { "" },
            self.damage,
            self.defender_health
        )?;
        if self.defender_died {
            f.write_str(" DIED")?;
        }
        Ok(())
    }
}

impl<R: RandomSource> CombatEngine<R> {
    /// Attacker rolls, defender blocks, `max(0, atk - blk)` comes off the
    /// defender's health. Defeated warriors cannot take part.
    pub fn resolve_round(
        &mut self,
        attacker: &dyn Combatant,
        defender: &mut dyn Combatant,
    ) -> Result<RoundResult> {
        for side in [attacker, &*defender] {
            if !side.is_alive() {
                return Err(CombatError::invalid(format!(
                    "{} is already defeated",
                    side.warrior().name()
                )));
            }
        }

        let attack_roll = attacker.attack(&mut self.dice)?;
        let block = defender.block(&mut self.dice)?;
        trace!(attack_roll, block = block.value, dodged = block.dodged, "rolls");

        // A dodge cancels the hit outright, whatever the attack rolled.
        let damage = if block.dodged {
            0
        } else {
            (attack_roll - block.value).max(0)
        };
        defender.apply_damage(damage)?;

        let result = RoundResult {
            attacker: attacker.warrior().name().to_string(),
            defender: defender.warrior().name().to_string(),
            attack_roll,
            block_roll: block.value,
            dodged: block.dodged,
            damage,
            defender_health: defender.warrior().health(),
            defender_died: !defender.is_alive(),
        };
        debug!(
            attacker = %result.attacker,
            defender = %result.defender,
            damage,
            health = result.defender_health,
            "round resolved"
        );
        Ok(result)
    }
}
