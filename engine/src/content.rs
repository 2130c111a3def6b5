use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dodge::DodgeWarrior;
use crate::error::CombatError;
use crate::teleport::TeleportStrategy;
use crate::warrior::{Combatant, Warrior};

/// Construction inputs for one fighter. A `dodge_chance` makes it a dodger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FighterSpec {
    pub name: String,
    pub health: i32,
    pub attack_max: i32,
    pub block_max: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dodge_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teleport: Option<TeleportStrategy>,
}

impl FighterSpec {
    pub fn build(&self) -> Result<Box<dyn Combatant>, CombatError> {
        let mut fighter: Box<dyn Combatant> = match self.dodge_chance {
            Some(chance) => Box::new(DodgeWarrior::new(
                &self.name,
                self.health,
                self.attack_max,
                self.block_max,
                chance,
            )?),
            None => Box::new(Warrior::new(
                &self.name,
                self.health,
                self.attack_max,
                self.block_max,
            )?),
        };
        if let Some(strategy) = self.teleport {
            fighter.set_teleport_strategy(strategy);
        }
        Ok(fighter)
    }
}

pub type Roster = IndexMap<String, FighterSpec>;

pub fn builtin_roster() -> Result<Roster> {
    serde_yaml::from_str(include_str!("../content/roster.yaml"))
        .context("failed to parse built-in roster")
}

pub fn find_fighter<'a>(roster: &'a Roster, id: &str) -> Option<&'a FighterSpec> {
    roster
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(id))
        .map(|(_, spec)| spec)
}
