use std::fmt;

use serde::Serialize;

use crate::dice::RandomSource;
use crate::error::{CombatError, Result};
use crate::teleport::{TeleportOutcome, TeleportStrategy};

/// A defender's answer to one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub value: i32,
    pub dodged: bool,
}

impl Block {
    pub fn parried(value: i32) -> Self {
        Self {
            value,
            dodged: false,
        }
    }
}

/// A combat participant: identity, health, roll bounds and teleport strategy.
///
/// Roll bounds may be zero, meaning the warrior never rolls above zero on
/// that side (it cannot hurt, or cannot block).
#[derive(Debug, Clone, PartialEq)]
pub struct Warrior {
    name: String,
    health: i32,
    attack_max: i32,
    block_max: i32,
    teleport: Option<TeleportStrategy>,
}

fn validated_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CombatError::invalid("name must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn check_amount(what: &str, amount: i32) -> Result<()> {
    if amount < 0 {
        return Err(CombatError::invalid(format!(
            "{} amount must not be negative, got {}",
            what, amount
        )));
    }
    Ok(())
}

impl Warrior {
    pub fn new(name: &str, health: i32, attack_max: i32, block_max: i32) -> Result<Self> {
        if health <= 0 {
            return Err(CombatError::invalid(format!(
                "starting health must be positive, got {}",
                health
            )));
        }
        if attack_max < 0 || block_max < 0 {
            return Err(CombatError::invalid(format!(
                "roll bounds must not be negative, got attack {} block {}",
                attack_max, block_max
            )));
        }
        Ok(Self {
            name: validated_name(name)?,
            health,
            attack_max,
            block_max,
            teleport: None,
        })
    }

    pub fn with_teleport(mut self, strategy: TeleportStrategy) -> Self {
        self.teleport = Some(strategy);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trims surrounding whitespace; blank names are rejected.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validated_name(name)?;
        Ok(())
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn attack_max(&self) -> i32 {
        self.attack_max
    }

    pub fn block_max(&self) -> i32 {
        self.block_max
    }

    pub fn teleport_strategy(&self) -> Option<TeleportStrategy> {
        self.teleport
    }

    fn roll(dice: &mut dyn RandomSource, max: i32) -> Result<i32> {
        if max == 0 {
            return Ok(0);
        }
        dice.roll_uniform_int(max)
    }

    pub fn roll_attack(&self, dice: &mut dyn RandomSource) -> Result<i32> {
        Self::roll(dice, self.attack_max)
    }

    pub fn roll_block(&self, dice: &mut dyn RandomSource) -> Result<i32> {
        Self::roll(dice, self.block_max)
    }
}

impl fmt::Display for Warrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (health {}, attack max {}, block max {}, {})",
            self.name,
            self.health,
            self.attack_max,
            self.block_max,
            if self.health > 0 { "alive" } else { "fallen" }
        )
    }
}

/// Capability surface the combat engine drives.
///
/// Implementors expose their base [`Warrior`] record; everything except
/// `block` is normally left to the provided methods.
pub trait Combatant {
    fn warrior(&self) -> &Warrior;

    fn warrior_mut(&mut self) -> &mut Warrior;

    fn attack(&self, dice: &mut dyn RandomSource) -> Result<i32> {
        self.warrior().roll_attack(dice)
    }

    fn block(&self, dice: &mut dyn RandomSource) -> Result<Block> {
        self.warrior().roll_block(dice).map(Block::parried)
    }

    fn is_alive(&self) -> bool {
        self.warrior().health > 0
    }

    fn apply_damage(&mut self, amount: i32) -> Result<()> {
        check_amount("damage", amount)?;
        let w = self.warrior_mut();
        w.health = w.health.saturating_sub(amount);
        Ok(())
    }

    fn heal(&mut self, amount: i32) -> Result<()> {
        check_amount("heal", amount)?;
        let w = self.warrior_mut();
        w.health = w.health.saturating_add(amount);
        Ok(())
    }

    fn teleport(&self) -> Result<TeleportOutcome> {
        let w = self.warrior();
        match w.teleport {
            Some(strategy) => Ok(strategy.teleport()),
            None => Err(CombatError::illegal(format!(
                "{} has no teleport strategy assigned",
                w.name
            ))),
        }
    }

    fn set_teleport_strategy(&mut self, strategy: TeleportStrategy) {
        self.warrior_mut().teleport = Some(strategy);
    }
}

impl Combatant for Warrior {
    fn warrior(&self) -> &Warrior {
        self
    }

    fn warrior_mut(&mut self) -> &mut Warrior {
        self
    }
}
