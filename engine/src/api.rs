use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::combat::{CombatEngine, EncounterOutcome, EncounterReport, DEFAULT_MAX_EXCHANGES};
use crate::content::{builtin_roster, find_fighter, FighterSpec, Roster};
use crate::dice::Dice;

fn default_first() -> String {
    "thor".to_string()
}

fn default_second() -> String {
    "loki".to_string()
}

fn default_max_exchanges() -> u32 {
    DEFAULT_MAX_EXCHANGES
}

/// Which two roster fighters meet, and how the dice are seeded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterConfig {
    #[serde(default = "default_first")]
    pub first: String,
    #[serde(default = "default_second")]
    pub second: String,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_max_exchanges")]
    pub max_exchanges: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            second: default_second(),
            seed: 0,
            max_exchanges: DEFAULT_MAX_EXCHANGES,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterStats {
    pub samples: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub stalemates: u32,
    pub mean_exchanges: f64,
    pub median_exchanges: u32,
    pub dodges: u64,
}

fn lookup<'a>(roster: &'a Roster, id: &str) -> Result<&'a FighterSpec> {
    find_fighter(roster, id).ok_or_else(|| anyhow!("fighter '{}' not found in roster", id))
}

fn run_one(
    first: &FighterSpec,
    second: &FighterSpec,
    seed: u64,
    max_exchanges: u32,
) -> Result<EncounterReport> {
    let mut a = first.build()?;
    let mut b = second.build()?;
    let mut engine = CombatEngine::new(Dice::from_seed(seed)).with_max_exchanges(max_exchanges);
    Ok(engine.resolve_encounter(&mut *a, &mut *b, |_| {})?)
}

/// One seeded encounter between two built-in fighters.
pub fn simulate_encounter(cfg: EncounterConfig) -> Result<EncounterReport> {
    let roster = builtin_roster()?;
    let first = lookup(&roster, &cfg.first)?;
    let second = lookup(&roster, &cfg.second)?;
    run_one(first, second, cfg.seed, cfg.max_exchanges)
}

/// `samples` fresh encounters; sample `i` is seeded with `seed + i`.
pub fn simulate_encounter_many(cfg: EncounterConfig, samples: u32) -> Result<EncounterStats> {
    let roster = builtin_roster()?;
    let first = lookup(&roster, &cfg.first)?;
    let second = lookup(&roster, &cfg.second)?;

    let mut stats = EncounterStats {
        samples,
        first_wins: 0,
        second_wins: 0,
        stalemates: 0,
        mean_exchanges: 0.0,
        median_exchanges: 0,
        dodges: 0,
    };
    let mut exchanges: Vec<u32> = Vec::with_capacity(samples as usize);

    for i in 0..samples {
        let report = run_one(first, second, cfg.seed.wrapping_add(i as u64), cfg.max_exchanges)?;
        match report.outcome {
            EncounterOutcome::SecondDefeated => stats.first_wins += 1,
            EncounterOutcome::FirstDefeated => stats.second_wins += 1,
            EncounterOutcome::Stalemate => stats.stalemates += 1,
        }
        stats.dodges += report.dodges() as u64;
        exchanges.push(report.exchanges);
    }

    if !exchanges.is_empty() {
        exchanges.sort_unstable();
        let total: u64 = exchanges.iter().map(|&e| e as u64).sum();
        stats.mean_exchanges = total as f64 / exchanges.len() as f64;
        let m = exchanges.len() / 2;
        stats.median_exchanges = if exchanges.len() % 2 == 1 {
            exchanges[m]
        } else {
            (exchanges[m - 1] + exchanges[m]) / 2
        };
    }
    Ok(stats)
}
