use std::{thread, time::Duration};

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use engine::content::{builtin_roster, find_fighter, FighterSpec, Roster};
use engine::{CombatEngine, Combatant, Dice, TeleportStrategy, DEFAULT_MAX_EXCHANGES};
use tracing_subscriber::EnvFilter;

mod narrate;

#[derive(Subcommand)]
enum Cmd {
    /// Fight two roster warriors, narrating every round
    Fight {
        /// Roster id of the warrior who strikes first
        #[arg(long, default_value = "thor")]
        first: String,
        /// Roster id of the warrior who strikes second
        #[arg(long, default_value = "loki")]
        second: String,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Pause between rounds, in milliseconds
        #[arg(long, default_value_t = 1500)]
        delay_ms: u64,
        /// Safety cap on exchanges before calling a stalemate
        #[arg(long, default_value_t = DEFAULT_MAX_EXCHANGES)]
        max_exchanges: u32,
        /// Print the encounter report as JSON instead of narration
        #[arg(long)]
        json: bool,
    },
    /// Swap a warrior's teleport strategy at runtime and try it each time
    Teleport {
        /// Roster id of the warrior
        #[arg(long, default_value = "loki")]
        warrior: String,
    },
    /// Serialize the built-in roster to JSON (stdout)
    Roster {
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Parser)]
#[command(name = "warriors")]
#[command(about = "Turn-based warrior combat")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn lookup<'a>(roster: &'a Roster, id: &str) -> anyhow::Result<&'a FighterSpec> {
    find_fighter(roster, id).ok_or_else(|| anyhow!("unknown warrior '{}'", id))
}

fn introduce(spec: &FighterSpec, fighter: &dyn Combatant) {
    println!("{} enters: {}", spec.name, fighter.warrior());
    if let Some(chance) = spec.dodge_chance {
        println!("{} dodges {:.0}% of attacks", spec.name, chance * 100.0);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let roster = builtin_roster()?;
    match cli.cmd {
        Cmd::Fight {
            first,
            second,
            seed,
            delay_ms,
            max_exchanges,
            json,
        } => {
            let first_spec = lookup(&roster, &first)?;
            let second_spec = lookup(&roster, &second)?;
            let mut a = first_spec.build()?;
            let mut b = second_spec.build()?;

            if !json {
                println!("=== FIGHT ===");
                introduce(first_spec, &*a);
                introduce(second_spec, &*b);
                println!();
            }

            let delay = Duration::from_millis(delay_ms);
            let mut engine =
                CombatEngine::new(Dice::from_seed(seed)).with_max_exchanges(max_exchanges);
            let report = engine.resolve_encounter(&mut *a, &mut *b, |round| {
                if json {
                    return;
                }
                for line in narrate::round_lines(round) {
                    println!("{}", line);
                }
                println!();
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            })?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("{}", narrate::outcome_line(&report));
            println!();
            println!("Final statistics:");
            println!("{}", a.warrior());
            println!("{}", b.warrior());
            println!("{}", narrate::survivor_line(a.warrior(), b.warrior()));
        }
        Cmd::Teleport { warrior } => {
            let spec = lookup(&roster, &warrior)?;
            let mut w = spec.build()?;
            let name = w.warrior().name().to_string();

            println!("{}", narrate::teleport_line(&name, &w.teleport()));

            println!("--- {}'s teleport ability is removed ---", name);
            w.set_teleport_strategy(TeleportStrategy::Fails);
            println!("{}", narrate::teleport_line(&name, &w.teleport()));

            println!("--- {}'s teleport ability is restored ---", name);
            w.set_teleport_strategy(TeleportStrategy::Succeeds);
            println!("{}", narrate::teleport_line(&name, &w.teleport()));
        }
        Cmd::Roster { compact } => {
            if compact {
                println!("{}", serde_json::to_string(&roster)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            }
        }
    }
    Ok(())
}
