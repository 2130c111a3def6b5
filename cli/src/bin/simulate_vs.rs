use clap::Parser;
use engine::api::{simulate_encounter_many, EncounterConfig};
use engine::DEFAULT_MAX_EXCHANGES;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simulate-vs")]
#[command(about = "Monte Carlo sim: many seeded fights between two roster warriors")]
struct Args {
    /// Roster id of the warrior who strikes first
    #[arg(long, default_value = "thor")]
    first: String,

    /// Roster id of the warrior who strikes second
    #[arg(long, default_value = "loki")]
    second: String,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// Safety cap on exchanges per trial
    #[arg(long, default_value_t = DEFAULT_MAX_EXCHANGES)]
    max_exchanges: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    first: &'a str,
    second: &'a str,
    trials: u32,
    first_win_rate: f64,
    second_win_rate: f64,
    stalemate_rate: f64,
    mean_exchanges: f64,
    median_exchanges: u32,
    dodges_per_fight: f64,
}

fn rate(count: u32, trials: u32) -> f64 {
    if trials == 0 {
        0.0
    } else {
        count as f64 / trials as f64
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = EncounterConfig {
        first: args.first.clone(),
        second: args.second.clone(),
        seed: args.seed,
        max_exchanges: args.max_exchanges,
    };
    let stats = simulate_encounter_many(cfg, args.trials)?;

    let summary = Summary {
        first: &args.first,
        second: &args.second,
        trials: stats.samples,
        first_win_rate: rate(stats.first_wins, stats.samples),
        second_win_rate: rate(stats.second_wins, stats.samples),
        stalemate_rate: rate(stats.stalemates, stats.samples),
        mean_exchanges: stats.mean_exchanges,
        median_exchanges: stats.median_exchanges,
        dodges_per_fight: if stats.samples == 0 {
            0.0
        } else {
            stats.dodges as f64 / stats.samples as f64
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("simulate-vs results");
    println!("-------------------");
    println!("trials:             {}", summary.trials);
    println!("first:              {}", summary.first);
    println!("second:             {}", summary.second);
    println!();
    println!("first win rate:     {:.1}%", summary.first_win_rate * 100.0);
    println!("second win rate:    {:.1}%", summary.second_win_rate * 100.0);
    println!("stalemate rate:     {:.1}%", summary.stalemate_rate * 100.0);
    println!("avg exchanges:      {:.2}", summary.mean_exchanges);
    println!("median exchanges:   {}", summary.median_exchanges);
    println!("dodges per fight:   {:.2}", summary.dodges_per_fight);

    Ok(())
}
