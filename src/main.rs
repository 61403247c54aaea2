//! Pokedex Dashboard - Entry Point
//!
//! Loads the dataset from local JSON exports or the hosted tables and prints
//! the dashboard views: dataset overview, model evaluation, battle
//! prediction, a backtest of the predictor against the battle log and the
//! roster listing.

use clap::{Parser, Subcommand, ValueEnum};
use pokedex_dashboard::analytics::{
    backtest, type_win_rates, BacktestReport, DatasetOverview, ModelEvaluation, TypeWinRate,
};
use pokedex_dashboard::combat::{predict, Prediction};
use pokedex_dashboard::core::error::{DashError, Result};
use pokedex_dashboard::core::{config, set_config, DashboardConfig};
use pokedex_dashboard::data::{Dataset, JsonStore, RestClient};
use pokedex_dashboard::pokedex::{type_label, ModelResult, Pokemon};
use serde::Serialize;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pokedex-dashboard")]
#[command(about = "Pokemon dataset analytics and battle prediction")]
struct Args {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with pokemon.json, combats.json and model_results.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Fetch rows from the hosted tables instead of local files
    #[arg(long, global = true)]
    remote: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dataset overview, stat averages and win rate per type
    Overview,
    /// Model evaluation metrics and best performers
    Models,
    /// Predict the winner of a battle between two pokemon (id or name)
    Predict { first: String, second: String },
    /// Check the predictor against recorded combats
    Backtest,
    /// List the roster in name order
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let dashboard_config = resolve_config(&args)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&dashboard_config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if set_config(dashboard_config).is_err() {
        tracing::warn!("config already initialized; keeping existing values");
    }
    let cfg = config();

    let dataset = load_dataset(args.remote, cfg)?;
    tracing::info!(
        pokemon = dataset.pokemon.len(),
        combats = dataset.combats.len(),
        models = dataset.models.len(),
        "dataset ready"
    );

    match &args.command {
        Command::Overview => {
            let overview = DatasetOverview::compute(&dataset.pokemon, &dataset.combats, cfg.sample_size);
            let rates = type_win_rates(&dataset.pokemon);
            match args.format {
                Format::Json => print_json(&OverviewOutput {
                    overview: &overview,
                    type_win_rates: &rates,
                })?,
                Format::Text => display_overview(&overview, &rates),
            }
        }
        Command::Models => {
            let evaluation = ModelEvaluation::compute(&dataset.models);
            match args.format {
                Format::Json => print_json(&evaluation)?,
                Format::Text => display_models(&evaluation),
            }
        }
        Command::Predict { first, second } => {
            let dex = dataset.pokedex();
            let a = dex.find(first)?;
            let b = dex.find(second)?;
            let prediction = predict(a, b);
            match args.format {
                Format::Json => print_json(&prediction)?,
                Format::Text => display_prediction(&prediction),
            }
        }
        Command::Backtest => {
            let report = backtest(&dataset.pokedex(), &dataset.combats);
            match args.format {
                Format::Json => print_json(&report)?,
                Format::Text => display_backtest(&report),
            }
        }
        Command::List => {
            let dex = dataset.pokedex();
            let roster = dex.sorted_by_name();
            match args.format {
                Format::Json => print_json(&roster)?,
                Format::Text => display_roster(&roster),
            }
        }
    }

    Ok(())
}

/// Defaults, then config file, then environment, then command line
fn resolve_config(args: &Args) -> Result<DashboardConfig> {
    let base = match &args.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::new(),
    };
    let mut resolved = base.with_env_overrides()?;
    if let Some(dir) = &args.data_dir {
        resolved.data_dir = dir.clone();
    }
    resolved.validate()?;
    Ok(resolved)
}

fn load_dataset(remote: bool, cfg: &DashboardConfig) -> Result<Dataset> {
    if remote {
        let remote_cfg = cfg
            .remote
            .as_ref()
            .ok_or(DashError::MissingCredentials("SUPABASE_URL"))?;
        let client = RestClient::new(remote_cfg);
        let rt = Runtime::new()?;
        rt.block_on(client.load())
    } else {
        JsonStore::new(&cfg.data_dir).load()
    }
}

#[derive(Serialize)]
struct OverviewOutput<'a> {
    overview: &'a DatasetOverview,
    type_win_rates: &'a [TypeWinRate],
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Text bar scaled to `peak`
fn bar(value: f64, peak: f64, width: usize) -> String {
    let filled = if peak > 0.0 {
        ((value / peak) * width as f64).round() as usize
    } else {
        0
    };
    "#".repeat(filled.min(width))
}

fn type_column(p: &Pokemon) -> String {
    let primary = type_label(&p.type_1);
    match &p.type_2 {
        Some(code) if p.has_secondary_type() => format!("{} / {}", primary, type_label(code)),
        _ => primary,
    }
}

fn display_overview(overview: &DatasetOverview, rates: &[TypeWinRate]) {
    println!();
    println!("=== Pokedex Dataset ===");
    println!("  Total Pokemon: {}", overview.pokemon_count);
    println!(
        "  Legendary:     {:.0}% ({} Pokemon)",
        overview.legendary_percent, overview.legendary_count
    );
    println!("  Generations:   {}", overview.generation_count);
    println!("  Total Combats: {}", overview.combat_count);
    println!();

    println!("=== Sample (first {}) ===", overview.sample.len());
    println!(
        "  {:>4}  {:<14} {:<20} {:>4} {:>6} {:>7} {:>8}",
        "ID", "Name", "Type", "HP", "Attack", "Defense", "Win Rate"
    );
    for p in &overview.sample {
        println!(
            "  {:>4}  {:<14} {:<20} {:>4} {:>6} {:>7} {:>7.1}%",
            p.id.0,
            p.name,
            type_column(p),
            p.stats.hp,
            p.stats.attack,
            p.stats.defense,
            p.win_rate * 100.0
        );
    }
    println!();

    println!("=== Average Combat Stats ===");
    let peak = overview.averages.peak();
    for (label, value) in overview.averages.labelled() {
        println!("  {:<8} {:>5.0} {}", label, value, bar(value, peak, 30));
    }
    println!();

    println!("=== Win Rate by Type ===");
    for rate in rates {
        println!(
            "  {:<10} {:>5.1}% {}",
            rate.label,
            rate.win_rate,
            bar(rate.win_rate, 100.0, 30)
        );
    }
    println!();
}

fn display_model_row(m: &ModelResult, regression: bool) {
    if regression {
        println!(
            "  {:<28} R2 {:.4}  MSE {:.4}  MAE {:.4}",
            m.model_name,
            m.r2_score.unwrap_or(0.0),
            m.mse.unwrap_or(0.0),
            m.mae.unwrap_or(0.0)
        );
    } else {
        println!(
            "  {:<28} Acc {:.1}%  P {:.2}  R {:.2}  F1 {:.2}",
            m.model_name,
            m.accuracy.unwrap_or(0.0) * 100.0,
            m.precision.unwrap_or(0.0),
            m.recall.unwrap_or(0.0),
            m.f1_score.unwrap_or(0.0)
        );
    }
}

fn display_models(evaluation: &ModelEvaluation) {
    println!();
    println!("=== Best Performing Models ===");
    match &evaluation.best_regression {
        Some(m) => println!(
            "  Regression (win rate):      {} (R2 {:.4}, MSE {:.4})",
            m.model_name,
            m.r2_score.unwrap_or(0.0),
            m.mse.unwrap_or(0.0)
        ),
        None => println!("  Regression (win rate):      none"),
    }
    match &evaluation.best_classification {
        Some(m) => println!(
            "  Classification (legendary): {} (accuracy {:.1}%, F1 {:.2})",
            m.model_name,
            m.accuracy.unwrap_or(0.0) * 100.0,
            m.f1_score.unwrap_or(0.0)
        ),
        None => println!("  Classification (legendary): none"),
    }
    println!();

    println!("=== Regression Models ===");
    for m in &evaluation.regression {
        display_model_row(m, true);
    }
    println!();
    println!("=== Classification Models ===");
    for m in &evaluation.classification {
        display_model_row(m, false);
    }
    println!();
}

fn display_prediction(prediction: &Prediction<'_>) {
    println!();
    let (first, second) = prediction.contestants();
    println!("=== {} vs {} ===", first.name, second.name);
    println!("  {} wins!", prediction.winner.name);
    println!("  Probability: {:.1}%", prediction.win_probability);
    println!("  {}", bar(prediction.win_probability, 100.0, 40));
    println!();
    println!("  {}", prediction.explanation);
    println!();
    for (p, score) in [
        (prediction.winner, &prediction.winner_score),
        (prediction.loser, &prediction.loser_score),
    ] {
        println!(
            "  {:<14} total {:>4}  score {:>8.1}  x{:<7.4} final {:>8.1}",
            p.name, score.total_stats, score.battle_score, score.type_multiplier, score.final_score
        );
    }
    if prediction.decided_by_tie_break {
        println!("  (scores tied; first pokemon given the win)");
    }
    println!();
}

fn display_backtest(report: &BacktestReport) {
    println!();
    println!("=== Predictor Backtest ===");
    println!("  Evaluated: {}", report.evaluated);
    println!("  Skipped:   {}", report.skipped);
    println!("  Correct:   {}", report.correct);
    println!("  Accuracy:  {:.1}%", report.accuracy);
    println!();
}

fn display_roster(roster: &[&Pokemon]) {
    println!();
    println!("=== Pokedex ({}) ===", roster.len());
    for p in roster {
        println!("  {:>4}  {:<14} {}", p.id.0, p.name, type_column(p));
    }
    println!();
}
