//! RRG CLI - Command line interface for rotation tables.
//!
//! Prints JSON responses on stdout; logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rrg_core::{
    get_universe, list_universes, ApiResponse, PriceData, RotationTableBuilder, RrgConfig,
    Selection,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "rrg")]
#[command(about = "Relative Rotation Graph tables from price data")]
#[command(version)]
struct Cli {
    /// Config file (defaults to RRG_CONFIG_FILE or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a rotation table from a JSON price file
    Table {
        /// Price data file
        #[arg(short, long)]
        input: PathBuf,
        /// Built-in universe to rank
        #[arg(short, long, conflicts_with = "tickers")]
        universe: Option<String>,
        /// Instruments to rank (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        tickers: Option<Vec<String>>,
        /// Benchmark identifier (overrides universe and file)
        #[arg(short, long)]
        benchmark: Option<String>,
    },
    /// Built-in universe commands
    Universe {
        #[command(subcommand)]
        action: UniverseAction,
    },
    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum UniverseAction {
    /// List built-in universes
    List,
    /// Show a universe's benchmark and tickers
    Show {
        /// Universe name
        #[arg(short, long)]
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RrgConfig::load_from_path(path),
        None => RrgConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            println!("{}", render(&ApiResponse::<()>::err(e.to_string())));
            return Ok(());
        }
    };

    let output = match cli.command {
        Commands::Table {
            input,
            universe,
            tickers,
            benchmark,
        } => handle_table(config, &input, universe, tickers, benchmark),
        Commands::Universe { action } => handle_universe(action),
        Commands::Config => render(&ApiResponse::ok(config)),
    };

    println!("{}", output);
    Ok(())
}

fn handle_table(
    config: RrgConfig,
    input: &Path,
    universe: Option<String>,
    tickers: Option<Vec<String>>,
    benchmark: Option<String>,
) -> String {
    let data = match PriceData::from_json_file(input) {
        Ok(data) => data,
        Err(e) => return render(&ApiResponse::<()>::err(format!("{}: {}", input.display(), e))),
    };

    let universe = match universe.as_deref().map(get_universe).transpose() {
        Ok(universe) => universe,
        Err(e) => return render(&ApiResponse::<()>::err(e.to_string())),
    };

    let Selection { benchmark, ids } = match data.select(universe, tickers, benchmark) {
        Ok(selection) => selection,
        Err(e) => return render(&ApiResponse::<()>::err(e.to_string())),
    };

    tracing::info!(
        "Ranking {} instruments against {} (min samples {})",
        ids.len(),
        benchmark,
        config.min_samples
    );

    let builder = RotationTableBuilder::new(config);
    match builder.build(&ids, &benchmark, &data.weekly, &data.daily) {
        Ok(table) => render(&ApiResponse::ok(table)),
        Err(e) => render(&ApiResponse::<()>::err(e.to_string())),
    }
}

fn handle_universe(action: UniverseAction) -> String {
    match action {
        UniverseAction::List => {
            let universes: Vec<_> = list_universes()
                .iter()
                .map(|u| {
                    json!({
                        "name": u.name,
                        "benchmark": u.benchmark,
                        "tickers": u.tickers.len(),
                    })
                })
                .collect();
            render(&ApiResponse::ok(json!({ "universes": universes })))
        }
        UniverseAction::Show { name } => match get_universe(&name) {
            Ok(universe) => render(&ApiResponse::ok(universe)),
            Err(e) => render(&ApiResponse::<()>::err(e.to_string())),
        },
    }
}

fn render<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|e| {
        format!(r#"{{"ok": false, "error": "failed to encode response: {}"}}"#, e)
    })
}
