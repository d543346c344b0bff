//! # covid-charts
//!
//! Command-line access to the merged feeds, the curve fits and the chart
//! views. Every command reads the live feeds unless `--input` names a saved
//! merged response.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dashboard_facade::{active_series, Controller, Filter, Scale, UiState, MIN_DEATHS};
use regression_facade::standard_fitters;
use serde::Serialize;
use series_spi::SeriesSet;
use source_facade::{
    GlobalProvider, HttpSeriesSource, MergedResponse, SeriesSource, SourceConfig,
    SourceConfigBuilder, StaticSeriesSource,
};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "covid-charts")]
#[command(about = "Death-count curve fits and forecast charts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the upstream feeds and write the merged response
    Fetch {
        /// Global feed (csse, politologue); defaults to COVID_GLOBAL_PROVIDER
        #[arg(short, long)]
        provider: Option<GlobalProvider>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fit every curve to the first `window` days of a series
    Fit {
        #[command(flatten)]
        input: InputArgs,

        /// Series to fit (italy, lombardy, france, spain, uk, netherlands, germany, usa)
        #[arg(short, long, default_value = "italy")]
        filter: Filter,

        /// Training window in days (default: whole series)
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Cumulative chart with projections
    Cumulative {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, default_value = "italy")]
        filter: Filter,

        /// Forecast horizon in days
        #[arg(long, default_value = "3")]
        forecast: usize,

        /// Y-axis scale (linear, logarithmic)
        #[arg(short, long, default_value = "linear")]
        scale: Scale,

        /// Training window in days (default: whole series)
        #[arg(short, long)]
        window: Option<usize>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Daily deaths chart
    Daily {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long, default_value = "italy")]
        filter: Filter,

        #[arg(long, default_value = "3")]
        forecast: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cross-country comparison chart
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Saved merged response (JSON) instead of the live feeds
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Load a saved merged response
fn load_input(path: &Path) -> CliResult<SeriesSet> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {:?}: {}", path, e))?;
    let source = StaticSeriesSource::from_json(&json).map_err(|e| e.to_string())?;
    block_on_source(&source)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))
}

fn block_on_source(source: &dyn SeriesSource) -> CliResult<SeriesSet> {
    runtime()?
        .block_on(source.fetch_all_series())
        .map_err(|e| format!("{} source: {}", source.name(), e))
}

fn live_config(provider: Option<GlobalProvider>) -> CliResult<SourceConfig> {
    match provider {
        Some(provider) => SourceConfigBuilder::new().global_provider(provider).build(),
        None => SourceConfig::from_env(),
    }
    .map_err(|e| e.to_string())
}

fn series_set(input: &InputArgs) -> CliResult<SeriesSet> {
    match &input.input {
        Some(path) => load_input(path),
        None => {
            let source = HttpSeriesSource::new(live_config(None)?).map_err(|e| e.to_string())?;
            block_on_source(&source)
        }
    }
}

/// Write JSON to file or stdout
fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        eprintln!("Written to {:?}", path);
    } else {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to encode JSON: {}", e))?;
        println!("{}", json);
    }
    Ok(())
}

/// Run fetch command
fn run_fetch(provider: Option<GlobalProvider>, output: Option<PathBuf>) -> CliResult<()> {
    let source = HttpSeriesSource::new(live_config(provider)?).map_err(|e| e.to_string())?;
    let observations = runtime()?
        .block_on(source.fetch_observations())
        .map_err(|e| e.to_string())?;
    write_json(&MergedResponse::from_observations(&observations), output.as_ref())
}

/// Run fit command
fn run_fit(set: &SeriesSet, filter: Filter, window: Option<usize>) -> CliResult<()> {
    let series = active_series(set, filter, MIN_DEATHS);
    if series.is_empty() {
        return Err(format!("No data above {} deaths for {}", MIN_DEATHS, filter));
    }
    let k = window.unwrap_or(series.len()).clamp(1, series.len());
    let training = series.training_prefix(k);

    let fits: Vec<serde_json::Value> = standard_fitters()
        .iter()
        .map(|fitter| match fitter.fit(&training) {
            Ok(model) => serde_json::json!({
                "kind": fitter.kind().key(),
                "params": model.params(),
                "next": model.predict((k + 1) as f64).round(),
            }),
            Err(e) => serde_json::json!({
                "kind": fitter.kind().key(),
                "error": e.to_string(),
            }),
        })
        .collect();

    write_json(
        &serde_json::json!({ "filter": filter, "window": k, "fits": fits }),
        None,
    )
}

fn controller(set: SeriesSet, filter: Filter, forecast: usize, scale: Scale) -> Controller {
    let ui = UiState {
        filter_cumulative: filter,
        filter_daily: filter,
        scale,
        forecast,
    };
    Controller::new(set, ui)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Fetch { provider, output } => run_fetch(provider, output),

        Commands::Fit {
            input,
            filter,
            window,
        } => run_fit(&series_set(&input)?, filter, window),

        Commands::Cumulative {
            input,
            filter,
            forecast,
            scale,
            window,
            output,
        } => {
            let mut controller = controller(series_set(&input)?, filter, forecast, scale);
            let view = match window {
                Some(k) => controller.on_slider(k),
                None => controller.refresh(),
            }
            .map_err(|e| e.to_string())?;
            tracing::info!(hash = %controller.hash(), "cumulative chart");
            write_json(&view, output.as_ref())
        }

        Commands::Daily {
            input,
            filter,
            forecast,
            output,
        } => {
            let controller = controller(series_set(&input)?, filter, forecast, Scale::Linear);
            let view = controller.daily().map_err(|e| e.to_string())?;
            write_json(&view, output.as_ref())
        }

        Commands::Compare { input, output } => {
            let controller =
                controller(series_set(&input)?, Filter::default(), 0, Scale::default());
            write_json(&controller.compare(), output.as_ref())
        }
    }
}
