//! Matriz Elemental - elemental matrix calculator
//!
//! A CLI tool that scores astrological positions by element and modality
//! and classifies the four elements into Luz, Máscara and Sombra.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (bad arguments, config, unreadable input, etc.)

mod cli;
mod config;
mod input;
mod matrix;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::{Config, CONFIG_FILE};
use models::{Element, PlanetaryPosition};
use report::ChartReport;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Configuration is read before logging starts so it can raise verbosity
    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("matriz-elemental v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    debug!("Config: {:?}", config);

    if let Err(e) = run(&args, &config) {
        error!("Calculation failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .matriz.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);

    if path.exists() {
        eprintln!("⚠️  {} already exists. Remove it first or edit it manually.", CONFIG_FILE);
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so a report written to stdout stays clean.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load positions, compute the matrix and write the report.
fn run(args: &Args, config: &Config) -> Result<()> {
    let positions = collect_positions(args)?;
    info!("Calculating matrix for {} positions", positions.len());

    let report = ChartReport::build(&config.report.title, &args.source_label(), positions);

    for ignored in &report.ignored {
        warn!("Ignoring unrecognized position: {}", ignored);
    }

    let output = match config.general.format {
        OutputFormat::Json => report::generate_json_report(&report)?,
        OutputFormat::Markdown => report::generate_markdown_report(&report, &config.report),
    };

    match &config.general.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path))?;
            info!("Report saved to {}", path);
            print_summary(&report);
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Gather positions from the input file, CLI pairs and demo chart, in that order.
fn collect_positions(args: &Args) -> Result<Vec<PlanetaryPosition>> {
    let mut positions = Vec::new();

    if let Some(ref path) = args.input {
        let loaded = input::load_positions(path)
            .with_context(|| format!("Failed to load positions from {}", path.display()))?;
        positions.extend(loaded);
    }

    for pair in &args.positions {
        positions.push(input::parse_pair(pair)?);
    }

    if args.demo {
        positions.extend(input::demo_positions());
    }

    Ok(positions)
}

/// Print a short summary after the report was written to a file.
fn print_summary(report: &ChartReport) {
    let result = &report.result;

    println!("\n📊 Matriz Elemental:");
    println!("   Luz:     {}", join_names(&result.luz));
    println!("   Máscara: {}", join_names(&result.mascara));
    println!("   Sombra:  {}", join_names(&result.sombra));
    if let Some(ref ruler) = result.regente_ascendente {
        println!("   Regente del Ascendente: {} en {}", ruler.planeta, ruler.signo);
    }
    println!(
        "   Positions: {} supplied, {} scored",
        report.metadata.positions_supplied, report.metadata.positions_scored
    );
}

fn join_names(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from file or use defaults.
///
/// Runs before logging is initialized, so problems go straight to stderr.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("⚠️  Ignoring {}: {:#}", CONFIG_FILE, e);
            Ok(Config::default())
        }
    }
}
