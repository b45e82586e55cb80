//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Matriz Elemental - elemental matrix calculator
///
/// Scores planetary positions by element and modality and classifies
/// the four elements into Luz, Máscara and Sombra.
///
/// Examples:
///   matriz-elemental --input carta.json
///   matriz-elemental -p "Sol=Aries" -p "Luna=Cáncer" -p "Ascendente=Libra"
///   matriz-elemental --demo --format json
///   matriz-elemental --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// File with planetary positions (.json or .toml)
    ///
    /// JSON: an array of {"planeta": ..., "signo": ...} objects.
    /// TOML: a list of [[posicion]] tables. Entries may give "longitud"
    /// (ecliptic degrees) instead of "signo".
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// A position as PLANET=SIGN (repeatable)
    ///
    /// Example: -p "Júpiter=Géminis"
    #[arg(short, long = "position", value_name = "PLANET=SIGN")]
    pub positions: Vec<String>,

    /// Use the built-in demo chart
    #[arg(long)]
    pub demo: bool,

    /// Output file path for the report (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, value_name = "FORMAT", env = "MATRIZ_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .matriz.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Leave the per-position contribution table out of the report
    #[arg(long)]
    pub no_breakdown: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .matriz.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.input.is_none() && self.positions.is_empty() && !self.demo {
            return Err("No positions given: use --input, --position or --demo".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
            if !input.is_file() {
                return Err(format!("Input path is not a file: {}", input.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Short description of where the positions come from.
    pub fn source_label(&self) -> String {
        let mut sources = Vec::new();
        if let Some(ref input) = self.input {
            sources.push(input.display().to_string());
        }
        if !self.positions.is_empty() {
            sources.push(format!("{} CLI position(s)", self.positions.len()));
        }
        if self.demo {
            sources.push("demo chart".to_string());
        }
        sources.join(" + ")
    }
}
