//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.matriz.toml` files.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name.
pub const CONFIG_FILE: &str = ".matriz.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Output file path. The report goes to stdout when unset.
    #[serde(default)]
    pub output: Option<String>,

    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: None,
            format: OutputFormat::Markdown,
            verbose: false,
        }
    }
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Report title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Include the per-position contribution table.
    #[serde(default = "default_true")]
    pub include_breakdown: bool,

    /// Include percentage columns.
    #[serde(default = "default_true")]
    pub include_shares: bool,

    /// List positions that were not recognized.
    #[serde(default = "default_true")]
    pub include_ignored: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            include_breakdown: true,
            include_shares: true,
            include_ignored: true,
        }
    }
}

fn default_title() -> String {
    "Matriz Elemental".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.matriz.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = Some(output.display().to_string());
        }

        if let Some(format) = args.format {
            self.general.format = format;
        }

        if args.no_breakdown {
            self.report.include_breakdown = false;
        }

        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.format, OutputFormat::Markdown);
        assert!(config.general.output.is_none());
        assert_eq!(config.report.title, "Matriz Elemental");
        assert!(config.report.include_breakdown);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "carta.json"
format = "json"
verbose = true

[report]
title = "Carta de Ana"
include_ignored = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output.as_deref(), Some("carta.json"));
        assert_eq!(config.general.format, OutputFormat::Json);
        assert!(config.general.verbose);
        assert_eq!(config.report.title, "Carta de Ana");
        assert!(!config.report.include_ignored);
        assert!(config.report.include_breakdown);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        config.general.output = Some("from_file.md".to_string());

        let mut args = make_args();
        config.merge_with_args(&args);
        assert_eq!(config.general.output.as_deref(), Some("from_file.md"));

        args.output = Some(PathBuf::from("cli.json"));
        args.format = Some(OutputFormat::Json);
        args.no_breakdown = true;
        config.merge_with_args(&args);
        assert_eq!(config.general.output.as_deref(), Some("cli.json"));
        assert_eq!(config.general.format, OutputFormat::Json);
        assert!(!config.report.include_breakdown);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILE), "[report]\ntitle = \"X\"\n").unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.report.title, "X");
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("format = \"markdown\""));
    }
}
