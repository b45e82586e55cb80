//! Position sources.
//!
//! Positions come from a JSON or TOML file, from `PLANET=SIGN` pairs on the
//! command line, or from the built-in demo chart. Entries may carry an
//! ecliptic longitude instead of a sign name, as produced by an ephemeris.

use crate::matrix::tables::sign_name_at;
use crate::models::PlanetaryPosition;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading positions.
///
/// Unknown planet or sign names are not errors; they are ignored at scoring time.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: String, message: String },
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: String, message: String },
    #[error("Unsupported input format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error("Position for {planet} has neither a sign nor a longitude")]
    MissingSign { planet: String },
    #[error("Longitude for {planet} is not a finite number")]
    InvalidLongitude { planet: String },
    #[error("Invalid position '{0}': expected PLANET=SIGN")]
    InvalidPair(String),
}

/// One entry as written in an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionEntry {
    #[serde(alias = "planet")]
    pub planeta: String,
    #[serde(default, alias = "sign")]
    pub signo: Option<String>,
    #[serde(default, alias = "longitude")]
    pub longitud: Option<f64>,
}

/// TOML layout: a list of `[[posicion]]` tables.
#[derive(Debug, Deserialize)]
struct TomlPositions {
    #[serde(default, alias = "position")]
    posicion: Vec<PositionEntry>,
}

/// Sign name for an ecliptic longitude in degrees (30° per sign, 0° = Aries).
pub fn sign_from_longitude(longitude: f64) -> &'static str {
    let normalized = longitude.rem_euclid(360.0);
    sign_name_at((normalized / 30.0) as usize)
}

impl PositionEntry {
    /// Resolve the entry into a position. An explicit sign wins over a longitude.
    pub fn into_position(self) -> Result<PlanetaryPosition, InputError> {
        if let Some(sign) = self.signo {
            return Ok(PlanetaryPosition::new(self.planeta, sign));
        }

        match self.longitud {
            Some(lon) if lon.is_finite() => {
                let sign = sign_from_longitude(lon);
                debug!("{} at {:.2}° falls in {}", self.planeta, lon, sign);
                Ok(PlanetaryPosition::new(self.planeta, sign))
            }
            Some(_) => Err(InputError::InvalidLongitude {
                planet: self.planeta,
            }),
            None => Err(InputError::MissingSign {
                planet: self.planeta,
            }),
        }
    }
}

/// Parse a JSON array of position entries.
pub fn parse_json(content: &str, origin: &str) -> Result<Vec<PlanetaryPosition>, InputError> {
    let entries: Vec<PositionEntry> =
        serde_json::from_str(content).map_err(|e| InputError::InvalidJson {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

    entries.into_iter().map(PositionEntry::into_position).collect()
}

/// Parse a TOML document of `[[posicion]]` tables.
pub fn parse_toml(content: &str, origin: &str) -> Result<Vec<PlanetaryPosition>, InputError> {
    let doc: TomlPositions = toml::from_str(content).map_err(|e| InputError::InvalidToml {
        path: origin.to_string(),
        message: e.to_string(),
    })?;

    doc.posicion
        .into_iter()
        .map(PositionEntry::into_position)
        .collect()
}

/// Load positions from a `.json` or `.toml` file.
pub fn load_positions(path: &Path) -> Result<Vec<PlanetaryPosition>, InputError> {
    let origin = path.display().to_string();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if ext != "json" && ext != "toml" {
        return Err(InputError::UnsupportedFormat(origin));
    }

    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: origin.clone(),
        source,
    })?;

    let positions = if ext == "json" {
        parse_json(&content, &origin)?
    } else {
        parse_toml(&content, &origin)?
    };

    debug!("Loaded {} positions from {}", positions.len(), origin);
    Ok(positions)
}

/// Parse a `PLANET=SIGN` pair from the command line.
pub fn parse_pair(pair: &str) -> Result<PlanetaryPosition, InputError> {
    let (planet, sign) = pair
        .split_once('=')
        .ok_or_else(|| InputError::InvalidPair(pair.to_string()))?;

    let planet = planet.trim();
    let sign = sign.trim();
    if planet.is_empty() || sign.is_empty() {
        return Err(InputError::InvalidPair(pair.to_string()));
    }

    Ok(PlanetaryPosition::new(planet, sign))
}

/// The starter chart: Sun in Aries, Moon in Cancer, Libra rising.
pub fn demo_positions() -> Vec<PlanetaryPosition> {
    vec![
        PlanetaryPosition::new("Sol", "Aries"),
        PlanetaryPosition::new("Luna", "Cáncer"),
        PlanetaryPosition::new("Ascendente", "Libra"),
    ]
}
