//! Report building and rendering.

pub mod generator;

pub use generator::{generate_json_report, generate_markdown_report};

use crate::matrix::{self, breakdown::Contribution, Share};
use crate::models::{CalculationResult, PlanetaryPosition};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata about a calculation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Report title.
    pub title: String,
    /// Where the positions came from.
    pub source: String,
    /// Date and time the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of positions supplied.
    pub positions_supplied: usize,
    /// Number of positions that contributed to the scores.
    pub positions_scored: usize,
}

/// Everything a rendered report shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartReport {
    pub metadata: ReportMetadata,
    pub positions: Vec<PlanetaryPosition>,
    pub result: CalculationResult,
    pub breakdown: Vec<Contribution>,
    pub element_shares: Vec<Share>,
    pub modality_shares: Vec<Share>,
    pub ignored: Vec<PlanetaryPosition>,
}

impl ChartReport {
    /// Calculate the matrix for the positions and collect the report data.
    pub fn build(title: &str, source: &str, positions: Vec<PlanetaryPosition>) -> Self {
        let result = matrix::calculate(&positions);
        let breakdown = matrix::contributions(&positions, &result);
        let ignored: Vec<PlanetaryPosition> = matrix::ignored_positions(&positions)
            .into_iter()
            .cloned()
            .collect();

        let metadata = ReportMetadata {
            title: title.to_string(),
            source: source.to_string(),
            generated_at: Utc::now(),
            positions_supplied: positions.len(),
            positions_scored: positions.len() - ignored.len(),
        };

        Self {
            metadata,
            element_shares: matrix::element_shares(&result),
            modality_shares: matrix::modality_shares(&result),
            positions,
            result,
            breakdown,
            ignored,
        }
    }
}
