//! Per-position contributions and score shares.

use super::aggregator::{score_position, Totals};
use super::classifier::rank_elements;
use super::tables::{planet_weight, sign_info, ASCENDANT_RULER_KEY};
use crate::models::{CalculationResult, Element, Modality, PlanetaryPosition};
use serde::Serialize;

/// Points one position (or the ruler bonus) added to the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub planeta: String,
    pub signo: String,
    pub element: Element,
    pub modality: Modality,
    pub element_points: u32,
    pub modality_points: u32,
    /// True for the ruler-of-the-Ascendant bonus row.
    pub bonus: bool,
}

/// Percentage of a total held by one key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub name: String,
    pub score: u32,
    pub percentage: f64,
}

/// List what each recognized position contributed, in input order.
///
/// A trailing bonus row is added when the ruler bonus applied.
pub fn contributions(
    positions: &[PlanetaryPosition],
    result: &CalculationResult,
) -> Vec<Contribution> {
    let mut rows: Vec<Contribution> = positions
        .iter()
        .filter_map(|p| {
            score_position(p).map(|(element, modality, weight)| Contribution {
                planeta: p.planeta.clone(),
                signo: p.signo.clone(),
                element,
                modality,
                element_points: weight.element_score,
                modality_points: weight.modality_score,
                bonus: false,
            })
        })
        .collect();

    if let Some(ref ruler) = result.regente_ascendente {
        let bonus = planet_weight(ASCENDANT_RULER_KEY);
        if let (Some(weight), Some((element, modality))) = (bonus, sign_info(&ruler.signo)) {
            rows.push(Contribution {
                planeta: ASCENDANT_RULER_KEY.to_string(),
                signo: ruler.signo.clone(),
                element,
                modality,
                element_points: weight.element_score,
                modality_points: weight.modality_score,
                bonus: true,
            });
        }
    }

    rows
}

/// Positions the aggregator skipped because the planet or sign is unknown.
pub fn ignored_positions(positions: &[PlanetaryPosition]) -> Vec<&PlanetaryPosition> {
    positions
        .iter()
        .filter(|p| score_position(p).is_none())
        .collect()
}

fn percentage(part: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Element shares in ranking order (score, then count, descending).
pub fn element_shares(result: &CalculationResult) -> Vec<Share> {
    let totals = Totals {
        element_score: result.totales_elemento.clone(),
        element_count: result.conteo_planetas_elemento.clone(),
        modality_score: result.totales_modalidad.clone(),
    };
    let total: u32 = result.totales_elemento.values().sum();

    rank_elements(&totals)
        .into_iter()
        .map(|standing| Share {
            name: standing.element.to_string(),
            score: standing.score,
            percentage: percentage(standing.score, total),
        })
        .collect()
}

/// Modality shares in declaration order.
pub fn modality_shares(result: &CalculationResult) -> Vec<Share> {
    let total: u32 = result.totales_modalidad.values().sum();

    Modality::ALL
        .iter()
        .map(|&modality| {
            let score = result.modality_score(modality);
            Share {
                name: modality.to_string(),
                score,
                percentage: percentage(score, total),
            }
        })
        .collect()
}
