//! Score aggregation.
//!
//! Walks the supplied positions and accumulates weighted scores per
//! element and modality, plus a planet count per element.

use super::tables::{planet_weight, sign_info};
use crate::models::{Element, Modality, PlanetWeight, PlanetaryPosition};
use std::collections::BTreeMap;
use tracing::debug;

/// Running totals for one calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Totals {
    pub element_score: BTreeMap<Element, u32>,
    pub element_count: BTreeMap<Element, u32>,
    pub modality_score: BTreeMap<Modality, u32>,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            element_score: Element::ALL.iter().map(|e| (*e, 0)).collect(),
            element_count: Element::ALL.iter().map(|e| (*e, 0)).collect(),
            modality_score: Modality::ALL.iter().map(|m| (*m, 0)).collect(),
        }
    }
}

impl Totals {
    /// Adds a counted planet placed in a sign of the given qualities.
    pub fn add_planet(&mut self, element: Element, modality: Modality, weight: PlanetWeight) {
        self.add_bonus(element, modality, weight);
        *self.element_count.entry(element).or_default() += 1;
    }

    /// Adds score without touching the planet count.
    pub fn add_bonus(&mut self, element: Element, modality: Modality, weight: PlanetWeight) {
        *self.element_score.entry(element).or_default() += weight.element_score;
        *self.modality_score.entry(modality).or_default() += weight.modality_score;
    }
}

/// Resolve a position to its sign qualities and planet weight.
///
/// Returns `None` when either the planet or the sign is not in the tables.
pub fn score_position(position: &PlanetaryPosition) -> Option<(Element, Modality, PlanetWeight)> {
    let (element, modality) = sign_info(&position.signo)?;
    let weight = planet_weight(&position.planeta)?;
    Some((element, modality, weight))
}

/// Aggregate scores and counts over all recognized positions.
///
/// Unknown planets or signs are skipped silently.
pub fn aggregate(positions: &[PlanetaryPosition]) -> Totals {
    let mut totals = Totals::default();

    for position in positions {
        match score_position(position) {
            Some((element, modality, weight)) => totals.add_planet(element, modality, weight),
            None => debug!("Skipping unrecognized position: {}", position),
        }
    }

    totals
}
