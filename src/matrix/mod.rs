//! Elemental matrix calculation.
//!
//! Positions in, aggregation, ruler bonus, ranking, classified result out.
//! Everything here is a pure function of its input and the static tables.

pub mod aggregator;
pub mod breakdown;
pub mod classifier;
pub mod ruler;
pub mod tables;

pub use breakdown::{contributions, element_shares, ignored_positions, modality_shares, Share};

use crate::models::{CalculationResult, PlanetaryPosition};
use tracing::debug;

/// Compute the elemental matrix for a set of positions.
pub fn calculate(positions: &[PlanetaryPosition]) -> CalculationResult {
    let mut totals = aggregator::aggregate(positions);

    let regente_ascendente = ruler::resolve_ruler(positions);
    if let Some(ref ruler) = regente_ascendente {
        if ruler::apply_ruler_bonus(&mut totals, ruler) {
            debug!("Applied ruler bonus for {} in {}", ruler.planeta, ruler.signo);
        }
    }

    let ranked = classifier::rank_elements(&totals);
    let classification = classifier::classify(&ranked);

    CalculationResult {
        luz: classification.luz,
        mascara: classification.mascara,
        sombra: classification.sombra,
        totales_elemento: totals.element_score,
        conteo_planetas_elemento: totals.element_count,
        totales_modalidad: totals.modality_score,
        regente_ascendente,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Element, Modality, Tier};

    fn pos(planet: &str, sign: &str) -> PlanetaryPosition {
        PlanetaryPosition::new(planet, sign)
    }

    fn sample_chart() -> Vec<PlanetaryPosition> {
        vec![
            pos("Sol", "Sagitario"),
            pos("Luna", "Piscis"),
            pos("Ascendente", "Virgo"),
            pos("Mercurio", "Capricornio"),
            pos("Venus", "Escorpio"),
            pos("Marte", "Leo"),
            pos("Júpiter", "Géminis"),
            pos("Saturno", "Acuario"),
            pos("Urano", "Acuario"),
            pos("Neptuno", "Capricornio"),
            pos("Plutón", "Escorpio"),
            pos("Nodo Norte", "Cáncer"),
            pos("Nodo Sur", "Capricornio"),
            pos("Quirón", "Aries"),
        ]
    }

    #[test]
    fn test_end_to_end_without_ruler() {
        let result = calculate(&[
            pos("Sol", "Aries"),
            pos("Luna", "Cáncer"),
            pos("Ascendente", "Libra"),
        ]);

        assert_eq!(result.element_score(Element::Fuego), 7);
        assert_eq!(result.element_score(Element::Agua), 7);
        assert_eq!(result.element_score(Element::Aire), 10);
        assert_eq!(result.element_score(Element::Tierra), 0);
        assert_eq!(result.element_count(Element::Tierra), 0);

        assert_eq!(result.luz, vec![Element::Aire, Element::Fuego]);
        assert_eq!(result.mascara, vec![Element::Agua]);
        assert_eq!(result.sombra, vec![Element::Tierra]);
        assert!(result.regente_ascendente.is_none());
    }

    #[test]
    fn test_ruler_bonus_end_to_end() {
        let result = calculate(&[pos("Ascendente", "Aries"), pos("Marte", "Tauro")]);

        let ruler = result.regente_ascendente.as_ref().unwrap();
        assert_eq!(ruler.planeta, "Marte");
        assert_eq!(ruler.signo, "Tauro");
        assert_eq!(ruler.signo_ascendente, "Aries");
        assert_eq!(result.element_score(Element::Tierra), 5);
        assert_eq!(result.element_count(Element::Tierra), 1);
    }

    #[test]
    fn test_ascendant_alone_has_no_bonus() {
        let result = calculate(&[pos("Ascendente", "Aries")]);

        assert!(result.regente_ascendente.is_none());
        assert_eq!(result.element_score(Element::Fuego), 10);
        assert_eq!(result.modality_score(Modality::Cardinal), 2);
    }

    #[test]
    fn test_modality_total_is_conserved() {
        let positions = sample_chart();
        let result = calculate(&positions);

        let base: u32 = positions
            .iter()
            .filter_map(aggregator::score_position)
            .map(|(_, _, w)| w.modality_score)
            .sum();
        // Virgo is ruled by Mercurio, supplied in Capricornio
        let bonus = tables::planet_weight(tables::ASCENDANT_RULER_KEY)
            .unwrap()
            .modality_score;

        assert!(result.regente_ascendente.is_some());
        let total: u32 = result.totales_modalidad.values().sum();
        assert_eq!(total, base + bonus);
    }

    #[test]
    fn test_rank_monotonicity() {
        let result = calculate(&sample_chart());

        for a in Element::ALL {
            for b in Element::ALL {
                if result.element_score(a) > result.element_score(b) {
                    assert!(result.tier_of(a) <= result.tier_of(b));
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let positions = sample_chart();
        assert_eq!(calculate(&positions), calculate(&positions));
    }

    #[test]
    fn test_order_irrelevant_for_scores() {
        let positions = sample_chart();
        let mut reversed = positions.clone();
        reversed.reverse();

        let a = calculate(&positions);
        let b = calculate(&reversed);
        assert_eq!(a.totales_elemento, b.totales_elemento);
        assert_eq!(a.totales_modalidad, b.totales_modalidad);
        assert_eq!(a.conteo_planetas_elemento, b.conteo_planetas_elemento);
    }

    #[test]
    fn test_unknown_entity_tolerance() {
        let positions = sample_chart();
        let mut noisy = positions.clone();
        noisy.push(pos("Eris", "Tauro"));
        noisy.push(pos("Lilith", "Ofiuco"));
        noisy.push(pos("Sol", "Serpentario"));

        assert_eq!(calculate(&positions), calculate(&noisy));
    }

    #[test]
    fn test_empty_input() {
        let result = calculate(&[]);

        assert_eq!(result.luz, vec![Element::Fuego, Element::Tierra]);
        assert_eq!(result.tier_of(Element::Aire), Tier::Mascara);
        assert_eq!(result.tier_of(Element::Agua), Tier::Sombra);
        assert!(result.totales_modalidad.values().all(|v| *v == 0));
    }
}
