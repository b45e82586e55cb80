//! Tier classification.
//!
//! Ranks the four elements by score, then planet count, and splits the
//! ranking into Luz (ranks 1-2), Máscara (rank 3) and Sombra (rank 4).

use super::aggregator::Totals;
use crate::models::Element;

/// Score and count of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementStanding {
    pub element: Element,
    pub score: u32,
    pub count: u32,
}

/// Tier partition of the four elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub luz: Vec<Element>,
    pub mascara: Vec<Element>,
    pub sombra: Vec<Element>,
}

/// Rank elements by score descending, then count descending.
///
/// The sort is stable over `Element::ALL`, so full ties keep declaration order.
pub fn rank_elements(totals: &Totals) -> Vec<ElementStanding> {
    let mut ranked: Vec<ElementStanding> = Element::ALL
        .iter()
        .map(|&element| ElementStanding {
            element,
            score: totals.element_score.get(&element).copied().unwrap_or(0),
            count: totals.element_count.get(&element).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.count.cmp(&a.count)));

    ranked
}

/// Partition a ranking of the four elements into tiers by position.
pub fn classify(ranked: &[ElementStanding]) -> Classification {
    let elements: Vec<Element> = ranked.iter().map(|s| s.element).collect();

    Classification {
        luz: elements.iter().take(2).copied().collect(),
        mascara: elements.iter().skip(2).take(1).copied().collect(),
        sombra: elements.iter().skip(3).take(1).copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Modality;
    use crate::models::PlanetWeight;

    fn totals_with(scores: [(Element, u32, u32); 4]) -> Totals {
        let mut totals = Totals::default();
        for (element, score, count) in scores {
            totals.element_score.insert(element, score);
            totals.element_count.insert(element, count);
        }
        totals
    }

    #[test]
    fn test_rank_by_score() {
        let totals = totals_with([
            (Element::Fuego, 3, 1),
            (Element::Tierra, 12, 2),
            (Element::Aire, 7, 1),
            (Element::Agua, 0, 0),
        ]);

        let ranked = rank_elements(&totals);
        let order: Vec<Element> = ranked.iter().map(|s| s.element).collect();
        assert_eq!(
            order,
            vec![Element::Tierra, Element::Aire, Element::Fuego, Element::Agua]
        );
    }

    #[test]
    fn test_count_breaks_score_ties() {
        let totals = totals_with([
            (Element::Fuego, 7, 1),
            (Element::Tierra, 7, 3),
            (Element::Aire, 7, 2),
            (Element::Agua, 1, 1),
        ]);

        let classification = classify(&rank_elements(&totals));
        assert_eq!(classification.luz, vec![Element::Tierra, Element::Aire]);
        assert_eq!(classification.mascara, vec![Element::Fuego]);
        assert_eq!(classification.sombra, vec![Element::Agua]);
    }

    #[test]
    fn test_full_tie_keeps_declaration_order() {
        let classification = classify(&rank_elements(&Totals::default()));
        assert_eq!(classification.luz, vec![Element::Fuego, Element::Tierra]);
        assert_eq!(classification.mascara, vec![Element::Aire]);
        assert_eq!(classification.sombra, vec![Element::Agua]);
    }

    #[test]
    fn test_partition_is_complete() {
        let mut totals = Totals::default();
        totals.add_planet(
            Element::Agua,
            Modality::Mutable,
            PlanetWeight {
                element_score: 4,
                modality_score: 1,
            },
        );

        let c = classify(&rank_elements(&totals));
        assert_eq!(c.luz.len(), 2);
        assert_eq!(c.mascara.len(), 1);
        assert_eq!(c.sombra.len(), 1);

        let mut all: Vec<Element> = c
            .luz
            .iter()
            .chain(&c.mascara)
            .chain(&c.sombra)
            .copied()
            .collect();
        all.sort();
        assert_eq!(all, Element::ALL.to_vec());
    }
}
