//! Static reference tables.
//!
//! Sign qualities, planet weights and sign rulerships. All lookups are
//! exact, case-sensitive matches on the Spanish names.

use crate::models::{Element, Modality, PlanetWeight};

/// Planet key of the Ascendant position.
pub const ASCENDANT: &str = "Ascendente";

/// Synthetic planet key holding the ruler-of-the-Ascendant bonus weights.
pub const ASCENDANT_RULER_KEY: &str = "Regente del Ascendente (RA)";

/// Signs in zodiac order with their element and modality.
const SIGNS: [(&str, Element, Modality); 12] = [
    ("Aries", Element::Fuego, Modality::Cardinal),
    ("Tauro", Element::Tierra, Modality::Fijo),
    ("Géminis", Element::Aire, Modality::Mutable),
    ("Cáncer", Element::Agua, Modality::Cardinal),
    ("Leo", Element::Fuego, Modality::Fijo),
    ("Virgo", Element::Tierra, Modality::Mutable),
    ("Libra", Element::Aire, Modality::Cardinal),
    ("Escorpio", Element::Agua, Modality::Fijo),
    ("Sagitario", Element::Fuego, Modality::Mutable),
    ("Capricornio", Element::Tierra, Modality::Cardinal),
    ("Acuario", Element::Aire, Modality::Fijo),
    ("Piscis", Element::Agua, Modality::Mutable),
];

const fn weight(element_score: u32, modality_score: u32) -> PlanetWeight {
    PlanetWeight {
        element_score,
        modality_score,
    }
}

/// Element and modality weights per planet or point.
const PLANET_WEIGHTS: [(&str, PlanetWeight); 15] = [
    (ASCENDANT, weight(10, 2)),
    ("Luna", weight(7, 2)),
    ("Sol", weight(7, 2)),
    ("Mercurio", weight(5, 1)),
    ("Venus", weight(5, 1)),
    ("Marte", weight(4, 1)),
    ("Júpiter", weight(4, 1)),
    ("Saturno", weight(3, 1)),
    ("Nodo Norte", weight(1, 1)),
    (ASCENDANT_RULER_KEY, weight(1, 1)),
    ("Urano", weight(0, 1)),
    ("Neptuno", weight(0, 1)),
    ("Plutón", weight(0, 1)),
    ("Quirón", weight(0, 1)),
    ("Nodo Sur", weight(0, 1)),
];

/// Ruling planet per sign (modern rulerships for Escorpio, Acuario, Piscis).
const RULERS: [(&str, &str); 12] = [
    ("Aries", "Marte"),
    ("Tauro", "Venus"),
    ("Géminis", "Mercurio"),
    ("Cáncer", "Luna"),
    ("Leo", "Sol"),
    ("Virgo", "Mercurio"),
    ("Libra", "Venus"),
    ("Escorpio", "Plutón"),
    ("Sagitario", "Júpiter"),
    ("Capricornio", "Saturno"),
    ("Acuario", "Urano"),
    ("Piscis", "Neptuno"),
];

/// Element and modality of a sign.
pub fn sign_info(sign: &str) -> Option<(Element, Modality)> {
    SIGNS
        .iter()
        .find(|(name, _, _)| *name == sign)
        .map(|(_, element, modality)| (*element, *modality))
}

/// Score weights of a planet or point.
pub fn planet_weight(planet: &str) -> Option<PlanetWeight> {
    PLANET_WEIGHTS
        .iter()
        .find(|(name, _)| *name == planet)
        .map(|(_, w)| *w)
}

/// Ruling planet of a sign.
pub fn ruler_of(sign: &str) -> Option<&'static str> {
    RULERS
        .iter()
        .find(|(name, _)| *name == sign)
        .map(|(_, ruler)| *ruler)
}

/// Sign name at a zodiac index (0 = Aries). Wraps modulo 12.
pub fn sign_name_at(index: usize) -> &'static str {
    SIGNS[index % SIGNS.len()].0
}

/// All sign names in zodiac order.
#[cfg(test)]
pub fn sign_names() -> impl Iterator<Item = &'static str> {
    SIGNS.iter().map(|(name, _, _)| *name)
}
