//! Data models for the elemental matrix.
//!
//! This module contains the value types shared by the calculator,
//! the input loaders and the report generator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the four elements.
///
/// Declaration order (Fuego, Tierra, Aire, Agua) is also the ranking
/// tie-break order, so `Ord` must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Fuego,
    Tierra,
    Aire,
    Agua,
}

impl Element {
    /// All elements in declaration order.
    pub const ALL: [Element; 4] = [Element::Fuego, Element::Tierra, Element::Aire, Element::Agua];

    /// English name of the element.
    pub fn english(&self) -> &'static str {
        match self {
            Element::Fuego => "Fire",
            Element::Tierra => "Earth",
            Element::Aire => "Air",
            Element::Agua => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Fuego => write!(f, "Fuego"),
            Element::Tierra => write!(f, "Tierra"),
            Element::Aire => write!(f, "Aire"),
            Element::Agua => write!(f, "Agua"),
        }
    }
}

/// One of the three modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fijo,
    Mutable,
}

impl Modality {
    /// All modalities in declaration order.
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fijo, Modality::Mutable];
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modality::Cardinal => write!(f, "Cardinal"),
            Modality::Fijo => write!(f, "Fijo"),
            Modality::Mutable => write!(f, "Mutable"),
        }
    }
}

/// Classification tier of an element.
///
/// Ordered Luz < Mascara < Sombra, matching rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Ranks 1 and 2.
    Luz,
    /// Rank 3.
    Mascara,
    /// Rank 4.
    Sombra,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Luz => write!(f, "Luz"),
            Tier::Mascara => write!(f, "Máscara"),
            Tier::Sombra => write!(f, "Sombra"),
        }
    }
}

/// A planet (or point) placed in a sign.
///
/// Names are matched exactly against the reference tables, accents included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    /// Planet or point name (e.g. "Júpiter", "Ascendente").
    #[serde(alias = "planet")]
    pub planeta: String,
    /// Sign name (e.g. "Géminis").
    #[serde(alias = "sign")]
    pub signo: String,
}

impl PlanetaryPosition {
    /// Creates a new position.
    pub fn new(planeta: impl Into<String>, signo: impl Into<String>) -> Self {
        Self {
            planeta: planeta.into(),
            signo: signo.into(),
        }
    }
}

impl fmt::Display for PlanetaryPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} en {}", self.planeta, self.signo)
    }
}

/// Score weights of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetWeight {
    /// Points added to the element of the occupied sign.
    pub element_score: u32,
    /// Points added to the modality of the occupied sign.
    pub modality_score: u32,
}

/// The ruling planet of the Ascendant and where it sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantRuler {
    /// Name of the ruling planet.
    pub planeta: String,
    /// Sign occupied by the ruling planet.
    pub signo: String,
    /// Sign of the Ascendant.
    pub signo_ascendente: String,
}

/// Result of an elemental matrix calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// The two highest-ranked elements.
    pub luz: Vec<Element>,
    /// The third-ranked element.
    pub mascara: Vec<Element>,
    /// The lowest-ranked element.
    pub sombra: Vec<Element>,
    /// Aggregate score per element, ruler bonus included.
    pub totales_elemento: BTreeMap<Element, u32>,
    /// Number of recognized positions per element.
    pub conteo_planetas_elemento: BTreeMap<Element, u32>,
    /// Aggregate score per modality, ruler bonus included.
    pub totales_modalidad: BTreeMap<Modality, u32>,
    /// Ruler of the Ascendant, when resolvable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regente_ascendente: Option<AscendantRuler>,
}

impl CalculationResult {
    /// Returns the tier an element was classified into.
    pub fn tier_of(&self, element: Element) -> Tier {
        if self.luz.contains(&element) {
            Tier::Luz
        } else if self.mascara.contains(&element) {
            Tier::Mascara
        } else {
            Tier::Sombra
        }
    }

    /// Score of a single element.
    pub fn element_score(&self, element: Element) -> u32 {
        self.totales_elemento.get(&element).copied().unwrap_or(0)
    }

    /// Planet count of a single element.
    pub fn element_count(&self, element: Element) -> u32 {
        self.conteo_planetas_elemento
            .get(&element)
            .copied()
            .unwrap_or(0)
    }

    /// Score of a single modality.
    pub fn modality_score(&self, modality: Modality) -> u32 {
        self.totales_modalidad.get(&modality).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ordering() {
        assert!(Element::Fuego < Element::Tierra);
        assert!(Element::Tierra < Element::Aire);
        assert!(Element::Aire < Element::Agua);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(Tier::Luz < Tier::Mascara);
        assert!(Tier::Mascara < Tier::Sombra);
        assert_eq!(Tier::Mascara.to_string(), "Máscara");
    }

    #[test]
    fn test_position_accepts_english_field_names() {
        let pos: PlanetaryPosition =
            serde_json::from_str(r#"{"planet": "Sol", "sign": "Leo"}"#).unwrap();
        assert_eq!(pos, PlanetaryPosition::new("Sol", "Leo"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = CalculationResult {
            luz: vec![Element::Aire, Element::Fuego],
            mascara: vec![Element::Agua],
            sombra: vec![Element::Tierra],
            totales_elemento: Element::ALL.iter().map(|e| (*e, 0)).collect(),
            conteo_planetas_elemento: Element::ALL.iter().map(|e| (*e, 0)).collect(),
            totales_modalidad: Modality::ALL.iter().map(|m| (*m, 0)).collect(),
            regente_ascendente: None,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"totalesElemento\""));
        assert!(json.contains("\"conteoPlanetasElemento\""));
        assert!(json.contains("\"Fuego\":0"));
        assert!(!json.contains("regenteAscendente"));

        assert_eq!(result.tier_of(Element::Aire), Tier::Luz);
        assert_eq!(result.tier_of(Element::Agua), Tier::Mascara);
        assert_eq!(result.tier_of(Element::Tierra), Tier::Sombra);
    }
}
