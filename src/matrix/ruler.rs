//! Ruler of the Ascendant.
//!
//! Finds the Ascendant, looks up its sign's ruling planet and, when that
//! planet is among the positions, adds the fixed bonus weight to the
//! element and modality of the sign the ruler occupies.

use super::aggregator::Totals;
use super::tables::{planet_weight, ruler_of, sign_info, ASCENDANT, ASCENDANT_RULER_KEY};
use crate::models::{AscendantRuler, PlanetaryPosition};
use tracing::debug;

/// Resolve the ruler of the Ascendant from the supplied positions.
///
/// The first Ascendant entry and the first entry of the ruling planet are used.
pub fn resolve_ruler(positions: &[PlanetaryPosition]) -> Option<AscendantRuler> {
    let ascendant = positions.iter().find(|p| p.planeta == ASCENDANT)?;
    let ruler_name = ruler_of(&ascendant.signo)?;
    let ruler_position = positions.iter().find(|p| p.planeta == ruler_name);

    match ruler_position {
        Some(position) => Some(AscendantRuler {
            planeta: ruler_name.to_string(),
            signo: position.signo.clone(),
            signo_ascendente: ascendant.signo.clone(),
        }),
        None => {
            debug!(
                "Ascendant in {} is ruled by {}, which was not supplied",
                ascendant.signo, ruler_name
            );
            None
        }
    }
}

/// Add the ruler bonus to the totals.
///
/// Returns `true` if the bonus was applied. The planet count is left untouched
/// since the ruling planet was already counted by its own position.
pub fn apply_ruler_bonus(totals: &mut Totals, ruler: &AscendantRuler) -> bool {
    let Some(bonus) = planet_weight(ASCENDANT_RULER_KEY) else {
        return false;
    };
    let Some((element, modality)) = sign_info(&ruler.signo) else {
        debug!("Ruler {} sits in unknown sign {}", ruler.planeta, ruler.signo);
        return false;
    };

    totals.add_bonus(element, modality, bonus);
    true
}
