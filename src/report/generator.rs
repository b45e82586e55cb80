//! Markdown and JSON report generation.

use super::{ChartReport, ReportMetadata};
use crate::config::ReportConfig;
use crate::matrix::{breakdown::Contribution, Share};
use crate::models::{AscendantRuler, CalculationResult, Element, PlanetaryPosition};
use anyhow::Result;

/// Generate a complete Markdown report.
pub fn generate_markdown_report(report: &ChartReport, options: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", report.metadata.title));
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_classification_section(&report.result));
    output.push_str(&generate_elements_section(
        &report.result,
        &report.element_shares,
        options.include_shares,
    ));
    output.push_str(&generate_modalities_section(
        &report.modality_shares,
        options.include_shares,
    ));

    if let Some(ref ruler) = report.result.regente_ascendente {
        output.push_str(&generate_ruler_section(ruler));
    }

    if options.include_breakdown {
        output.push_str(&generate_breakdown_section(&report.breakdown));
    }

    if options.include_ignored {
        output.push_str(&generate_ignored_section(&report.ignored));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!(
        "- **Positions:** {} supplied, {} scored\n",
        metadata.positions_supplied, metadata.positions_scored
    ));
    section.push('\n');

    section
}

fn join_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| format!("{} ({})", e, e.english()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate the Luz / Máscara / Sombra section.
fn generate_classification_section(result: &CalculationResult) -> String {
    let mut section = String::new();

    section.push_str("## Classification\n\n");
    section.push_str(&format!("- **Luz:** {}\n", join_elements(&result.luz)));
    section.push_str(&format!(
        "- **Máscara:** {}\n",
        join_elements(&result.mascara)
    ));
    section.push_str(&format!("- **Sombra:** {}\n", join_elements(&result.sombra)));
    section.push('\n');

    section
}

/// Generate the element table, in ranking order.
fn generate_elements_section(
    result: &CalculationResult,
    shares: &[Share],
    include_shares: bool,
) -> String {
    let mut section = String::new();

    section.push_str("## Elements\n\n");
    if include_shares {
        section.push_str("| Element | Score | Planets | Share | Tier |\n");
        section.push_str("|:---|:---:|:---:|:---:|:---|\n");
    } else {
        section.push_str("| Element | Score | Planets | Tier |\n");
        section.push_str("|:---|:---:|:---:|:---|\n");
    }

    for share in shares {
        let Some(element) = Element::ALL.iter().find(|e| e.to_string() == share.name) else {
            continue;
        };
        let count = result.element_count(*element);
        let tier = result.tier_of(*element);

        if include_shares {
            section.push_str(&format!(
                "| {} | {} | {} | {:.1}% | {} |\n",
                share.name, share.score, count, share.percentage, tier
            ));
        } else {
            section.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                share.name, share.score, count, tier
            ));
        }
    }
    section.push('\n');

    section
}

/// Generate the modality table.
fn generate_modalities_section(shares: &[Share], include_shares: bool) -> String {
    let mut section = String::new();

    section.push_str("## Modalities\n\n");
    if include_shares {
        section.push_str("| Modality | Score | Share |\n");
        section.push_str("|:---|:---:|:---:|\n");
        for share in shares {
            section.push_str(&format!(
                "| {} | {} | {:.1}% |\n",
                share.name, share.score, share.percentage
            ));
        }
    } else {
        section.push_str("| Modality | Score |\n");
        section.push_str("|:---|:---:|\n");
        for share in shares {
            section.push_str(&format!("| {} | {} |\n", share.name, share.score));
        }
    }
    section.push('\n');

    section
}

/// Generate the ruler of the Ascendant section.
fn generate_ruler_section(ruler: &AscendantRuler) -> String {
    format!(
        "## Ruler of the Ascendant\n\n**{}** in {} (rules {})\n\n",
        ruler.planeta, ruler.signo, ruler.signo_ascendente
    )
}

/// Generate the per-position contribution table.
fn generate_breakdown_section(rows: &[Contribution]) -> String {
    let mut section = String::new();

    section.push_str("## Breakdown\n\n");
    if rows.is_empty() {
        section.push_str("No recognized positions.\n\n");
        return section;
    }

    section.push_str("| Planet | Sign | Element | Modality | Points |\n");
    section.push_str("|:---|:---|:---|:---|---:|\n");

    for row in rows {
        if row.bonus {
            section.push_str(&format!(
                "| *{}* | {} | {} | {} | +{} |\n",
                row.planeta, row.signo, row.element, row.modality, row.element_points
            ));
        } else {
            section.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                row.planeta, row.signo, row.element, row.modality, row.element_points
            ));
        }
    }
    section.push('\n');

    section
}

/// Generate the list of positions left out of the scores.
fn generate_ignored_section(ignored: &[PlanetaryPosition]) -> String {
    if ignored.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Ignored Positions\n\n");
    section.push_str("These entries did not match a known planet or sign:\n\n");
    for position in ignored {
        section.push_str(&format!("- {}\n", position));
    }
    section.push('\n');

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    format!(
        "---\n\n*Report generated by matriz-elemental v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Generate a JSON report.
pub fn generate_json_report(report: &ChartReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}
