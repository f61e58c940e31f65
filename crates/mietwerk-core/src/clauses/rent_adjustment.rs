//! Mietanpassung: standard, index-linked, or staged schedule.

use crate::error::ClauseError;
use crate::format::{fmt_date_de, fmt_eur_str};
use crate::model::{Decisions, StagedStep};

/// Rent-adjustment clause. Index-linked and staged rent are mutually
/// exclusive; both flags reaching this function means validation was
/// bypassed and the render must abort.
pub fn rent_adjustment(decisions: &Decisions) -> Result<String, ClauseError> {
    if decisions.index_linked && decisions.staged {
        return Err(ClauseError::ConflictingRentAdjustment);
    }

    if decisions.index_linked {
        return Ok(
            "Die Miete ist als Indexmiete nach § 557b BGB vereinbart. \
             Die Veränderung der Miethöhe erfolgt entsprechend der Veränderung \
             des vom Statistischen Bundesamt ermittelten Verbraucherpreisindexes \
             für Deutschland."
                .to_string(),
        );
    }

    if decisions.staged {
        return Ok(format!(
            "Die Miete ist als Staffelmiete vereinbart. \
             Die Miete erhöht sich zu den folgenden Zeitpunkten:\n\n{}",
            schedule_text(&decisions.staged_schedule)
        ));
    }

    Ok("Die Veränderung der Miethöhe richtet sich nach den gesetzlichen Bestimmungen.".to_string())
}

/// Render the staged schedule as a numbered list; entries missing either
/// field are skipped, an empty result renders as an em dash.
pub fn schedule_text(steps: &[StagedStep]) -> String {
    let lines: Vec<String> = steps
        .iter()
        .filter(|step| !step.from.trim().is_empty() && !step.amount.trim().is_empty())
        .enumerate()
        .map(|(i, step)| {
            format!(
                "{}. ab {}: {} EUR",
                i + 1,
                fmt_date_de(step.from.trim()),
                fmt_eur_str(step.amount.trim())
            )
        })
        .collect();

    if lines.is_empty() {
        "—".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn default_is_statutory_adjustment() {
        let d = normalize::decisions(&json!({}));
        assert_eq!(
            rent_adjustment(&d).unwrap(),
            "Die Veränderung der Miethöhe richtet sich nach den gesetzlichen Bestimmungen."
        );
    }

    #[test]
    fn index_linked_text() {
        let d = normalize::decisions(&json!({"indexmiete": "Ja"}));
        assert!(rent_adjustment(&d).unwrap().contains("§ 557b BGB"));
    }

    #[test]
    fn staged_with_schedule() {
        let d = normalize::decisions(&json!({
            "staffelmiete": "Ja",
            "staffelmiete_schedule": [
                {"ab": "2027-01-01", "miete": "1250"},
                {"ab": "2028-01-01", "miete": "1300"},
            ],
        }));
        let text = rent_adjustment(&d).unwrap();
        assert!(text.contains("Staffelmiete vereinbart"));
        assert!(text.contains("1. ab 01.01.2027: 1.250,00 EUR"));
        assert!(text.contains("2. ab 01.01.2028: 1.300,00 EUR"));
    }

    #[test]
    fn staged_without_schedule_renders_dash() {
        let d = normalize::decisions(&json!({"staffelmiete": "Ja"}));
        assert!(rent_adjustment(&d).unwrap().ends_with("—"));
    }

    #[test]
    fn conflicting_flags_abort() {
        let d = normalize::decisions(&json!({"indexmiete": "Ja", "staffelmiete": "Ja"}));
        assert!(matches!(
            rent_adjustment(&d),
            Err(ClauseError::ConflictingRentAdjustment)
        ));
    }

    #[test]
    fn schedule_skips_incomplete_steps() {
        let steps = vec![
            StagedStep { from: "2027-01-01".into(), amount: "1250".into() },
            StagedStep { from: String::new(), amount: "1300".into() },
        ];
        assert_eq!(schedule_text(&steps), "1. ab 01.01.2027: 1.250,00 EUR");
    }
}
