//! § 1 Mietgegenstand and the optional preamble.

use crate::format::{fmt_date_de, fmt_decimal_de};
use crate::model::{Decisions, Facts};

/// Preamble for newly-built units; empty for every other handover
/// condition. A missing readiness date is shown as an em dash rather than
/// hiding the whole preamble.
pub fn preamble(facts: &Facts) -> String {
    if facts.condition.trim().to_lowercase() != "neu erstellt" {
        return String::new();
    }

    let mut date = fmt_date_de(&facts.ready_for_occupancy);
    if date.is_empty() {
        date = "—".to_string();
    }

    format!(
        "Präambel - Besondere Hinweise\n\n\
         Die Wohnung wurde neu errichtet und am {date} bezugsfertig."
    )
}

/// § 1 subject-matter block: address, unit description, fixtures, living
/// area, and a conditional condominium paragraph.
pub fn subject_matter(facts: &Facts, decisions: &Decisions) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "(1) Vermietet werden im Gebäude\n{}\n\nfolgende Wohnräume:",
        facts.property.address
    ));

    let mut description = facts.property.unit_label.clone();
    if !facts.property.side_rooms.is_empty() {
        description.push_str(", bestehend aus ");
        description.push_str(&facts.property.side_rooms.join(", "));
    }
    parts.push(description);

    let fixtures = if facts.property.fixtures.is_empty() {
        "keine"
    } else {
        &facts.property.fixtures
    };
    parts.push(format!(
        "\nMitvermietet werden folgende Einrichtungsgegenstände:\n{fixtures}"
    ));

    let area = fmt_decimal_de(&facts.property.living_area);
    parts.push(format!(
        "\n(2) Als Wohnfläche wird eine Größe von {area} m² vereinbart. \
         Bei der Ermittlung der Fläche wurden Flächen wie Balkone, Loggien \
         und Terrassen zu 50 % berücksichtigt."
    ));

    // (3) only for condominium units within an owners' association.
    if facts.property.unit_type == "Eigentumswohnung in Mehrfamilienhaus"
        && facts.property.condo == "ja"
    {
        let mut condo = format!(
            "(3) Umlageschlüssel für Nebenkosten bei Eigentumswohnung\n\n\
             Der Mietgegenstand ist eine Eigentumswohnung. Die Abrechnung der \
             Nebenkosten – ausgenommen der Grundsteuer und ggf. der Heizkosten – \
             erfolgt im Rahmen der Wohnungseigentümergemeinschaft.\n\n\
             Auf die Wohnung entfallen {} Miteigentumsanteile.",
            facts.property.condo_share
        );
        if !decisions.condo_text.is_empty() {
            condo.push_str("\n\n");
            condo.push_str(&decisions.condo_text);
        }
        parts.push(condo);
    }

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn preamble_only_for_new_builds() {
        let f = normalize::facts(&json!({
            "zustand": "neu erstellt",
            "bezugsfertig": "2024-03-01",
        }));
        let text = preamble(&f);
        assert!(text.contains("Präambel"));
        assert!(text.contains("01.03.2024"));

        let used = normalize::facts(&json!({"zustand": "unrenoviert"}));
        assert_eq!(preamble(&used), "");
    }

    #[test]
    fn preamble_missing_date_shows_dash() {
        let f = normalize::facts(&json!({"zustand": "Neu erstellt"}));
        assert!(preamble(&f).contains("am — bezugsfertig"));
    }

    #[test]
    fn subject_matter_lists_side_rooms_and_fixtures() {
        let f = normalize::facts(&json!({
            "objektadresse": "Hauptstraße 1, 10115 Berlin",
            "wohnung_bez": "2-Zimmer-Wohnung im 3. OG links",
            "nebenraeume": ["Keller", "Dachboden"],
            "ausstattung": "Einbauküche",
            "wohnflaeche": "75.5",
        }));
        let d = normalize::decisions(&json!({}));
        let text = subject_matter(&f, &d);
        assert!(text.contains("Hauptstraße 1, 10115 Berlin"));
        assert!(text.contains("bestehend aus Keller, Dachboden"));
        assert!(text.contains("Einbauküche"));
        assert!(text.contains("75,50 m²"));
        assert!(!text.contains("Eigentumswohnung. Die Abrechnung"));
    }

    #[test]
    fn subject_matter_defaults_fixtures_to_keine() {
        let f = normalize::facts(&json!({"wohnung_bez": "Wohnung"}));
        let d = normalize::decisions(&json!({}));
        assert!(subject_matter(&f, &d).contains("Einrichtungsgegenstände:\nkeine"));
    }

    #[test]
    fn condo_paragraph_requires_unit_type_and_flag() {
        let f = normalize::facts(&json!({
            "wohnungsart": "Eigentumswohnung in Mehrfamilienhaus",
            "weg": "ja",
            "mea": "125/10.000",
        }));
        let d = normalize::decisions(&json!({"weg_text": "Die Hausordnung der WEG gilt."}));
        let text = subject_matter(&f, &d);
        assert!(text.contains("125/10.000 Miteigentumsanteile"));
        assert!(text.contains("Die Hausordnung der WEG gilt."));

        let no_flag = normalize::facts(&json!({
            "wohnungsart": "Eigentumswohnung in Mehrfamilienhaus",
        }));
        assert!(!subject_matter(&no_flag, &d).contains("Miteigentumsanteile"));
    }
}
