//! § 2 Zustand des Mietgegenstandes und Schlüssel.

use crate::model::{Decisions, Facts};

/// Condition-at-handover and key inventory block. Paragraph numbers after
/// the conditional surroundings paragraphs are recomputed, never
/// hard-coded.
pub fn condition_and_keys(facts: &Facts, decisions: &Decisions) -> String {
    let mut parts = Vec::new();

    let condition = if facts.condition.trim().is_empty() {
        "im besichtigten Zustand"
    } else {
        facts.condition.trim()
    };
    parts.push(format!("(1) Der Mietgegenstand wird {condition} übergeben."));

    parts.push(
        "(2) Über den Zustand des Mietgegenstandes zum Zeitpunkt der Übergabe \
         erstellen die Parteien ein Übernahmeprotokoll."
            .to_string(),
    );

    let mut no = 3;
    match decisions.surroundings.as_str() {
        "aufnehmen" => {
            parts.push(format!(
                "({no}) Vereinbarungen über die Lage bzw. das Umfeld des \
                 Mietgegenstands sind nicht getroffen. Insbesondere sind dem \
                 Mieter bekannt bzw. während der Besichtigung erkennbar gewesen:"
            ));
            no += 1;
            parts.push(format!(
                "({no}) Dem Mieter ist bekannt, dass sich der Mietgegenstand in \
                 einer Umgebung befindet, in der es zu situativen \
                 Geräuschentwicklungen kommen kann."
            ));
            no += 1;
            parts.push(format!(
                "({no}) Die Mietparteien sind sich einig, dass etwaige \
                 Beeinträchtigungen aus dem Umfeld oder von dritten Personen \
                 den Mieter nicht zur Minderung berechtigen."
            ));
            no += 1;
        }
        "nicht aufnehmen" => {
            parts.push(format!(
                "({no}) Vereinbarungen über die Lage bzw. das Umfeld des \
                 Mietgegenstands sind nicht getroffen."
            ));
            no += 1;
        }
        _ => {}
    }

    let types = if facts.key_types.is_empty() {
        "—".to_string()
    } else {
        facts.key_types.join(", ")
    };
    parts.push(format!(
        "({no}) Der Mieter erhält vom Vermieter für die Mietzeit die im \
         Übernahmeprotokoll aufgeführten Schlüssel. Dies sind {} Schlüssel, \
         davon: {types}",
        facts.key_count
    ));

    parts.join("\n\n")
}
