//! Annex list and the two clauses that cite annexes by number.
//!
//! The list is the single source of annex numbering for one render: the
//! block builder and both referencing clauses share one [`AnnexList`] so a
//! cited number can never drift from the printed list.

use crate::model::{AnnexModel, Decisions};

const DATA_PROTECTION_ANNEX: &str = "Datenschutzinformation für Mieter";

/// Ordered annex names for one render. Numbering is 1-based and stable;
/// the data-protection annex is auto-inserted at the front exactly once
/// when flagged and not already present.
#[derive(Debug, Clone)]
pub struct AnnexList {
    names: Vec<String>,
    /// Whether the numbered list is actually printed (annex model is
    /// `List` and at least one name survived cleaning).
    rendered: bool,
}

impl AnnexList {
    pub fn from_decisions(decisions: &Decisions) -> Self {
        let mut names: Vec<String> = decisions
            .annexes
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if decisions.annex_data_protection && Self::position_in(&names, "datenschutz").is_none() {
            names.insert(0, DATA_PROTECTION_ANNEX.to_string());
        }

        let rendered = decisions.annex_model == AnnexModel::List && !names.is_empty();
        Self { names, rendered }
    }

    /// 1-based number of the first annex whose name contains `needle`
    /// case-insensitively; `None` when absent or when the list is not
    /// printed at all (a citation into an unprinted list would dangle).
    pub fn citation(&self, needle: &str) -> Option<usize> {
        if !self.rendered {
            return None;
        }
        Self::position_in(&self.names, needle)
    }

    fn position_in(names: &[String], needle: &str) -> Option<usize> {
        let needle = needle.to_lowercase();
        names
            .iter()
            .position(|name| name.to_lowercase().contains(&needle))
            .map(|i| i + 1)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// The printed annex block, numbered 1-based under its heading; empty when
/// the annex model is `None` or no names survived cleaning.
pub fn annex_block(list: &AnnexList) -> String {
    if !list.rendered {
        return String::new();
    }

    let mut lines = vec!["§ Anlagen / Vertragsbestandteile".to_string(), String::new(), "Anlagen:".to_string()];
    for (i, name) in list.names.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, name));
    }
    lines.join("\n")
}

/// § 22 data-processing notice; cites the data-protection annex by number
/// when it is printed, generic phrasing otherwise.
pub fn data_processing(list: &AnnexList) -> String {
    let intro = "Der Mieter wird darüber informiert, dass der Vermieter die zur \
                 Durchführung dieses Mietverhältnisses erforderlichen \
                 personenbezogenen Daten des Mieters verarbeitet.";
    match list.citation("datenschutz") {
        Some(no) => format!(
            "{intro} Die Datenschutzinformation ist diesem Vertrag als Anlage {no} beigefügt."
        ),
        None => format!("{intro} Die Datenschutzinformation wird dem Mieter gesondert übergeben."),
    }
}

/// Energy-certificate notice; same citation mechanics.
pub fn energy_certificate(list: &AnnexList) -> String {
    let intro = "Dem Mieter wurde vor Abschluss dieses Vertrages der Energieausweis \
                 für das Gebäude vorgelegt.";
    match list.citation("energieausweis") {
        Some(no) => format!(
            "{intro} Eine Kopie des Energieausweises ist diesem Vertrag als Anlage {no} beigefügt."
        ),
        None => format!("{intro} Eine Kopie des Energieausweises wird dem Mieter übergeben."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    fn list_for(raw: serde_json::Value) -> AnnexList {
        AnnexList::from_decisions(&normalize::decisions(&raw))
    }

    #[test]
    fn numbered_block_under_heading() {
        let list = list_for(json!({
            "anlagen_model": "LIST",
            "anlagen_list": ["Übergabeprotokoll", "Hausordnung"],
        }));
        let block = annex_block(&list);
        assert!(block.starts_with("§ Anlagen / Vertragsbestandteile"));
        assert!(block.contains("1. Übergabeprotokoll"));
        assert!(block.contains("2. Hausordnung"));
    }

    #[test]
    fn model_none_renders_nothing() {
        let list = list_for(json!({"anlagen_list": ["Hausordnung"]}));
        assert_eq!(annex_block(&list), "");
    }

    #[test]
    fn empty_list_renders_nothing() {
        let list = list_for(json!({"anlagen_model": "LIST", "anlagen_list": ["  "]}));
        assert_eq!(annex_block(&list), "");
    }

    #[test]
    fn data_protection_inserted_at_front_exactly_once() {
        let list = list_for(json!({
            "anlagen_model": "LIST",
            "anlagen_list": ["Hausordnung"],
            "anlage_datenschutz": true,
        }));
        assert_eq!(list.names()[0], "Datenschutzinformation für Mieter");
        assert_eq!(list.names().len(), 2);
        assert_eq!(list.citation("datenschutz"), Some(1));
    }

    #[test]
    fn existing_data_protection_annex_is_not_duplicated() {
        let list = list_for(json!({
            "anlagen_model": "LIST",
            "anlagen_list": ["Hausordnung", "Hinweise zum DATENSCHUTZ"],
            "anlage_datenschutz": true,
        }));
        assert_eq!(list.names().len(), 2);
        assert_eq!(list.citation("datenschutz"), Some(2));
    }

    #[test]
    fn clauses_cite_the_annex_number() {
        let list = list_for(json!({
            "anlagen_model": "LIST",
            "anlagen_list": ["Energieausweis (Kopie)", "Hausordnung"],
            "anlage_datenschutz": true,
        }));
        assert!(data_processing(&list).contains("als Anlage 1 beigefügt"));
        assert!(energy_certificate(&list).contains("als Anlage 2 beigefügt"));
    }

    #[test]
    fn clauses_fall_back_to_generic_phrasing() {
        let list = list_for(json!({}));
        assert!(data_processing(&list).contains("gesondert übergeben"));
        assert!(energy_certificate(&list).contains("wird dem Mieter übergeben"));
    }
}
