//! § 9 (3) Untervermietung.

use crate::model::{Decisions, SublettingModel};

/// Subletting clause variants. The custom variant requires non-blank text;
/// any other configuration without a recognized model omits the paragraph.
pub fn subletting(decisions: &Decisions) -> String {
    match decisions.subletting {
        SublettingModel::ConsentWithAssignment => {
            "(3) Für den Fall einer Untervermietung tritt der Mieter die ihm gegen \
             den Untermieter zustehenden Forderungen nebst Pfandrecht bis zur Höhe \
             der Mietforderungen des Vermieters an den Vermieter ab. \
             Der Vermieter nimmt die Abtretung an."
                .to_string()
        }
        SublettingModel::ConsentOnly => {
            "(3) Der Mieter hat die Zustimmung des Vermieters einzuholen, bevor er \
             den Mietgegenstand oder Teile davon einem Dritten zum Gebrauch überlässt."
                .to_string()
        }
        SublettingModel::Custom => {
            let text = decisions.subletting_text.trim();
            if text.is_empty() {
                String::new()
            } else {
                format!("(3) {text}")
            }
        }
        SublettingModel::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn assignment_variant() {
        let d = normalize::decisions(&json!({"unterverm_klausel": "Zustimmung + Sicherungsabtretung"}));
        assert!(subletting(&d).contains("nimmt die Abtretung an"));
    }

    #[test]
    fn consent_only_variant() {
        let d = normalize::decisions(&json!({"unterverm_klausel": "nur Zustimmung"}));
        assert!(subletting(&d).starts_with("(3) Der Mieter hat die Zustimmung"));
    }

    #[test]
    fn custom_requires_text() {
        let with_text = normalize::decisions(&json!({
            "unterverm_klausel": "individuell",
            "unterverm_individuell_text": "Untervermietung an Angehörige ist gestattet.",
        }));
        assert_eq!(
            subletting(&with_text),
            "(3) Untervermietung an Angehörige ist gestattet."
        );

        let blank = normalize::decisions(&json!({
            "unterverm_klausel": "individuell",
            "unterverm_individuell_text": "   ",
        }));
        assert_eq!(subletting(&blank), "");
    }

    #[test]
    fn unknown_model_is_omitted() {
        let d = normalize::decisions(&json!({"unterverm_klausel": "irgendwas"}));
        assert_eq!(subletting(&d), "");
    }
}
