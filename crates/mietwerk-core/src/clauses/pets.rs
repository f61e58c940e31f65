//! § 10 Tierhaltung.

use crate::model::{Decisions, Facts, PetTone};

/// Pet-keeping clause. Standard and stricter tones carry fixed texts with
/// an optional appended special agreement; the custom tone renders only
/// the special agreement and is omitted when no details were submitted.
pub fn pets(facts: &Facts, decisions: &Decisions) -> String {
    let details = facts.pet_details.trim();

    let base = match decisions.pet_tone {
        PetTone::Custom => {
            return if details.is_empty() {
                String::new()
            } else {
                format!("Sondervereinbarung: {details}")
            };
        }
        PetTone::Standard => {
            "Die Kleintierhaltung (Zierfische, Kleinvögel, Hamster, etc.) ist im \
             üblichen Rahmen erlaubt. Andere Tiere dürfen nur mit vorheriger \
             Zustimmung des Vermieters gehalten werden."
        }
        PetTone::Stricter => {
            "Das Halten von Tieren bedarf der vorherigen schriftlichen Zustimmung \
             des Vermieters. Dies gilt auch für Kleintiere. Der Vermieter kann die \
             Zustimmung bei berechtigtem Interesse widerrufen."
        }
        PetTone::Unspecified => return String::new(),
    };

    if details.is_empty() {
        base.to_string()
    } else {
        format!("{base}\n\nSondervereinbarung: {details}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn standard_tone() {
        let f = normalize::facts(&json!({}));
        let d = normalize::decisions(&json!({"tiere_ton": "standard"}));
        let text = pets(&f, &d);
        assert!(text.starts_with("Die Kleintierhaltung"));
        assert!(!text.contains("Sondervereinbarung"));
    }

    #[test]
    fn stricter_tone_with_details_appended() {
        let f = normalize::facts(&json!({"tiere_details": "Ein Hund ist bereits vorhanden."}));
        let d = normalize::decisions(&json!({"tiere_ton": "restriktiver"}));
        let text = pets(&f, &d);
        assert!(text.starts_with("Das Halten von Tieren"));
        assert!(text.ends_with("Sondervereinbarung: Ein Hund ist bereits vorhanden."));
    }

    #[test]
    fn custom_tone_renders_only_details() {
        let f = normalize::facts(&json!({"tiere_details": "Zwei Katzen sind erlaubt."}));
        let d = normalize::decisions(&json!({"tiere_ton": "individuell"}));
        assert_eq!(pets(&f, &d), "Sondervereinbarung: Zwei Katzen sind erlaubt.");

        let no_details = normalize::facts(&json!({}));
        assert_eq!(pets(&no_details, &d), "");
    }

    #[test]
    fn unspecified_tone_is_omitted() {
        let f = normalize::facts(&json!({"tiere_details": "Hund"}));
        let d = normalize::decisions(&json!({}));
        assert_eq!(pets(&f, &d), "");
    }
}
