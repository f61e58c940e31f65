//! Pre-render validation of the canonical records.
//!
//! Violations are accumulated, never short-circuited — the form UI must be
//! able to show every problem at once. Messages are user-facing German.

use crate::model::{ContractDuration, Decisions, Facts};

/// Exhaustive validation result.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub ok: bool,
    pub errors: Vec<String>,
}

/// Validate canonical Facts/Decisions; pure, does not mutate input.
pub fn validate(facts: &Facts, decisions: &Decisions) -> ValidationReport {
    let mut errors = Vec::new();

    if facts.role.is_empty() {
        errors.push("maskA.rolle ist erforderlich (Vermieter/Mieter).".to_string());
    }

    if decisions.duration == ContractDuration::FixedTerm {
        if decisions.end_date.is_empty() {
            errors.push("Bei 'befristet' ist 'mietende' erforderlich.".to_string());
        }
        if decisions.fixed_term_reason.is_empty() {
            errors.push("Bei 'befristet' ist 'befristungsgrund' erforderlich.".to_string());
        }
    }

    if decisions.index_linked && decisions.staged {
        errors.push(
            "Indexmiete und Staffelmiete dürfen nicht gleichzeitig aktiv sein.".to_string(),
        );
    }

    ValidationReport {
        ok: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn valid_minimal_submission() {
        let f = normalize::facts(&json!({"rolle": "vermieter"}));
        let d = normalize::decisions(&json!({}));
        let report = validate(&f, &d);
        assert!(report.ok);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn missing_role_is_reported() {
        let f = normalize::facts(&json!({}));
        let d = normalize::decisions(&json!({}));
        let report = validate(&f, &d);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("rolle"));
    }

    #[test]
    fn fixed_term_requires_end_date_and_reason() {
        let f = normalize::facts(&json!({"rolle": "vermieter"}));
        let d = normalize::decisions(&json!({"vertragsart_final": "befristet"}));
        let report = validate(&f, &d);
        assert!(!report.ok);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn all_violations_are_accumulated() {
        let f = normalize::facts(&json!({}));
        let d = normalize::decisions(&json!({
            "vertragsart_final": "befristet",
            "indexmiete": true,
            "staffelmiete": true,
        }));
        let report = validate(&f, &d);
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn mutually_exclusive_rent_adjustment() {
        let f = normalize::facts(&json!({"rolle": "mieter"}));
        let d = normalize::decisions(&json!({"indexmiete": true, "staffelmiete": "Ja"}));
        let report = validate(&f, &d);
        assert!(!report.ok);
        assert!(report.errors[0].contains("Staffelmiete"));
    }
}
