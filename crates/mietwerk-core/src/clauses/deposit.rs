//! § 8 Mietsicherheit (Kaution).

use crate::format::fmt_eur;
use crate::model::{Decisions, Facts};

/// Deposit clause: months times monthly rent, payable in three
/// installments. Both factors must parse to non-zero values, otherwise the
/// clause is omitted.
pub fn security_deposit(facts: &Facts, decisions: &Decisions) -> String {
    let months_raw = if facts.deposit_months.trim().is_empty() {
        &decisions.deposit_months
    } else {
        &facts.deposit_months
    };

    let Ok(months) = months_raw.trim().parse::<i64>() else {
        return String::new();
    };
    let Ok(rent) = decisions.monthly_rent.trim().parse::<f64>() else {
        return String::new();
    };
    if months == 0 || rent == 0.0 {
        return String::new();
    }

    let amount = rent * months as f64;

    format!(
        "(1) Der Mieter ist verpflichtet, eine Mietsicherheit in Höhe von \
         {months} Monatsmieten = {} EUR an den Vermieter zu leisten.\n\n\
         (2) Der Mieter ist zu drei gleichen monatlichen Teilzahlungen berechtigt.\n\n\
         (3) Die erste Teilzahlung ist zu Beginn des Mietverhältnisses fällig. \
         Die weiteren Teilzahlungen werden zusammen mit den unmittelbar folgenden \
         Mietzahlungen fällig.\n\n\
         (4) Für die Anlage der Mietkaution sowie die Verzinsung gelten die \
         gesetzlichen Bestimmungen.",
        fmt_eur(amount)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    #[test]
    fn deposit_from_months_and_rent() {
        let f = normalize::facts(&json!({"kaution": "3"}));
        let d = normalize::decisions(&json!({"ro_grundmiete": "1200"}));
        let text = security_deposit(&f, &d);
        assert!(text.contains("3 Monatsmieten = 3.600,00 EUR"));
        assert!(text.contains("(4) Für die Anlage der Mietkaution"));
    }

    #[test]
    fn mask_b_months_used_as_fallback() {
        let f = normalize::facts(&json!({}));
        let d = normalize::decisions(&json!({"kaution": "2", "ro_grundmiete": "800"}));
        assert!(security_deposit(&f, &d).contains("2 Monatsmieten = 1.600,00 EUR"));
    }

    #[test]
    fn empty_when_either_factor_fails_to_parse() {
        let f = normalize::facts(&json!({"kaution": "drei"}));
        let d = normalize::decisions(&json!({"ro_grundmiete": "1200"}));
        assert_eq!(security_deposit(&f, &d), "");

        let f = normalize::facts(&json!({"kaution": "3"}));
        let d = normalize::decisions(&json!({}));
        assert_eq!(security_deposit(&f, &d), "");
    }

    #[test]
    fn empty_when_zero() {
        let f = normalize::facts(&json!({"kaution": "0"}));
        let d = normalize::decisions(&json!({"ro_grundmiete": "1200"}));
        assert_eq!(security_deposit(&f, &d), "");
    }
}
