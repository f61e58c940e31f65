//! § 3 Mietzeit, the contract-duration resolver, and the ordinary
//! termination exclusion with its calendar-correct month addition.

use chrono::{Datelike, NaiveDate};

use crate::error::ClauseError;
use crate::format::{fmt_date_de, parse_date_flexible};
use crate::model::{ContractDuration, Decisions, Facts, TerminationExclusionModel};

/// Resolved termination/duration fields for the render context.
#[derive(Debug, Clone)]
pub struct DurationFields {
    pub contract_type: String,
    pub end_date: String,
    pub notice_tenant: String,
    pub notice_landlord: String,
    pub fixed_term_reason: String,
}

/// Resolve contract duration and termination rules.
///
/// An unrecognized duration mode is a data-contract violation and raises a
/// hard error instead of defaulting — by the time Decisions reach the
/// clause engine, validation must have rejected it.
pub fn resolve_duration(decisions: &Decisions) -> Result<DurationFields, ClauseError> {
    match &decisions.duration {
        ContractDuration::OpenEnded => Ok(DurationFields {
            contract_type: "unbefristet".to_string(),
            end_date: String::new(),
            notice_tenant: format!("{} Monate", months_or_default(&decisions.notice_months_tenant)),
            notice_landlord: format!(
                "{} Monate",
                months_or_default(&decisions.notice_months_landlord)
            ),
            fixed_term_reason: String::new(),
        }),
        ContractDuration::FixedTerm => Ok(DurationFields {
            contract_type: "befristet".to_string(),
            end_date: fmt_date_de(&decisions.end_date),
            notice_tenant: "Vor Ablauf ausgeschlossen".to_string(),
            notice_landlord: "Vor Ablauf ausgeschlossen".to_string(),
            fixed_term_reason: format!("Befristungsgrund: {}", decisions.fixed_term_reason),
        }),
        ContractDuration::Other(mode) => Err(ClauseError::UnknownDuration(mode.clone())),
    }
}

fn months_or_default(value: &str) -> i64 {
    value.trim().parse().unwrap_or(3)
}

/// § 3 Mietzeit block: start date, open-ended run, optional waiver of
/// ordinary termination, and the always-included § 545 BGB exclusion.
pub fn tenancy_term(facts: &Facts, decisions: &Decisions) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "(1) Das Mietverhältnis beginnt am {}.",
        fmt_date_de(&facts.move_in)
    ));

    parts.push(
        "(2) Der Mietvertrag läuft auf unbestimmte Zeit und kann mit \
         gesetzlicher Frist (§ 573c BGB) gekündigt werden."
            .to_string(),
    );

    let mut no = 3;
    let waiver_years: i64 = decisions.termination_waiver_years.trim().parse().unwrap_or(0);
    if waiver_years > 0 {
        parts.push(format!(
            "({no}) Die Parteien verzichten für den Zeitraum von {waiver_years} \
             Jahren auf das Recht zur ordentlichen Kündigung gemäß § 573c BGB. \
             Das Recht zur außerordentlichen Kündigung bleibt hiervon unberührt."
        ));
        no += 1;
    }

    parts.push(format!(
        "({no}) § 545 BGB wird ausgeschlossen. Durch den Gebrauch des \
         Mietgegenstands nach Vertragsablauf durch den Mieter verlängert sich \
         das Mietverhältnis nicht."
    ));

    parts.join("\n\n")
}

/// Kündigungsausschluss: mutual waiver of ordinary termination for a fixed
/// number of months. Valid only for open-ended contracts with a positive
/// month count; every other configuration omits the clause.
pub fn termination_exclusion(decisions: &Decisions) -> String {
    if decisions.termination_exclusion != TerminationExclusionModel::Mutual {
        return String::new();
    }

    let months: i64 = match decisions.termination_exclusion_months.trim().parse() {
        Ok(m) if m > 0 => m,
        _ => return String::new(),
    };

    if decisions.duration == ContractDuration::FixedTerm {
        return String::new();
    }

    let mut text = format!(
        "Die Parteien verzichten wechselseitig für die Dauer von {months} Monaten \
         ab Mietbeginn auf ihr Recht zur ordentlichen Kündigung."
    );

    if let Some(start) = parse_date_flexible(&decisions.move_in) {
        let earliest = add_months(start, months as u32);
        text.push_str(&format!(
            " Eine ordentliche Kündigung ist erstmals zum {} möglich.",
            fmt_date_de(&earliest.format("%Y-%m-%d").to_string())
        ));
    }

    text
}

/// Calendar-correct month addition: year rollover is handled and the day
/// is clamped to the last valid day of the target month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let zero_based = date.month0() + months;
    let year = date.year() + (zero_based / 12) as i32;
    let month = zero_based % 12 + 1;
    let day = date.day().min(days_in_month(year, month));
    // Components are clamped to a valid calendar day above.
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).expect("valid month start"))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_yields_notice_periods() {
        let d = normalize::decisions(&json!({"vertragsart_final": "unbefristet"}));
        let fields = resolve_duration(&d).unwrap();
        assert_eq!(fields.contract_type, "unbefristet");
        assert_eq!(fields.end_date, "");
        assert_eq!(fields.notice_tenant, "3 Monate");
        assert_eq!(fields.fixed_term_reason, "");
    }

    #[test]
    fn fixed_term_suppresses_ordinary_notice() {
        let d = normalize::decisions(&json!({
            "vertragsart_final": "befristet",
            "mietende": "2027-06-30",
            "befristungsgrund": "Eigenbedarf nach Rückkehr aus dem Ausland",
        }));
        let fields = resolve_duration(&d).unwrap();
        assert_eq!(fields.contract_type, "befristet");
        assert_eq!(fields.end_date, "30.06.2027");
        assert_eq!(fields.notice_tenant, "Vor Ablauf ausgeschlossen");
        assert!(fields.fixed_term_reason.starts_with("Befristungsgrund: Eigenbedarf"));
    }

    #[test]
    fn unrecognized_duration_is_a_hard_error() {
        let d = normalize::decisions(&json!({"vertragsart_final": "quarterly"}));
        let err = resolve_duration(&d).unwrap_err();
        assert!(matches!(err, ClauseError::UnknownDuration(ref m) if m == "quarterly"));
    }

    #[test]
    fn term_block_without_waiver() {
        let f = normalize::facts(&json!({"mietbeginn": "2025-04-01"}));
        let d = normalize::decisions(&json!({}));
        let text = tenancy_term(&f, &d);
        assert!(text.contains("beginnt am 01.04.2025"));
        assert!(text.contains("(3) § 545 BGB wird ausgeschlossen."));
        assert!(!text.contains("verzichten für den Zeitraum"));
    }

    #[test]
    fn term_block_with_waiver_renumbers() {
        let f = normalize::facts(&json!({"mietbeginn": "2025-04-01"}));
        let d = normalize::decisions(&json!({"kuendigungsverzicht": "2"}));
        let text = tenancy_term(&f, &d);
        assert!(text.contains("(3) Die Parteien verzichten für den Zeitraum von 2 Jahren"));
        assert!(text.contains("(4) § 545 BGB wird ausgeschlossen."));
    }

    #[test]
    fn add_months_plain() {
        assert_eq!(add_months(date(2024, 1, 15), 3), date(2024, 4, 15));
    }

    #[test]
    fn add_months_year_rollover() {
        assert_eq!(add_months(date(2024, 11, 30), 3), date(2025, 2, 28));
    }

    #[test]
    fn add_months_leap_day_clamp() {
        assert_eq!(add_months(date(2024, 2, 29), 12), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 2, 29), 48), date(2028, 2, 29));
    }

    #[test]
    fn add_months_day_clamp_to_short_month() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 3, 31), 1), date(2024, 4, 30));
    }

    #[test]
    fn exclusion_requires_mutual_model_and_positive_months() {
        let base = json!({
            "kuendigungsausschluss_model": "MUTUAL",
            "kuendigungsausschluss_monate": "24",
            "mietbeginn": "2024-02-29",
        });
        let d = normalize::decisions(&base);
        // move_in on Decisions comes from ro_mietbeginn
        let d = Decisions { move_in: "2024-02-29".into(), ..d };
        let text = termination_exclusion(&d);
        assert!(text.contains("Dauer von 24 Monaten"));
        assert!(text.contains("erstmals zum 28.02.2026 möglich"));

        let none = normalize::decisions(&json!({"kuendigungsausschluss_monate": "24"}));
        assert_eq!(termination_exclusion(&none), "");

        let zero = normalize::decisions(&json!({
            "kuendigungsausschluss_model": "MUTUAL",
            "kuendigungsausschluss_monate": "0",
        }));
        assert_eq!(termination_exclusion(&zero), "");

        let garbage = normalize::decisions(&json!({
            "kuendigungsausschluss_model": "MUTUAL",
            "kuendigungsausschluss_monate": "bald",
        }));
        assert_eq!(termination_exclusion(&garbage), "");
    }

    #[test]
    fn exclusion_not_for_fixed_term() {
        let d = normalize::decisions(&json!({
            "kuendigungsausschluss_model": "MUTUAL",
            "kuendigungsausschluss_monate": "12",
            "vertragsart_final": "befristet",
        }));
        assert_eq!(termination_exclusion(&d), "");
    }

    #[test]
    fn exclusion_without_start_date_omits_earliest_date() {
        let d = normalize::decisions(&json!({
            "kuendigungsausschluss_model": "MUTUAL",
            "kuendigungsausschluss_monate": "12",
        }));
        let text = termination_exclusion(&d);
        assert!(text.contains("Dauer von 12 Monaten"));
        assert!(!text.contains("erstmals zum"));
    }
}
