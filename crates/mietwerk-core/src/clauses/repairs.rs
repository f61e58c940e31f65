//! § 14 Kleinreparaturen.

use crate::format::fmt_eur;
use crate::model::Decisions;

/// Minor-repairs cost clause. The per-incident cap is a literal amount;
/// the annual cap is either a literal amount or a percentage of the annual
/// rent (monthly rent × 12). Both sides must resolve, otherwise the whole
/// clause is omitted — a cap clause with one missing bound is worse than
/// none.
pub fn minor_repairs(decisions: &Decisions) -> String {
    let per_incident = decisions.repair_cap_per_incident.trim();
    if per_incident.is_empty() {
        return String::new();
    }

    let Some(annual) = annual_cap(decisions) else {
        return String::new();
    };

    format!(
        "(1) Der Mieter ist verpflichtet, die Kosten für Kleinreparaturen an \
         allen Teilen des Mietgegenstandes zu tragen, die seinem häufigen \
         Zugriff ausgesetzt sind.\n\n\
         (2) Die Kostentragungspflicht ist für die einzelne Reparatur auf \
         {per_incident} € (inklusive Umsatzsteuer) begrenzt. Außerdem ist die \
         Kostentragungspflicht für alle Kleinreparaturen im Kalenderjahr auf \
         {annual} begrenzt."
    )
}

fn annual_cap(decisions: &Decisions) -> Option<String> {
    let raw = decisions.repair_cap_annual.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(percent_raw) = raw.strip_suffix('%') {
        let percent: f64 = percent_raw.trim().parse().ok()?;
        let rent: f64 = decisions.monthly_rent.trim().parse().ok()?;
        let cap = rent * 12.0 * (percent / 100.0);
        return Some(format!("{} EUR", fmt_eur(cap)));
    }

    let fixed: f64 = raw.replace(',', ".").parse().ok()?;
    Some(format!("{} EUR", fmt_eur(fixed)))
}
