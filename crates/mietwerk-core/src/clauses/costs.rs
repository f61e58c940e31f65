//! § 4/5 rent and operating-cost table, § 7 operating-cost clauses.

use crate::format::{fmt_eur, parse_amount};
use crate::model::{Decisions, Facts, OperatingCostModel};

/// Build the rent/operating-cost table rows in their fixed sequence.
///
/// A line row is included only when its amount parses and is strictly
/// positive. The total row is always appended last, even when no line row
/// qualified.
pub fn cost_table(facts: &Facts) -> Vec<(String, String)> {
    let lines: [(&str, &str); 7] = [
        ("Die Miete beträgt monatlich", &facts.base_rent),
        ("+ Zuschlag für Möblierung", &facts.furnishing_surcharge),
        (
            "+ Zuschlag für teilgewerbliche Nutzung",
            &facts.commercial_surcharge,
        ),
        ("+ Zuschlag für Untervermietung", &facts.subletting_surcharge),
        (
            "Vorauszahlung für die Betriebskosten für Heizung und Warmwasser",
            &facts.heating_advance,
        ),
        (
            "Vorauszahlung für andere Betriebskosten gemäß § 2 der Betriebskostenverordnung",
            &facts.operating_advance,
        ),
        ("Garagen- oder Stellplatzmiete", &facts.parking_rent),
    ];

    let mut rows = Vec::new();
    let mut total = 0.0;
    for (label, value) in lines {
        let Some(amount) = parse_amount(value) else {
            continue;
        };
        if amount <= 0.0 {
            continue;
        }
        total += amount;
        rows.push((label.to_string(), fmt_eur(amount)));
    }

    rows.push(("monatlich zu zahlender Gesamtbetrag".to_string(), fmt_eur(total)));
    rows
}

/// Operating-cost billing clause: none, flat fee, or advance payment with
/// annual settlement and catalog enumeration.
pub fn operating_costs(decisions: &Decisions) -> String {
    let oc = &decisions.operating_costs;
    match oc.model {
        OperatingCostModel::None => String::new(),
        OperatingCostModel::Flat => {
            let mut text = "Die Betriebskosten sind mit einer monatlichen Pauschale \
                 abgegolten. Eine gesonderte Abrechnung erfolgt nicht."
                .to_string();
            if !oc.monthly_amount.is_empty() {
                text.push_str(&format!(" Die Pauschale beträgt {} EUR.", oc.monthly_amount));
            }
            text
        }
        OperatingCostModel::AdvancePayment => {
            let mut text =
                "Der Mieter leistet monatliche Vorauszahlungen auf die Betriebskosten."
                    .to_string();
            if !oc.monthly_amount.is_empty() {
                text.push_str(&format!(
                    " Die Vorauszahlung beträgt {} EUR.",
                    oc.monthly_amount
                ));
            }
            if oc.settlement == "ANNUAL" {
                text.push_str(
                    " Über die Vorauszahlungen wird jährlich nach den gesetzlichen \
                     Vorschriften abgerechnet.",
                );
            }
            if !oc.catalog.is_empty() {
                text.push_str(&format!(
                    " Umlagefähig sind insbesondere folgende Betriebskosten: {}.",
                    oc.catalog.join(", ")
                ));
            }
            text
        }
    }
}

/// § 7 (3) additional operating-cost positions: numbered list, or the
/// fixed no-extra-items sentence.
pub fn extra_cost_items(decisions: &Decisions) -> String {
    let items: Vec<&String> = decisions
        .operating_costs
        .extra_items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .collect();

    if items.is_empty() {
        return "Es werden keine zusätzlichen Positionen vereinbart.".to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}
