//! § 13 Schönheitsreparaturen.

use crate::format::fmt_eur;
use crate::model::{Decisions, Facts, RedecorationModel};

/// Redecoration clause. Branches on the handover condition first: a unit
/// handed over renovated or newly built carries the full obligation
/// regardless of the chosen model. Units in used condition branch on the
/// model; the compensation variants require a strictly positive numeric
/// parameter and are omitted otherwise.
pub fn redecoration(facts: &Facts, decisions: &Decisions) -> String {
    let condition = facts.condition.trim().to_lowercase();
    if condition == "renoviert" || condition == "neu erstellt" {
        return full_obligation();
    }

    match decisions.redecoration {
        RedecorationModel::None => {
            "Die Durchführung von Schönheitsreparaturen obliegt dem Vermieter. \
             Der Mieter ist nicht zur Durchführung von Schönheitsreparaturen \
             verpflichtet."
                .to_string()
        }
        RedecorationModel::AsUsed => {
            "Der Mieter übernimmt die Schönheitsreparaturen während der Mietzeit, \
             soweit diese durch den vertragsgemäßen Gebrauch der Mietsache \
             erforderlich werden. Der Umfang richtet sich nach dem tatsächlichen \
             Renovierungsbedarf."
                .to_string()
        }
        RedecorationModel::FlatWithoutDeadline => {
            "Der Mieter verpflichtet sich, die Schönheitsreparaturen während der \
             Mietzeit auf eigene Kosten durchzuführen. Feste Renovierungsfristen \
             werden nicht vereinbart; maßgeblich ist der tatsächliche Zustand der \
             Mieträume."
                .to_string()
        }
        RedecorationModel::CostSubsidy => {
            let amount = match decisions.subsidy_amount.trim().parse::<f64>() {
                Ok(v) if v > 0.0 => v,
                _ => return String::new(),
            };
            format!(
                "Die Wohnung wird dem Mieter unrenoviert übergeben. Als Ausgleich \
                 erhält der Mieter vom Vermieter einen einmaligen Kostenzuschuss in \
                 Höhe von {} EUR. Der Mieter übernimmt im Gegenzug die \
                 Schönheitsreparaturen während der Mietzeit.",
                fmt_eur(amount)
            )
        }
        RedecorationModel::RentFreePeriod => {
            let months = match decisions.rent_free_months.trim().parse::<i64>() {
                Ok(m) if m > 0 => m,
                _ => return String::new(),
            };
            format!(
                "Die Wohnung wird dem Mieter unrenoviert übergeben. Als Ausgleich \
                 wird dem Mieter eine mietfreie Zeit von {months} Monaten zu Beginn \
                 des Mietverhältnisses gewährt. Der Mieter übernimmt im Gegenzug \
                 die Schönheitsreparaturen während der Mietzeit."
            )
        }
    }
}

fn full_obligation() -> String {
    "Der Mieter übernimmt die während der Mietzeit erforderlich werdenden \
     Schönheitsreparaturen. Zu den Schönheitsreparaturen gehören das Tapezieren, \
     das Anstreichen der Wände und Decken, das Streichen der Heizkörper \
     einschließlich der Heizrohre, der Innentüren sowie der Fenster und \
     Außentüren von innen."
        .to_string()
}
