//! Mietpreisbremse (§§ 556d–556f BGB).

use chrono::NaiveDate;

use crate::format::parse_date_flexible;
use crate::model::{Decisions, Facts};

const NEW_BUILD_TEXT: &str =
    "Die Wohnung, die Gegenstand dieses Mietvertrages ist, wurde vor dem \
     1. Oktober 2014 weder genutzt noch vermietet. Eine Nutzung oder \
     Vermietung erfolgte erst nach dem 1. Oktober 2014 (§ 556f BGB).";

/// Rent-control compliance clause, evaluated in stages: new-build
/// exemption first, then prior-tenancy age, then the cap check, finally
/// the exceeded case with its selected justifications.
pub fn rent_control(facts: &Facts, decisions: &Decisions) -> String {
    // Stage 1: unit ready for occupancy after the § 556f cutoff.
    let cutoff = NaiveDate::from_ymd_opt(2014, 10, 1).unwrap_or_default();
    if let Some(ready) = parse_date_flexible(&facts.ready_for_occupancy) {
        if ready >= cutoff {
            return NEW_BUILD_TEXT.to_string();
        }
    }

    let rc = &decisions.rent_control;

    // Stage 2: attorney marked the unit as a new build.
    if rc.new_build {
        return NEW_BUILD_TEXT.to_string();
    }

    // Stage 3: prior tenancy predates June 2015.
    let mut parts = Vec::new();
    if rc.prior_tenancy == "vor_juni_2015" {
        parts.push("Das Vormietverhältnis hat vor dem 1. Juni 2015 begonnen.".to_string());
        return parts.join("\n");
    }

    parts.push("Das Vormietverhältnis hat nach dem 1. Juni 2015 begonnen.".to_string());

    // Stage 4: agreed rent stays under the § 556d cap.
    if rc.under_cap {
        parts.push(
            "Die in diesem Mietvertrag geforderte Miete überschreitet die nach \
             § 556d BGB (sogenannte „Mietpreisbremse“) zulässige Miete nicht."
                .to_string(),
        );
        return parts.join("\n");
    }

    parts.push(
        "Die in diesem Mietvertrag geforderte Miete überschreitet die nach \
         § 556d BGB (sogenannte „Mietpreisbremse“) zulässige Miete."
            .to_string(),
    );
    parts.push(
        "Der Vermieter erklärt hiermit vor Mietvertragsabschluss, dass die \
         vereinbarte Miete auf folgender Ausnahme von § 556d BGB \
         (zulässige Miethöhe bei Mietbeginn) beruht:\n"
            .to_string(),
    );

    if rc.prior_rent {
        parts.push(String::new());
        parts.push(format!(
            "Die Vormiete gemäß § 556e Abs. 1 BGB betrug {} Euro (Nettokaltmiete).",
            rc.prior_rent_text
        ));
    }

    if rc.modernized {
        parts.push(String::new());
        parts.push(
            "In den letzten drei Jahren vor Beginn dieses Mietverhältnisses wurde \
             eine Modernisierung im Sinne des § 555b BGB durchgeführt, für die \
             eine Modernisierungsmieterhöhung zulässig gewesen wäre \
             (§ 556e Abs. 2 BGB)."
                .to_string(),
        );
        if !rc.modernized_text.is_empty() {
            parts.push(String::new());
            parts.push(rc.modernized_text.clone());
        }
    }

    if rc.first_letting {
        parts.push(String::new());
        parts.push(
            "Bei diesem Mietvertragsabschluss handelt es sich um den ersten nach \
             umfassender Modernisierung (§ 556f BGB)."
                .to_string(),
        );
        if !rc.first_letting_text.is_empty() {
            parts.push(String::new());
            parts.push(rc.first_letting_text.clone());
        }
    }

    parts.join("\n")
}
