//! Normalization of raw Mask A / Mask B submissions into canonical records.
//!
//! Both entry points are total: a missing or wrongly-typed field defaults
//! to an empty string, an empty list, or a named default. The raw frontend
//! field names (German form ids) are mapped here and nowhere else.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::model::{
    AnnexModel, ContractDuration, Decisions, Facts, OperatingCostModel, OperatingCosts, PartyFacts,
    PetTone, PropertyFacts, RedecorationModel, RentControl, RentControlStatus, ReturnRule,
    StagedStep, SublettingModel, TerminationExclusionModel,
};

/// Normalize a raw Mask A submission into canonical [`Facts`].
pub fn facts(raw: &Value) -> Facts {
    Facts {
        role: scalar(raw, "rolle").to_lowercase(),
        own: PartyFacts {
            name: scalar(raw, "eigene_name"),
            address: scalar(raw, "eigene_anschrift"),
            email: scalar(raw, "eigene_email"),
            phone: scalar(raw, "eigene_telefon"),
            iban: scalar(raw, "eigene_iban"),
        },
        counterparty: PartyFacts {
            name: scalar(raw, "gegenpartei_name"),
            address: scalar(raw, "gegenpartei_anschrift"),
            email: scalar(raw, "gegenpartei_email"),
            phone: scalar(raw, "gegenpartei_telefon"),
            iban: scalar(raw, "zahler_iban"),
        },
        represented: scalar(raw, "wird_vertreten") == "ja",
        representative: scalar(raw, "vertreten_durch"),
        vat_id: scalar(raw, "ust_id"),
        tax_number: scalar(raw, "steuernummer"),
        property: PropertyFacts {
            address: scalar(raw, "objektadresse"),
            unit_label: scalar(raw, "wohnung_bez"),
            side_rooms: list(raw, "nebenraeume"),
            fixtures: scalar(raw, "ausstattung"),
            living_area: scalar(raw, "wohnflaeche"),
            unit_type: scalar(raw, "wohnungsart"),
            condo: scalar(raw, "weg"),
            condo_share: scalar(raw, "mea"),
            city: extract_city(&scalar(raw, "objektadresse")),
        },
        move_in: scalar(raw, "mietbeginn"),
        ready_for_occupancy: scalar(raw, "bezugsfertig"),
        condition: scalar(raw, "zustand"),
        key_count: scalar(raw, "schluessel_anzahl"),
        key_types: list(raw, "schluessel_arten"),
        base_rent: scalar(raw, "grundmiete"),
        furnishing_surcharge: scalar(raw, "zuschlag_moeblierung"),
        commercial_surcharge: scalar(raw, "zuschlag_teilgewerbe"),
        subletting_surcharge: scalar(raw, "zuschlag_unterverm"),
        heating_advance: scalar(raw, "vz_heizung"),
        operating_advance: scalar(raw, "vz_bk"),
        parking_rent: scalar(raw, "stellplatzmiete"),
        pets: scalar(raw, "tiere"),
        pet_details: scalar(raw, "tiere_details"),
        deposit_months: scalar(raw, "kaution"),
        raw: raw.clone(),
    }
}

/// Normalize a raw Mask B submission into canonical [`Decisions`].
pub fn decisions(raw: &Value) -> Decisions {
    Decisions {
        duration: duration(&scalar(raw, "vertragsart_final")),
        end_date: scalar(raw, "mietende"),
        fixed_term_reason: scalar(raw, "befristungsgrund"),
        notice_months_tenant: scalar_or(raw, "kuendigungsfrist_mieter_monate", "3"),
        notice_months_landlord: scalar_or(raw, "kuendigungsfrist_vermieter_monate", "3"),
        move_in: scalar(raw, "ro_mietbeginn"),
        monthly_rent: scalar(raw, "ro_grundmiete"),
        deposit_months: scalar(raw, "kaution"),
        index_linked: truthy(raw, "indexmiete"),
        staged: truthy(raw, "staffelmiete")
            || scalar(raw, "mietanpassung_normalfall") == "staffel",
        staged_schedule: staged_schedule(raw),
        condo_text: scalar(raw, "weg_text"),
        rent_control: rent_control(raw),
        operating_costs: operating_costs(raw),
        subletting: subletting(&scalar(raw, "unterverm_klausel")),
        subletting_text: scalar(raw, "unterverm_individuell_text"),
        repair_cap_per_incident: scalar(raw, "kleinrep_je"),
        repair_cap_annual: scalar(raw, "kleinrep_jahr"),
        pet_tone: pet_tone(&scalar(raw, "tiere_ton")),
        termination_waiver_years: scalar(raw, "kuendigungsverzicht"),
        termination_exclusion: if scalar(raw, "kuendigungsausschluss_model").to_uppercase()
            == "MUTUAL"
        {
            TerminationExclusionModel::Mutual
        } else {
            TerminationExclusionModel::None
        },
        termination_exclusion_months: scalar(raw, "kuendigungsausschluss_monate"),
        surroundings: scalar(raw, "umgebung_laerm"),
        redecoration: redecoration(raw),
        subsidy_amount: scalar(raw, "sr_ausgleich_betrag"),
        rent_free_months: scalar(raw, "sr_ausgleich_monate"),
        return_rule: return_rule(&scalar(raw, "endrueckgabe_regel")),
        return_tasks: string_or_list(raw, "endarbeiten_liste"),
        annex_model: if scalar(raw, "anlagen_model").to_uppercase() == "LIST" {
            AnnexModel::List
        } else {
            AnnexModel::None
        },
        annexes: list(raw, "anlagen_list"),
        annex_data_protection: truthy(raw, "anlage_datenschutz"),
        raw: raw.clone(),
    }
}

fn duration(value: &str) -> ContractDuration {
    match value.to_lowercase().as_str() {
        "" | "unbefristet" => ContractDuration::OpenEnded,
        "befristet" => ContractDuration::FixedTerm,
        other => ContractDuration::Other(other.to_string()),
    }
}

fn rent_control(raw: &Value) -> RentControl {
    let status = scalar(raw, "mpb_status");
    RentControl {
        status: match status.as_str() {
            "bereits_vermietet" | "neuvermietung" => RentControlStatus::Compliant,
            _ => RentControlStatus::NotApplicable,
        },
        new_build: status == "neubau",
        prior_tenancy: scalar(raw, "mpb_vormiet"),
        under_cap: scalar(raw, "mpb_grenze") == "ja",
        prior_rent: truthy(raw, "mpb_vormiete"),
        prior_rent_text: scalar(raw, "mpb_vormiete_text"),
        modernized: truthy(raw, "mpb_modern"),
        modernized_text: scalar(raw, "mpb_modern_text"),
        first_letting: truthy(raw, "mpb_erstmiete"),
        first_letting_text: scalar(raw, "mpb_erstmiete_text"),
    }
}

fn operating_costs(raw: &Value) -> OperatingCosts {
    OperatingCosts {
        model: match scalar(raw, "nebenkosten_model").to_uppercase().as_str() {
            "PAUSCHALE" => OperatingCostModel::Flat,
            "VORAUSZAHLUNG" => OperatingCostModel::AdvancePayment,
            _ => OperatingCostModel::None,
        },
        monthly_amount: scalar(raw, "nebenkosten_vorauszahlung_monatlich"),
        settlement: scalar_or(raw, "nebenkosten_abrechnung", "ANNUAL"),
        catalog: list(raw, "betriebskosten_katalog"),
        extra_items: list(raw, "zusatz_bk"),
    }
}

fn subletting(value: &str) -> SublettingModel {
    match value {
        "Zustimmung + Sicherungsabtretung" => SublettingModel::ConsentWithAssignment,
        "nur Zustimmung" => SublettingModel::ConsentOnly,
        "individuell" => SublettingModel::Custom,
        _ => SublettingModel::None,
    }
}

fn pet_tone(value: &str) -> PetTone {
    match value.to_lowercase().as_str() {
        "standard" => PetTone::Standard,
        "restriktiver" => PetTone::Stricter,
        "individuell" => PetTone::Custom,
        _ => PetTone::Unspecified,
    }
}

/// Map the redecoration model from the attorney's decision-tree labels,
/// falling back to the per-question flags when no label was submitted.
fn redecoration(raw: &Value) -> RedecorationModel {
    match scalar(raw, "sr_modell").as_str() {
        "keine" | "NONE" => return RedecorationModel::None,
        "nach Abnutzung" | "SOFT" => return RedecorationModel::AsUsed,
        "Pauschal (ohne Fristen)" => return RedecorationModel::FlatWithoutDeadline,
        "Kostenzuschuss" => return RedecorationModel::CostSubsidy,
        "Mietfreiheit" => return RedecorationModel::RentFreePeriod,
        _ => {}
    }

    if truthy(raw, "sr_unrenoviert_ohne") {
        return RedecorationModel::FlatWithoutDeadline;
    }
    if truthy(raw, "sr_unrenoviert_mit") {
        match scalar(raw, "sr_ausgleich_option").to_lowercase().as_str() {
            "zuschuss" => return RedecorationModel::CostSubsidy,
            "mietfrei" => return RedecorationModel::RentFreePeriod,
            _ => {}
        }
    }

    RedecorationModel::default()
}

fn return_rule(value: &str) -> ReturnRule {
    match value.to_lowercase().as_str() {
        "vertragsgemäß/sauber" | "vertragsgemaess/sauber" => ReturnRule::CleanAndContractual,
        "zusätzliche endarbeiten" | "zusaetzliche endarbeiten" => ReturnRule::AdditionalTasks,
        _ => ReturnRule::Unspecified,
    }
}

// ── Staged-schedule parsing ──

static STAGED_STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"ab\s+(\d{2})\.(\d{2})\.(\d{4}).*?(\d+)").expect("staged-step pattern")
});

/// The schedule may arrive pre-structured or as free text, one entry per
/// `;`-separated segment of the form `ab DD.MM.YYYY +<amount>`.
fn staged_schedule(raw: &Value) -> Vec<StagedStep> {
    match raw.get("staffelmiete_schedule") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| StagedStep {
                from: scalar(item, "ab"),
                amount: scalar(item, "miete"),
            })
            .collect(),
        Some(Value::String(text)) => parse_staged_text(text),
        _ => Vec::new(),
    }
}

/// Defensive free-text parser; unparsable segments are skipped, not fatal.
pub fn parse_staged_text(text: &str) -> Vec<StagedStep> {
    text.split(';')
        .filter_map(|segment| {
            let caps = STAGED_STEP.captures(segment.trim())?;
            Some(StagedStep {
                from: format!("{}-{}-{}", &caps[3], &caps[2], &caps[1]),
                amount: caps[4].to_string(),
            })
        })
        .collect()
}

/// City is the part of the property address after the last comma.
fn extract_city(address: &str) -> String {
    match address.rsplit_once(',') {
        Some((_, city)) => city.trim().to_string(),
        None => String::new(),
    }
}

// ── Raw-value accessors ──

/// Scalar field as string: strings are trimmed, numbers and booleans are
/// rendered, everything else (missing, null, list, object) is empty.
fn scalar(raw: &Value, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn scalar_or(raw: &Value, key: &str, default: &str) -> String {
    let v = scalar(raw, key);
    if v.is_empty() { default.to_string() } else { v }
}

/// List field: non-list values normalize to the empty list; entries are
/// stringified and blank entries dropped.
fn list(raw: &Value, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => {
                    let t = s.trim();
                    (!t.is_empty()).then(|| t.to_string())
                }
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Field that may be a newline-separated string or a list of strings.
fn string_or_list(raw: &Value, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(_)) => list(raw, key),
        Some(Value::String(s)) => s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

/// Truthiness for checkbox-style fields: JSON true, "ja", or "true".
fn truthy(raw: &Value, key: &str) -> bool {
    match raw.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            s == "ja" || s == "true"
        }
        _ => false,
    }
}
