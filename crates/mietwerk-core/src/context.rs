//! Render-context assembly.
//!
//! One flat mapping from placeholder key to value, built fresh per render.
//! Every key in the vocabulary is present after [`build_render_context`]
//! returns, empty strings included; the merge engine treats an absent key
//! as empty text, so emptiness carries the "omit this paragraph" meaning
//! either way.

use std::collections::BTreeMap;

use tracing::debug;

use crate::clauses::annexes::AnnexList;
use crate::clauses::{
    annexes, condition, costs, deposit, fixed, pets, redecoration, rent_adjustment, rent_control,
    repairs, return_of_property, subject, subletting, term,
};
use crate::error::ClauseError;
use crate::format::{fmt_date_de, fmt_eur_str, format_iban};
use crate::keys;
use crate::model::{Decisions, Facts, PartyFacts};

/// A resolved placeholder value: text, or the one cost-table row list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderValue {
    Text(String),
    Table(Vec<(String, String)>),
}

/// Flat placeholder-key → value mapping for one render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: BTreeMap<String, RenderValue>,
}

impl RenderContext {
    pub fn set_text(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), RenderValue::Text(value.into()));
    }

    pub fn set_table(&mut self, key: &str, rows: Vec<(String, String)>) {
        self.values.insert(key.to_string(), RenderValue::Table(rows));
    }

    /// Text value for a key; absent keys and table values read as empty.
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(RenderValue::Text(s)) => s,
            _ => "",
        }
    }

    pub fn table(&self, key: &str) -> &[(String, String)] {
        match self.values.get(key) {
            Some(RenderValue::Table(rows)) => rows,
            _ => &[],
        }
    }

    /// All text entries, in stable key order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().filter_map(|(k, v)| match v {
            RenderValue::Text(s) => Some((k.as_str(), s.as_str())),
            RenderValue::Table(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The two parties with role-dependent assignment resolved.
struct ResolvedParties<'a> {
    landlord: PartyView<'a>,
    tenant: PartyView<'a>,
}

/// One party as it appears in header and signature blocks. Representation
/// and tax identifiers attach only to the submitter's own party.
struct PartyView<'a> {
    party: &'a PartyFacts,
    represented: bool,
    representative: &'a str,
    vat_id: &'a str,
    tax_number: &'a str,
}

impl<'a> PartyView<'a> {
    fn own(facts: &'a Facts) -> Self {
        Self {
            party: &facts.own,
            represented: facts.represented,
            representative: &facts.representative,
            vat_id: &facts.vat_id,
            tax_number: &facts.tax_number,
        }
    }

    fn counterparty(facts: &'a Facts) -> Self {
        Self {
            party: &facts.counterparty,
            represented: false,
            representative: "",
            vat_id: "",
            tax_number: "",
        }
    }

    fn header_block(&self) -> String {
        let mut lines = Vec::new();
        if !self.party.name.is_empty() {
            lines.push(self.party.name.clone());
        }
        if self.represented && !self.representative.is_empty() {
            lines.push(format!("vertreten durch {}", self.representative));
        }
        if !self.party.address.is_empty() {
            lines.push(self.party.address.clone());
        }
        if !self.vat_id.is_empty() {
            lines.push(format!("USt-ID: {}", self.vat_id));
        }
        if !self.tax_number.is_empty() {
            lines.push(format!("Steuernummer: {}", self.tax_number));
        }
        lines.join("\n")
    }

    fn signature_block(&self, role_label: &str) -> String {
        let mut lines = Vec::new();
        if !self.party.name.is_empty() {
            lines.push(self.party.name.clone());
        }
        if self.represented && !self.representative.is_empty() {
            lines.push(format!("vertreten durch {}", self.representative));
        }
        lines.push(role_label.to_string());
        lines.join("\n")
    }
}

/// Role resolution: `vermieter` makes the submitter the landlord, `mieter`
/// the tenant. Any other role value falls back to treating the submitter
/// as landlord.
fn resolve_parties(facts: &Facts) -> ResolvedParties<'_> {
    if facts.role == "mieter" {
        ResolvedParties {
            landlord: PartyView::counterparty(facts),
            tenant: PartyView::own(facts),
        }
    } else {
        ResolvedParties {
            landlord: PartyView::own(facts),
            tenant: PartyView::counterparty(facts),
        }
    }
}

/// Build the complete render context for one contract.
///
/// Pure fan-in over the clause engine; the only failure modes are the two
/// hard domain errors, which propagate and abort the render.
pub fn build_render_context(
    facts: &Facts,
    decisions: &Decisions,
) -> Result<RenderContext, ClauseError> {
    let mut ctx = RenderContext::default();

    let parties = resolve_parties(facts);
    ctx.set_text(keys::LANDLORD_BLOCK, parties.landlord.header_block());
    ctx.set_text(keys::TENANT_BLOCK, parties.tenant.header_block());
    ctx.set_text(
        keys::SIGNATURE_LANDLORD_BLOCK,
        parties.landlord.signature_block("Vermieter"),
    );
    ctx.set_text(
        keys::SIGNATURE_TENANT_BLOCK,
        parties.tenant.signature_block("Mieter"),
    );

    // The rent account is always the landlord's.
    ctx.set_text(keys::IBAN, format_iban(&parties.landlord.party.iban));

    ctx.set_text(keys::PRAEAMBEL_BLOCK, subject::preamble(facts));
    ctx.set_text(
        keys::MIETGEGENSTAND_BLOCK,
        subject::subject_matter(facts, decisions),
    );
    ctx.set_text(
        keys::ZUSTAND_SCHLUESSEL_BLOCK,
        condition::condition_and_keys(facts, decisions),
    );
    ctx.set_text(keys::MIETZEIT_BLOCK, term::tenancy_term(facts, decisions));

    let duration = term::resolve_duration(decisions)?;
    ctx.set_text(keys::CONTRACT_TYPE, duration.contract_type);
    ctx.set_text(keys::TENANCY_END_DATE, duration.end_date);
    ctx.set_text(keys::TERMINATION_NOTICE_MIETER, duration.notice_tenant);
    ctx.set_text(keys::TERMINATION_NOTICE_VERMIETER, duration.notice_landlord);
    ctx.set_text(keys::BEFRISTUNG_REASON, duration.fixed_term_reason);

    ctx.set_table(keys::MIETE_BK_TABELLE, costs::cost_table(facts));
    ctx.set_text(keys::CLAUSE_NEBENKOSTEN, costs::operating_costs(decisions));
    ctx.set_text(keys::ZUSATZ_BK, costs::extra_cost_items(decisions));

    ctx.set_text(keys::RENT_AMOUNT, fmt_eur_str(&decisions.monthly_rent));
    ctx.set_text(keys::RENT_START_DATE, fmt_date_de(&decisions.move_in));
    ctx.set_text(
        keys::CITY_AND_DATE,
        format!("{}, {}", facts.property.city, fmt_date_de(&decisions.move_in)),
    );

    ctx.set_text(
        keys::CLAUSE_MIETSICHERHEIT,
        deposit::security_deposit(facts, decisions),
    );
    ctx.set_text(keys::CLAUSE_UNTERVERMIETUNG, subletting::subletting(decisions));
    ctx.set_text(keys::CLAUSE_TIERHALTUNG, pets::pets(facts, decisions));
    ctx.set_text(
        keys::CLAUSE_HAFTUNGSBESCHRAENKUNG,
        fixed::liability_limitation(),
    );
    ctx.set_text(keys::CLAUSE_VERAENDERUNGEN, fixed::alterations());
    ctx.set_text(
        keys::CLAUSE_SCHOENHEITSREPARATUREN,
        redecoration::redecoration(facts, decisions),
    );
    ctx.set_text(keys::CLAUSE_KLEINREPARATUREN, repairs::minor_repairs(decisions));
    ctx.set_text(
        keys::CLAUSE_MIETANPASSUNG,
        rent_adjustment::rent_adjustment(decisions)?,
    );
    ctx.set_text(
        keys::CLAUSE_MIETPREISBREMSE,
        rent_control::rent_control(facts, decisions),
    );
    ctx.set_text(
        keys::CLAUSE_KUENDIGUNGSAUSSCHLUSS,
        term::termination_exclusion(decisions),
    );
    ctx.set_text(
        keys::CLAUSE_ENDRUECKGABE,
        return_of_property::return_of_property(decisions),
    );

    let annex_list = AnnexList::from_decisions(decisions);
    ctx.set_text(keys::ANNEX_BLOCK, annexes::annex_block(&annex_list));
    ctx.set_text(
        keys::CLAUSE_DATENVERARBEITUNG,
        annexes::data_processing(&annex_list),
    );
    ctx.set_text(
        keys::CLAUSE_ENERGIEAUSWEIS,
        annexes::energy_certificate(&annex_list),
    );

    debug!(keys = ctx.len(), "render context assembled");
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use serde_json::json;

    fn sample_facts() -> Facts {
        normalize::facts(&json!({
            "rolle": "Vermieter",
            "eigene_name": "Max Muster",
            "eigene_anschrift": "Musterweg 2, 80331 München",
            "eigene_iban": "DE89370400440532013000",
            "wird_vertreten": "ja",
            "vertreten_durch": "Hausverwaltung GmbH",
            "ust_id": "DE123456789",
            "gegenpartei_name": "Erika Beispiel",
            "gegenpartei_anschrift": "Beispielallee 7, 10115 Berlin",
            "zahler_iban": "DE02120300000000202051",
            "objektadresse": "Hauptstraße 1, 10115 Berlin",
            "wohnung_bez": "2-Zimmer-Wohnung im 3. OG",
            "grundmiete": "1200",
            "mietbeginn": "2025-04-01",
            "kaution": "3",
        }))
    }

    #[test]
    fn submitter_as_landlord() {
        let facts = sample_facts();
        let decisions = normalize::decisions(&json!({"ro_mietbeginn": "2025-04-01"}));
        let ctx = build_render_context(&facts, &decisions).unwrap();

        let landlord = ctx.text(keys::LANDLORD_BLOCK);
        assert!(landlord.starts_with("Max Muster"));
        assert!(landlord.contains("vertreten durch Hausverwaltung GmbH"));
        assert!(landlord.contains("USt-ID: DE123456789"));

        let tenant = ctx.text(keys::TENANT_BLOCK);
        assert!(tenant.starts_with("Erika Beispiel"));
        assert!(!tenant.contains("vertreten durch"));

        assert_eq!(ctx.text(keys::IBAN), "DE89 3704 0044 0532 0130 00");
        assert!(ctx.text(keys::SIGNATURE_LANDLORD_BLOCK).ends_with("Vermieter"));
        assert!(ctx.text(keys::SIGNATURE_TENANT_BLOCK).ends_with("Mieter"));
    }

    #[test]
    fn role_mieter_swaps_parties_and_iban() {
        let mut raw = json!({
            "rolle": "Mieter",
            "eigene_name": "Erika Beispiel",
            "eigene_iban": "DE02120300000000202051",
            "gegenpartei_name": "Max Muster",
            "zahler_iban": "DE89370400440532013000",
        });
        raw["objektadresse"] = json!("Hauptstraße 1, 10115 Berlin");
        let facts = normalize::facts(&raw);
        let decisions = normalize::decisions(&json!({}));
        let ctx = build_render_context(&facts, &decisions).unwrap();

        assert!(ctx.text(keys::LANDLORD_BLOCK).starts_with("Max Muster"));
        assert!(ctx.text(keys::TENANT_BLOCK).starts_with("Erika Beispiel"));
        // IBAN follows the landlord, who is the counterparty here.
        assert_eq!(ctx.text(keys::IBAN), "DE89 3704 0044 0532 0130 00");
    }

    #[test]
    fn unknown_role_falls_back_to_landlord() {
        let facts = normalize::facts(&json!({
            "rolle": "makler",
            "eigene_name": "Max Muster",
        }));
        let decisions = normalize::decisions(&json!({}));
        let ctx = build_render_context(&facts, &decisions).unwrap();
        assert!(ctx.text(keys::LANDLORD_BLOCK).starts_with("Max Muster"));
    }

    #[test]
    fn every_block_key_is_present() {
        let facts = sample_facts();
        let decisions = normalize::decisions(&json!({}));
        let ctx = build_render_context(&facts, &decisions).unwrap();
        for key in keys::BLOCK_KEYS {
            // Present means resolvable; emptiness is a legitimate value.
            let _ = ctx.text(key);
        }
        assert!(!ctx.table(keys::MIETE_BK_TABELLE).is_empty());
        assert!(ctx.len() > keys::BLOCK_KEYS.len());
    }

    #[test]
    fn city_and_date_line() {
        let facts = sample_facts();
        let decisions = normalize::decisions(&json!({"ro_mietbeginn": "2025-04-01"}));
        let ctx = build_render_context(&facts, &decisions).unwrap();
        assert_eq!(ctx.text(keys::CITY_AND_DATE), "10115 Berlin, 01.04.2025");
        assert_eq!(ctx.text(keys::RENT_START_DATE), "01.04.2025");
    }

    #[test]
    fn hard_errors_propagate() {
        let facts = sample_facts();
        let conflict = normalize::decisions(&json!({"indexmiete": "Ja", "staffelmiete": "Ja"}));
        assert!(matches!(
            build_render_context(&facts, &conflict),
            Err(ClauseError::ConflictingRentAdjustment)
        ));

        let unknown = normalize::decisions(&json!({"vertragsart_final": "quarterly"}));
        assert!(matches!(
            build_render_context(&facts, &unknown),
            Err(ClauseError::UnknownDuration(_))
        ));
    }
}
