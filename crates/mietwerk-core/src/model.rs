//! Canonical Facts and Decisions records.
//!
//! Both records are produced once per render by the normalizer and are
//! read-only afterwards. Scalar fields keep the submitted string form;
//! clause functions parse defensively and omit their clause when a value
//! does not parse.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One side of the contract as submitted in Mask A.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartyFacts {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
}

/// Property descriptor from Mask A.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFacts {
    pub address: String,
    pub unit_label: String,
    pub side_rooms: Vec<String>,
    pub fixtures: String,
    pub living_area: String,
    pub unit_type: String,
    /// "ja" when the unit belongs to a condominium association (WEG).
    pub condo: String,
    /// Co-ownership share (Miteigentumsanteile).
    pub condo_share: String,
    /// Derived: substring after the last comma of `address`.
    pub city: String,
}

/// Canonical factual/party record (Mask A, submitted by the client).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facts {
    /// "vermieter" or "mieter"; decides which party is the landlord.
    pub role: String,
    pub own: PartyFacts,
    pub counterparty: PartyFacts,
    /// Representation applies only to the submitter's own party.
    pub represented: bool,
    pub representative: String,
    pub vat_id: String,
    pub tax_number: String,
    pub property: PropertyFacts,
    /// Tenancy start date (ISO).
    pub move_in: String,
    /// Date the unit became ready for occupancy (Bezugsfertigkeit).
    pub ready_for_occupancy: String,
    /// Condition at handover (free text, loosely normalized).
    pub condition: String,
    pub key_count: String,
    pub key_types: Vec<String>,
    pub base_rent: String,
    pub furnishing_surcharge: String,
    pub commercial_surcharge: String,
    pub subletting_surcharge: String,
    pub heating_advance: String,
    pub operating_advance: String,
    pub parking_rent: String,
    pub pets: String,
    pub pet_details: String,
    /// Deposit in monthly rents; Mask B supplies a fallback.
    pub deposit_months: String,
    /// Unmodified submission, retained for diagnostics.
    #[serde(default)]
    pub raw: Value,
}

/// Contract duration mode.
///
/// An unrecognized raw value is carried verbatim in `Other` and raises a
/// hard error when it reaches the duration resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractDuration {
    #[default]
    OpenEnded,
    FixedTerm,
    Other(String),
}

/// One step of a staged rent schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagedStep {
    /// ISO date the step takes effect.
    pub from: String,
    /// Increase amount in EUR, string form as submitted.
    pub amount: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperatingCostModel {
    #[default]
    None,
    Flat,
    AdvancePayment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SublettingModel {
    #[default]
    None,
    ConsentOnly,
    ConsentWithAssignment,
    Custom,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetTone {
    #[default]
    Unspecified,
    Standard,
    Stricter,
    Custom,
}

/// Redecoration-obligation model for units handed over in used condition.
///
/// The fallback for an unrecognized submission is the most conservative
/// variant, the flat obligation without deadlines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedecorationModel {
    None,
    AsUsed,
    #[default]
    FlatWithoutDeadline,
    CostSubsidy,
    RentFreePeriod,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnRule {
    #[default]
    Unspecified,
    CleanAndContractual,
    AdditionalTasks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationExclusionModel {
    #[default]
    None,
    Mutual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentControlStatus {
    #[default]
    NotApplicable,
    Compliant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnexModel {
    #[default]
    None,
    List,
}

/// Rent-control (Mietpreisbremse) compliance status and justifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RentControl {
    pub status: RentControlStatus,
    /// "neubau" short-circuits the whole check (§ 556f BGB).
    pub new_build: bool,
    /// "vor_juni_2015" or "nach_juni_2015".
    pub prior_tenancy: String,
    /// Agreed rent stays under the § 556d cap.
    pub under_cap: bool,
    pub prior_rent: bool,
    pub prior_rent_text: String,
    pub modernized: bool,
    pub modernized_text: String,
    pub first_letting: bool,
    pub first_letting_text: String,
}

/// Operating-cost billing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperatingCosts {
    pub model: OperatingCostModel,
    pub monthly_amount: String,
    /// Settlement cycle; only "ANNUAL" is rendered.
    pub settlement: String,
    pub catalog: Vec<String>,
    /// Additional agreed line items (§ 7 (3)).
    pub extra_items: Vec<String>,
}

/// Canonical legal-configuration record (Mask B, supplied by the attorney).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Decisions {
    pub duration: ContractDuration,
    /// Fixed-term end date (ISO); required when duration is fixed-term.
    pub end_date: String,
    pub fixed_term_reason: String,
    pub notice_months_tenant: String,
    pub notice_months_landlord: String,
    pub move_in: String,
    pub monthly_rent: String,
    pub deposit_months: String,
    pub index_linked: bool,
    pub staged: bool,
    pub staged_schedule: Vec<StagedStep>,
    pub condo_text: String,
    pub rent_control: RentControl,
    pub operating_costs: OperatingCosts,
    pub subletting: SublettingModel,
    pub subletting_text: String,
    pub repair_cap_per_incident: String,
    /// Literal EUR amount or "N%" of annual rent.
    pub repair_cap_annual: String,
    pub pet_tone: PetTone,
    pub termination_waiver_years: String,
    pub termination_exclusion: TerminationExclusionModel,
    pub termination_exclusion_months: String,
    /// "aufnehmen", "nicht aufnehmen", or empty.
    pub surroundings: String,
    pub redecoration: RedecorationModel,
    pub subsidy_amount: String,
    pub rent_free_months: String,
    pub return_rule: ReturnRule,
    pub return_tasks: Vec<String>,
    pub annex_model: AnnexModel,
    pub annexes: Vec<String>,
    /// Auto-insert the data-protection annex at position 1.
    pub annex_data_protection: bool,
    /// Unmodified submission, retained for diagnostics.
    #[serde(default)]
    pub raw: Value,
}
