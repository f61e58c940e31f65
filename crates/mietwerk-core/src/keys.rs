//! Placeholder key vocabulary.
//!
//! The template contract is closed: `[KEY]` markers in the lawyer-approved
//! template use exactly these names. Inline keys may appear anywhere in
//! running text; block keys must occupy an entire paragraph and resolve to
//! full paragraph replacement or structural deletion.

// Header and signature blocks.
pub const LANDLORD_BLOCK: &str = "LANDLORD_BLOCK";
pub const TENANT_BLOCK: &str = "TENANT_BLOCK";
pub const SIGNATURE_LANDLORD_BLOCK: &str = "SIGNATURE_LANDLORD_BLOCK";
pub const SIGNATURE_TENANT_BLOCK: &str = "SIGNATURE_TENANT_BLOCK";

// Scalar inline fields.
pub const RENT_AMOUNT: &str = "RENT_AMOUNT";
pub const RENT_START_DATE: &str = "RENT_START_DATE";
pub const CONTRACT_TYPE: &str = "CONTRACT_TYPE";
pub const TENANCY_END_DATE: &str = "TENANCY_END_DATE";
pub const TERMINATION_NOTICE_MIETER: &str = "TERMINATION_NOTICE_MIETER";
pub const TERMINATION_NOTICE_VERMIETER: &str = "TERMINATION_NOTICE_VERMIETER";
pub const BEFRISTUNG_REASON: &str = "BEFRISTUNG_REASON";
pub const IBAN: &str = "IBAN";
pub const CITY_AND_DATE: &str = "CITY_AND_DATE";

// Clause blocks (one paragraph each; empty value deletes the paragraph).
pub const PRAEAMBEL_BLOCK: &str = "PRAEAMBEL_BLOCK";
pub const MIETGEGENSTAND_BLOCK: &str = "MIETGEGENSTAND_BLOCK";
pub const ZUSTAND_SCHLUESSEL_BLOCK: &str = "ZUSTAND_SCHLUESSEL_BLOCK";
pub const MIETZEIT_BLOCK: &str = "MIETZEIT_BLOCK";
pub const CLAUSE_NEBENKOSTEN: &str = "CLAUSE_NEBENKOSTEN";
pub const ZUSATZ_BK: &str = "ZUSATZ_BK";
pub const CLAUSE_MIETSICHERHEIT: &str = "CLAUSE_MIETSICHERHEIT";
pub const CLAUSE_UNTERVERMIETUNG: &str = "CLAUSE_UNTERVERMIETUNG";
pub const CLAUSE_TIERHALTUNG: &str = "CLAUSE_TIERHALTUNG";
pub const CLAUSE_HAFTUNGSBESCHRAENKUNG: &str = "CLAUSE_HAFTUNGSBESCHRAENKUNG";
pub const CLAUSE_VERAENDERUNGEN: &str = "CLAUSE_VERAENDERUNGEN";
pub const CLAUSE_SCHOENHEITSREPARATUREN: &str = "CLAUSE_SCHOENHEITSREPARATUREN";
pub const CLAUSE_KLEINREPARATUREN: &str = "CLAUSE_KLEINREPARATUREN";
pub const CLAUSE_MIETANPASSUNG: &str = "CLAUSE_MIETANPASSUNG";
pub const CLAUSE_MIETPREISBREMSE: &str = "CLAUSE_MIETPREISBREMSE";
pub const CLAUSE_KUENDIGUNGSAUSSCHLUSS: &str = "CLAUSE_KUENDIGUNGSAUSSCHLUSS";
pub const CLAUSE_ENDRUECKGABE: &str = "CLAUSE_ENDRUECKGABE";
pub const CLAUSE_DATENVERARBEITUNG: &str = "CLAUSE_DATENVERARBEITUNG";
pub const CLAUSE_ENERGIEAUSWEIS: &str = "CLAUSE_ENERGIEAUSWEIS";
pub const ANNEX_BLOCK: &str = "ANNEX_BLOCK";

/// The one placeholder that resolves to a real table instead of text.
pub const MIETE_BK_TABELLE: &str = "MIETE_BK_TABELLE";

/// Closed set of block placeholder keys, in template order.
///
/// The table marker is handled separately inside the block pass and is
/// deliberately not part of this list.
pub const BLOCK_KEYS: &[&str] = &[
    PRAEAMBEL_BLOCK,
    MIETGEGENSTAND_BLOCK,
    ZUSTAND_SCHLUESSEL_BLOCK,
    MIETZEIT_BLOCK,
    CLAUSE_NEBENKOSTEN,
    ZUSATZ_BK,
    CLAUSE_MIETSICHERHEIT,
    CLAUSE_UNTERVERMIETUNG,
    CLAUSE_TIERHALTUNG,
    CLAUSE_HAFTUNGSBESCHRAENKUNG,
    CLAUSE_VERAENDERUNGEN,
    CLAUSE_SCHOENHEITSREPARATUREN,
    CLAUSE_KLEINREPARATUREN,
    CLAUSE_MIETANPASSUNG,
    CLAUSE_MIETPREISBREMSE,
    CLAUSE_KUENDIGUNGSAUSSCHLUSS,
    CLAUSE_ENDRUECKGABE,
    CLAUSE_DATENVERARBEITUNG,
    CLAUSE_ENERGIEAUSWEIS,
    ANNEX_BLOCK,
];

/// True for keys the inline pass must not touch: block markers own their
/// whole paragraph and are resolved (or deleted) by the block pass.
pub fn is_block_key(key: &str) -> bool {
    key == MIETE_BK_TABELLE || BLOCK_KEYS.contains(&key)
}
