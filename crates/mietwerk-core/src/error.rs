use thiserror::Error;

/// Hard domain errors that abort a render.
///
/// These signal that upstream validation was bypassed — a data-contract
/// violation, not a legal edge case. Clause ambiguity never reaches this
/// type; it resolves to an empty clause instead.
#[derive(Debug, Error)]
pub enum ClauseError {
    #[error("unrecognized contract duration mode: {0:?}")]
    UnknownDuration(String),

    #[error("index-linked and staged rent adjustment must not both be active")]
    ConflictingRentAdjustment,
}
