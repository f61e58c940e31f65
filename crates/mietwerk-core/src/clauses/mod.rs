//! Clause decision trees.
//!
//! Each function is a pure decision tree over the canonical records and
//! produces the final clause text — or the empty string when the clause
//! must be omitted. Missing, malformed, or mutually inconsistent
//! sub-fields always resolve to omission, never to partially-filled legal
//! text; only data-contract violations (unknown duration mode, conflicting
//! rent-adjustment flags) raise a hard error.
//!
//! All non-empty output is lawyer-approved German text reproduced
//! verbatim; nothing here synthesizes legal language.

pub mod annexes;
pub mod condition;
pub mod costs;
pub mod deposit;
pub mod fixed;
pub mod pets;
pub mod redecoration;
pub mod rent_adjustment;
pub mod rent_control;
pub mod repairs;
pub mod return_of_property;
pub mod subject;
pub mod subletting;
pub mod term;
