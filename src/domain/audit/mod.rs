//! Audit Module - The project being scored and its fixed criterion catalogs.
//!
//! # Components
//!
//! - `ValueCriterion` / `RiskCriterion` - Closed catalogs (5 value, 6 risk)
//! - `ValueScores` / `RiskScores` - One `Score` per catalog entry
//! - `ProjectState` - Free-text header plus both score sets
//! - `AuditError` - Unknown criterion identifiers

mod criteria;
mod errors;
mod state;

pub use criteria::{Criterion, CriterionDescriptor, CriterionKind, RiskCriterion, ValueCriterion};
pub use errors::AuditError;
pub use state::{ProjectState, RiskScores, ValueScores};
