//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (Score, Percentage, errors)
//! - `audit` - Criterion catalogs and the project state being scored
//! - `analysis` - Pure derivation of totals, priority, advice and chart series

pub mod analysis;
pub mod audit;
pub mod foundation;
