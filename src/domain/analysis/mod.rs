//! Analysis Module - Pure derivation of the audit report.
//!
//! This module contains stateless functions that turn a `ProjectState` into
//! totals, a priority classification, advice and chart series.
//!
//! # Components
//!
//! - `PriorityLevel` - Four-way partition of (value-high, risk-high)
//! - `AdviceTable` - Narrative text keyed 1:1 by priority
//! - `AnalysisReport` - Everything the dashboard renders
//! - `AnalysisEngine` - `ProjectState` in, `AnalysisReport` out
//!
//! # Design Philosophy
//!
//! Nothing here holds state or caches. Reports are recomputed on every read;
//! the cost is eleven additions.

mod advice;
mod engine;
mod priority;
mod report;

pub use advice::AdviceTable;
pub use engine::AnalysisEngine;
pub use priority::{
    PriorityLevel, PriorityTone, MAX_TOTAL_RISK, MAX_TOTAL_VALUE, RISK_THRESHOLD,
    VALUE_THRESHOLD,
};
pub use report::{AnalysisReport, ChartPoint, SeverityColor};
