//! Fixed criterion catalogs.
//!
//! Both catalogs are closed enums in declaration order. That order drives the
//! chart series, and the camelCase serde names are the stable identifiers
//! callers use on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AuditError;

/// Which catalog a criterion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    Value,
    Risk,
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriterionKind::Value => write!(f, "value"),
            CriterionKind::Risk => write!(f, "risk"),
        }
    }
}

/// Shared catalog behaviour for value and risk criteria.
pub trait Criterion: Copy + Eq + 'static {
    const KIND: CriterionKind;

    /// Every criterion of this catalog, in declaration order.
    fn all() -> &'static [Self];

    /// Stable identifier (camelCase).
    fn id(&self) -> &'static str;

    /// Full display label for the input form.
    fn label(&self) -> &'static str;

    /// Short label used on chart axes.
    fn chart_label(&self) -> &'static str;

    /// Help text shown under the selector.
    fn description(&self) -> &'static str;

    /// Looks up a criterion by its stable identifier.
    fn parse_id(id: &str) -> Result<Self, AuditError> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.id() == id)
            .ok_or_else(|| AuditError::invalid_criterion(Self::KIND, id))
    }

    fn describe(&self) -> CriterionDescriptor {
        CriterionDescriptor {
            id: self.id(),
            label: self.label(),
            chart_label: self.chart_label(),
            description: self.description(),
        }
    }
}

/// Static catalog entry, as served to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub chart_label: &'static str,
    pub description: &'static str,
}

/// The five value criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueCriterion {
    Profit,
    Portfolio,
    ClientRel,
    Training,
    Fun,
}

impl Criterion for ValueCriterion {
    const KIND: CriterionKind = CriterionKind::Value;

    fn all() -> &'static [Self] {
        &[
            ValueCriterion::Profit,
            ValueCriterion::Portfolio,
            ValueCriterion::ClientRel,
            ValueCriterion::Training,
            ValueCriterion::Fun,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            ValueCriterion::Profit => "profit",
            ValueCriterion::Portfolio => "portfolio",
            ValueCriterion::ClientRel => "clientRel",
            ValueCriterion::Training => "training",
            ValueCriterion::Fun => "fun",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ValueCriterion::Profit => "Profit",
            ValueCriterion::Portfolio => "Portfolio Credit",
            ValueCriterion::ClientRel => "Client Relationship",
            ValueCriterion::Training => "Training",
            ValueCriterion::Fun => "Fun (Creative Space)",
        }
    }

    fn chart_label(&self) -> &'static str {
        match self {
            ValueCriterion::Profit => "Profit",
            ValueCriterion::Portfolio => "Portfolio",
            ValueCriterion::ClientRel => "Relationship",
            ValueCriterion::Training => "Training",
            ValueCriterion::Fun => "Fun",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ValueCriterion::Profit => "Gross margin and budget scale of the project",
            ValueCriterion::Portfolio => "Showreel weight and award potential",
            ValueCriterion::ClientRel => "Long-term strategic value and brand trust",
            ValueCriterion::Training => "New techniques applied or team growth",
            ValueCriterion::Fun => "Room for creative work and how enjoyable it is",
        }
    }
}

impl FromStr for ValueCriterion {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_id(s)
    }
}

impl fmt::Display for ValueCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The six risk criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskCriterion {
    ClientReliability,
    Participation,
    TimePressure,
    Demands,
    CapabilityGap,
    InternalVariables,
}

impl Criterion for RiskCriterion {
    const KIND: CriterionKind = CriterionKind::Risk;

    fn all() -> &'static [Self] {
        &[
            RiskCriterion::ClientReliability,
            RiskCriterion::Participation,
            RiskCriterion::TimePressure,
            RiskCriterion::Demands,
            RiskCriterion::CapabilityGap,
            RiskCriterion::InternalVariables,
        ]
    }

    fn id(&self) -> &'static str {
        match self {
            RiskCriterion::ClientReliability => "clientReliability",
            RiskCriterion::Participation => "participation",
            RiskCriterion::TimePressure => "timePressure",
            RiskCriterion::Demands => "demands",
            RiskCriterion::CapabilityGap => "capabilityGap",
            RiskCriterion::InternalVariables => "internalVariables",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RiskCriterion::ClientReliability => "Client Contact Reliability",
            RiskCriterion::Participation => "Internal Involvement",
            RiskCriterion::TimePressure => "Time Pressure",
            RiskCriterion::Demands => "Client Demands",
            RiskCriterion::CapabilityGap => "Capability Gap",
            RiskCriterion::InternalVariables => "Internal Variables",
        }
    }

    fn chart_label(&self) -> &'static str {
        match self {
            RiskCriterion::ClientReliability => "Contact",
            RiskCriterion::Participation => "Involvement",
            RiskCriterion::TimePressure => "Pressure",
            RiskCriterion::Demands => "Demands",
            RiskCriterion::CapabilityGap => "Capability",
            RiskCriterion::InternalVariables => "Variables",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            RiskCriterion::ClientReliability => {
                "Contact experience, turnover and communication efficiency"
            }
            RiskCriterion::Participation => "Depth of internal team involvement and resource use",
            RiskCriterion::TimePressure => "How reasonable and how urgent the schedule is",
            RiskCriterion::Demands => "Expected revision rounds and how exacting the client is",
            RiskCriterion::CapabilityGap => "Technical bar versus team maturity",
            RiskCriterion::InternalVariables => {
                "Staffing gaps, outsourcing dependence or collaboration risk"
            }
        }
    }
}

impl FromStr for RiskCriterion {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_id(s)
    }
}

impl fmt::Display for RiskCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
