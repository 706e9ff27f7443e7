//! Core types shared by both indicators.

use serde::{Deserialize, Serialize};

/// Feasibility as supplied with a trial record.
///
/// `null` in JSON maps to [`Unknown`](Feasibility::Unknown), which means the
/// feasibility is derived from the objective and constraint when the trial
/// is classified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Feasibility {
    /// The trial is feasible.
    Feasible,
    /// The trial is infeasible.
    Infeasible,
    /// Derive from the objective and constraint.
    #[default]
    Unknown,
}

impl From<Option<bool>> for Feasibility {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Feasible,
            Some(false) => Self::Infeasible,
            None => Self::Unknown,
        }
    }
}

impl From<bool> for Feasibility {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl From<Feasibility> for Option<bool> {
    fn from(value: Feasibility) -> Self {
        match value {
            Feasibility::Feasible => Some(true),
            Feasibility::Infeasible => Some(false),
            Feasibility::Unknown => None,
        }
    }
}

/// Which indicator a request is scored with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndicatorKind {
    /// Best-so-far over a single objective.
    Best,
    /// Hypervolume of the Pareto front over several objectives.
    Hypervolume,
}

impl core::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Best => write!(f, "best"),
            Self::Hypervolume => write!(f, "hypervolume"),
        }
    }
}
