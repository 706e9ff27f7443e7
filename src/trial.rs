//! Trial records handed to the indicators.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::feasibility;
use crate::objective::{Constraint, Objective};
use crate::types::Feasibility;

/// A trial as submitted for scoring.
///
/// `feasible` may be left [`Unknown`](Feasibility::Unknown), in which case it
/// is derived from `objective` and `constraint` by [`classify`](Self::classify).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// The objective value(s), or `None` if evaluation produced none.
    pub objective: Option<Objective>,
    /// The supplied feasibility.
    pub feasible: Feasibility,
    /// The constraint value(s).
    #[serde(default)]
    pub constraint: Constraint,
}

impl Trial {
    /// Creates a trial with the given objective, unknown feasibility and no
    /// constraint.
    #[must_use]
    pub fn new(objective: impl Into<Objective>) -> Self {
        Self {
            objective: Some(objective.into()),
            feasible: Feasibility::Unknown,
            constraint: Constraint::None,
        }
    }

    /// Creates a trial without an objective.
    #[must_use]
    pub fn without_objective() -> Self {
        Self::default()
    }

    /// Sets the supplied feasibility.
    #[must_use]
    pub fn feasible(mut self, feasible: impl Into<Feasibility>) -> Self {
        self.feasible = feasible.into();
        self
    }

    /// Sets the constraint value(s).
    #[must_use]
    pub fn constraint(mut self, constraint: impl Into<Constraint>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Resolves feasibility and returns the classified trial.
    ///
    /// # Errors
    ///
    /// Returns [`FeasibleWithoutObjective`](crate::Error::FeasibleWithoutObjective)
    /// if the trial resolves to feasible but has no objective.
    pub fn classify(&self) -> Result<ClassifiedTrial> {
        let feasible =
            feasibility::resolve(self.feasible, self.objective.as_ref(), &self.constraint)?;
        Ok(ClassifiedTrial {
            objective: self.objective.clone(),
            feasible,
        })
    }
}

/// A trial whose feasibility has been resolved.
///
/// Invariant: if `feasible` is `true`, `objective` is `Some`.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedTrial {
    objective: Option<Objective>,
    feasible: bool,
}

impl ClassifiedTrial {
    /// Returns the objective, if any.
    #[must_use]
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Returns `true` if the trial is feasible.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Returns the objective if the trial is feasible.
    #[must_use]
    pub fn feasible_objective(&self) -> Option<&Objective> {
        if self.feasible {
            self.objective.as_ref()
        } else {
            None
        }
    }
}

/// An already scored trial in the best indicator's history.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredTrial {
    /// The score returned for this trial.
    pub score: f64,
}

impl From<f64> for ScoredTrial {
    fn from(score: f64) -> Self {
        Self { score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_classify_derived() {
        let t = Trial::new(vec![1.0, 2.0]).constraint(vec![0.0, 0.0]);
        let c = t.classify().unwrap();
        assert!(c.is_feasible());
        assert_eq!(c.feasible_objective(), Some(&Objective::Vector(vec![1.0, 2.0])));

        let t = Trial::new(vec![1.0, 2.0]).constraint(vec![1.0, 0.0]);
        let c = t.classify().unwrap();
        assert!(!c.is_feasible());
        assert!(c.feasible_objective().is_none());
        assert!(c.objective().is_some());
    }

    #[test]
    fn test_classify_explicit_feasible_without_objective() {
        let t = Trial::without_objective().feasible(true);
        assert!(matches!(t.classify(), Err(Error::FeasibleWithoutObjective)));
    }

    #[test]
    fn test_decode_trial_constraint_optional() {
        let t: Trial = serde_json::from_str(r#"{"objective": [1, 2], "feasible": false}"#).unwrap();
        assert_eq!(t.feasible, Feasibility::Infeasible);
        assert_eq!(t.constraint, Constraint::None);

        let t: Trial =
            serde_json::from_str(r#"{"objective": null, "feasible": null, "constraint": 1}"#)
                .unwrap();
        assert_eq!(t.objective, None);
        assert_eq!(t.feasible, Feasibility::Unknown);
        assert_eq!(t.constraint, Constraint::Scalar(1.0));
    }
}
