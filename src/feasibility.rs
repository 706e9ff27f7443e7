//! Feasibility classification of trials.

use crate::error::{Error, Result};
use crate::objective::{Constraint, Objective};
use crate::types::Feasibility;

/// Returns `true` if a trial with this objective and constraint is feasible.
///
/// A trial without an objective is never feasible. Otherwise it is feasible
/// when the constraint is absent or every component is `<= 0.0`; the
/// comparison is exact, so a constraint of `0.0` is feasible.
#[must_use]
pub fn classify(objective: Option<&Objective>, constraint: &Constraint) -> bool {
    objective.is_some() && constraint.is_satisfied()
}

/// Resolves a supplied [`Feasibility`] to a definite answer.
///
/// [`Feasibility::Unknown`] is derived with [`classify`]; explicit values are
/// kept as supplied.
///
/// # Errors
///
/// Returns [`Error::FeasibleWithoutObjective`] if the resolved answer is
/// feasible but `objective` is `None`.
pub fn resolve(
    feasible: Feasibility,
    objective: Option<&Objective>,
    constraint: &Constraint,
) -> Result<bool> {
    let feasible = match feasible {
        Feasibility::Feasible => true,
        Feasibility::Infeasible => false,
        Feasibility::Unknown => classify(objective, constraint),
    };
    if feasible && objective.is_none() {
        return Err(Error::FeasibleWithoutObjective);
    }
    Ok(feasible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_null_objective() {
        assert!(!classify(None, &Constraint::None));
        assert!(!classify(None, &Constraint::Scalar(-1.0)));
    }

    #[test]
    fn test_classify_constraint() {
        let obj = Objective::Vector(vec![1.0, 2.0]);
        assert!(classify(Some(&obj), &Constraint::None));
        assert!(classify(Some(&obj), &Constraint::Vector(vec![0.0, 0.0])));
        assert!(!classify(Some(&obj), &Constraint::Vector(vec![1.0, 0.0])));
        assert!(!classify(Some(&obj), &Constraint::Scalar(0.1)));
    }

    #[test]
    fn test_resolve_keeps_explicit() {
        let obj = Objective::Scalar(1.0);
        // An explicit flag wins over the constraint.
        assert!(resolve(Feasibility::Feasible, Some(&obj), &Constraint::Scalar(5.0)).unwrap());
        assert!(!resolve(Feasibility::Infeasible, Some(&obj), &Constraint::None).unwrap());
    }

    #[test]
    fn test_resolve_unknown_matches_classify() {
        let obj = Objective::Scalar(1.0);
        for constraint in [
            Constraint::None,
            Constraint::Scalar(0.0),
            Constraint::Scalar(2.0),
            Constraint::Vector(vec![-1.0, 3.0]),
        ] {
            let derived = classify(Some(&obj), &constraint);
            assert_eq!(
                resolve(Feasibility::Unknown, Some(&obj), &constraint).unwrap(),
                derived
            );
            assert_eq!(
                resolve(derived.into(), Some(&obj), &constraint).unwrap(),
                derived
            );
        }
    }

    #[test]
    fn test_resolve_feasible_without_objective() {
        let err = resolve(Feasibility::Feasible, None, &Constraint::None).unwrap_err();
        assert!(matches!(err, Error::FeasibleWithoutObjective));
        assert!(!resolve(Feasibility::Unknown, None, &Constraint::None).unwrap());
    }
}
