//! Objective and constraint values carried by a trial.
//!
//! An objective is either a single number (single-objective problems, scored
//! by the best indicator) or a vector of numbers (multi-objective problems,
//! scored by the hypervolume indicator). All objectives are minimized.
//!
//! A constraint is absent, a single number, or a vector of numbers. A trial
//! satisfies its constraint when every component is `<= 0.0`.
//!
//! ```
//! use trial_indicators::{Constraint, Objective};
//!
//! let objective = Objective::Vector(vec![1.0, 2.0]);
//! assert_eq!(objective.dimension(), 2);
//!
//! let constraint = Constraint::Scalar(-0.5);
//! assert_eq!(constraint.components(), &[-0.5]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The objective value(s) of a trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Objective {
    /// A single objective value.
    Scalar(f64),
    /// One value per objective.
    Vector(Vec<f64>),
}

impl Objective {
    /// Returns the number of objective components (1 for a scalar).
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Vector(v) => v.len(),
        }
    }

    /// Returns the components as a slice (a scalar is a one-element slice).
    #[must_use]
    pub fn components(&self) -> &[f64] {
        match self {
            Self::Scalar(v) => core::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }

    /// Returns the scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectiveShape`] if the objective is a vector.
    pub fn as_scalar(&self) -> Result<f64> {
        match self {
            Self::Scalar(v) => Ok(*v),
            Self::Vector(_) => Err(Error::ObjectiveShape { expected: "scalar" }),
        }
    }

    /// Returns the vector components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectiveShape`] if the objective is a scalar.
    pub fn as_vector(&self) -> Result<&[f64]> {
        match self {
            Self::Scalar(_) => Err(Error::ObjectiveShape { expected: "vector" }),
            Self::Vector(v) => Ok(v),
        }
    }

    /// Checks that no component is NaN. Infinities are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NanObjective`] if any component is NaN.
    pub fn check_not_nan(&self) -> Result<()> {
        if self.components().iter().any(|v| v.is_nan()) {
            return Err(Error::NanObjective);
        }
        Ok(())
    }
}

impl From<f64> for Objective {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Objective {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values)
    }
}

/// The constraint value(s) of a trial.
///
/// `null` in JSON decodes to [`Constraint::None`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constraint {
    /// No constraint: the trial is feasible whenever it has an objective.
    #[default]
    None,
    /// A single constraint value.
    Scalar(f64),
    /// One value per constraint.
    Vector(Vec<f64>),
}

impl Constraint {
    /// Returns the constraint coerced to a vector (empty for [`Constraint::None`]).
    #[must_use]
    pub fn components(&self) -> &[f64] {
        match self {
            Self::None => &[],
            Self::Scalar(v) => core::slice::from_ref(v),
            Self::Vector(v) => v,
        }
    }

    /// Returns `true` if every component is `<= 0.0`.
    ///
    /// Comparison is exact: `0.0` is satisfied, NaN is not.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.components().iter().all(|&c| c <= 0.0)
    }
}

impl From<f64> for Constraint {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Constraint {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_objective_components() {
        assert_eq!(Objective::Scalar(0.5).components(), &[0.5]);
        assert_eq!(Objective::Vector(vec![1.0, 2.0]).components(), &[1.0, 2.0]);
        assert_eq!(Objective::Scalar(0.5).dimension(), 1);
    }

    #[test]
    fn test_objective_shape() {
        assert!(Objective::Scalar(1.0).as_vector().is_err());
        assert!(Objective::Vector(vec![1.0]).as_scalar().is_err());
        assert!((Objective::Scalar(1.5).as_scalar().unwrap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_objective_nan() {
        assert!(Objective::Vector(vec![1.0, f64::NAN]).check_not_nan().is_err());
        assert!(
            Objective::Vector(vec![f64::INFINITY, f64::NEG_INFINITY])
                .check_not_nan()
                .is_ok()
        );
    }

    #[test]
    fn test_constraint_satisfied() {
        assert!(Constraint::None.is_satisfied());
        assert!(Constraint::Scalar(0.0).is_satisfied());
        assert!(Constraint::Scalar(-1.0).is_satisfied());
        assert!(!Constraint::Scalar(1e-12).is_satisfied());
        assert!(Constraint::Vector(vec![0.0, -2.0]).is_satisfied());
        assert!(!Constraint::Vector(vec![0.0, 1.0]).is_satisfied());
        assert!(!Constraint::Scalar(f64::NAN).is_satisfied());
    }

    #[test]
    fn test_constraint_from() {
        assert_eq!(Constraint::from(0.5), Constraint::Scalar(0.5));
        assert_eq!(Constraint::from(vec![0.0, 1.0]), Constraint::Vector(vec![0.0, 1.0]));
        assert_eq!(Constraint::default(), Constraint::None);
    }

    #[test]
    fn test_decode_untagged() {
        let o: Objective = serde_json::from_str("[1, 2.5]").unwrap();
        assert_eq!(o, Objective::Vector(vec![1.0, 2.5]));
        let o: Objective = serde_json::from_str("3").unwrap();
        assert_eq!(o, Objective::Scalar(3.0));

        let c: Constraint = serde_json::from_str("null").unwrap();
        assert_eq!(c, Constraint::None);
        let c: Constraint = serde_json::from_str("[0, -1]").unwrap();
        assert_eq!(c, Constraint::Vector(vec![0.0, -1.0]));
        assert!(serde_json::from_str::<Constraint>("\"A\"").is_err());
    }
}
