//! Best-so-far indicator for single-objective problems.
//!
//! The score of a trial is the smallest feasible objective value seen so far.
//! Because each score is derived from the previous one, the score sequence
//! never increases. Until a feasible trial appears, the score is the
//! configured worst value.
//!
//! ```
//! use trial_indicators::best::BestIndicator;
//! use trial_indicators::{ScoredTrial, Trial};
//!
//! let indicator = BestIndicator::new();
//! let history = [ScoredTrial::from(1.0), ScoredTrial::from(0.5)];
//!
//! let score = indicator.score(&Trial::new(0.3), &history).unwrap();
//! assert!((score - 0.3).abs() < f64::EPSILON);
//!
//! let score = indicator.score(&Trial::new(0.8), &history).unwrap();
//! assert!((score - 0.5).abs() < f64::EPSILON);
//! ```

use crate::error::{Error, Result};
use crate::trial::{ClassifiedTrial, ScoredTrial, Trial};

/// The largest number the platform's score store accepts: `1e126 - ulp(1e126)`.
///
/// Used as the default worst value: the `f64` immediately below `1e126`.
pub const DEFAULT_WORST_VALUE: f64 = f64::from_bits(1e126_f64.to_bits() - 1);

/// Compute the best-so-far score.
///
/// - Feasible `objective`: the smaller of the objective and the last score
///   in `history` (or the objective itself if `history` is empty).
/// - Infeasible (`objective` is `None`): the last score in `history`, or
///   `worst_value` if `history` is empty.
#[must_use]
pub fn best(objective: Option<f64>, history: &[ScoredTrial], worst_value: f64) -> f64 {
    let last = history.last().map(|t| t.score);
    match (objective, last) {
        (Some(value), Some(last)) => value.min(last),
        (Some(value), None) => value,
        (None, Some(last)) => last,
        (None, None) => worst_value,
    }
}

/// The best-so-far indicator with its configured worst value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestIndicator {
    worst_value: f64,
}

impl Default for BestIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl BestIndicator {
    /// Create an indicator with [`DEFAULT_WORST_VALUE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            worst_value: DEFAULT_WORST_VALUE,
        }
    }

    /// Set the score reported before any feasible trial exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteWorstValue`] if `worst_value` is NaN or
    /// infinite.
    pub fn with_worst_value(mut self, worst_value: f64) -> Result<Self> {
        if !worst_value.is_finite() {
            return Err(Error::NonFiniteWorstValue(worst_value));
        }
        self.worst_value = worst_value;
        Ok(self)
    }

    /// Returns the configured worst value.
    #[must_use]
    pub fn worst_value(&self) -> f64 {
        self.worst_value
    }

    /// Score `candidate` against the scored `history`.
    ///
    /// # Errors
    ///
    /// - [`Error::FeasibleWithoutObjective`] if the candidate is feasible
    ///   without an objective.
    /// - [`Error::ObjectiveShape`] if a feasible candidate's objective is a
    ///   vector.
    /// - [`Error::NanObjective`] if a feasible candidate's objective is NaN.
    pub fn score(&self, candidate: &Trial, history: &[ScoredTrial]) -> Result<f64> {
        self.score_classified(&candidate.classify()?, history)
    }

    pub(crate) fn score_classified(
        &self,
        candidate: &ClassifiedTrial,
        history: &[ScoredTrial],
    ) -> Result<f64> {
        let objective = match candidate.feasible_objective() {
            Some(objective) => {
                let value = objective.as_scalar()?;
                if value.is_nan() {
                    return Err(Error::NanObjective);
                }
                Some(value)
            }
            None => None,
        };
        let score = best(objective, history, self.worst_value);
        trace_debug!(
            score,
            feasible = candidate.is_feasible(),
            n_history = history.len(),
            "best score computed"
        );
        Ok(score)
    }
}
