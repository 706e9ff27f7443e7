//! Indicator dispatch: classify trials, gather feasible objectives, score.
//!
//! [`Indicator`] selects between the two scoring modes. Each invocation is a
//! pure function of the candidate trial and the full history; nothing is
//! remembered between calls.
//!
//! ```
//! use trial_indicators::{HypervolumeIndicator, Indicator};
//!
//! let indicator = Indicator::Hypervolume(
//!     HypervolumeIndicator::new()
//!         .with_reference_point(vec![2.0, 4.0])
//!         .unwrap(),
//! );
//! let record = indicator.evaluate_json(
//!     r#"{"objective": [1, 1], "feasible": null, "constraint": null}"#,
//!     r#"[{"objective": [2, 0], "feasible": null}, {"objective": [0, 2], "feasible": null}]"#,
//! );
//! assert!((record.score.unwrap() - 5.0).abs() < 1e-12);
//! ```

use crate::best::BestIndicator;
use crate::error::{Error, Result};
use crate::hypervolume::{derive_reference_point, hypervolume};
use crate::output::ScoreRecord;
use crate::pareto::pareto_front;
use crate::trial::{ScoredTrial, Trial};
use crate::types::IndicatorKind;
use crate::validation;

/// The hypervolume indicator with its optional fixed reference point.
///
/// Without a reference point, each invocation derives one as the
/// component-wise maximum of its own Pareto front, so scores are only
/// comparable within one invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HypervolumeIndicator {
    reference_point: Option<Vec<f64>>,
}

impl HypervolumeIndicator {
    /// Create an indicator that derives its reference point per invocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the reference point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReferencePoint`] if it has fewer than two
    /// components or contains NaN.
    pub fn with_reference_point(mut self, reference_point: Vec<f64>) -> Result<Self> {
        validation::check_reference_point(&reference_point)?;
        self.reference_point = Some(reference_point);
        Ok(self)
    }

    /// Returns the fixed reference point, if any.
    #[must_use]
    pub fn reference_point(&self) -> Option<&[f64]> {
        self.reference_point.as_deref()
    }

    /// Score `candidate` against `history`.
    ///
    /// The feasible objectives of the history and the candidate are reduced
    /// to their Pareto front, whose hypervolume is the score. With no
    /// feasible objective the score is `0.0`.
    ///
    /// # Errors
    ///
    /// - Validation errors if an objective is not a vector of at least two
    ///   numbers, or if objective and reference dimensions disagree.
    /// - [`Error::FeasibleWithoutObjective`] if a trial resolves to feasible
    ///   without an objective.
    /// - [`Error::UndefinedHypervolume`] if the volume is not finite.
    pub fn score(&self, candidate: &Trial, history: &[Trial]) -> Result<f64> {
        let mut dimension = self.reference_point.as_ref().map(Vec::len);
        let mut points: Vec<&[f64]> = Vec::with_capacity(history.len() + 1);

        for trial in history.iter().chain(core::iter::once(candidate)) {
            let feasible = trial.classify()?.is_feasible();
            let Some(objective) = trial.objective.as_ref() else {
                continue;
            };
            validation::check_objective(objective, IndicatorKind::Hypervolume)?;
            let values = objective.as_vector()?;
            match dimension {
                Some(expected) if expected != values.len() => {
                    return Err(Error::DimensionMismatch {
                        expected,
                        got: values.len(),
                    });
                }
                Some(_) => {}
                None => dimension = Some(values.len()),
            }
            if feasible {
                points.push(values);
            }
        }
        trace_debug!(n_feasible = points.len(), "feasible objectives collected");

        let front = pareto_front(&points);
        let reference = match (&self.reference_point, derive_reference_point(&front)) {
            (Some(explicit), _) => explicit.clone(),
            (None, Some(derived)) => {
                trace_debug!(?derived, "reference point derived");
                derived
            }
            (None, None) => return Ok(0.0),
        };
        trace_debug!(front_size = front.len(), "pareto front extracted");

        hypervolume(&front, &reference)
    }
}

/// The two scoring modes.
#[derive(Clone, Debug, PartialEq)]
pub enum Indicator {
    /// Best-so-far over a single objective.
    Best(BestIndicator),
    /// Hypervolume of the Pareto front.
    Hypervolume(HypervolumeIndicator),
}

impl From<BestIndicator> for Indicator {
    fn from(indicator: BestIndicator) -> Self {
        Self::Best(indicator)
    }
}

impl From<HypervolumeIndicator> for Indicator {
    fn from(indicator: HypervolumeIndicator) -> Self {
        Self::Hypervolume(indicator)
    }
}

impl Indicator {
    /// Returns which mode this indicator scores with.
    #[must_use]
    pub fn kind(&self) -> IndicatorKind {
        match self {
            Self::Best(_) => IndicatorKind::Best,
            Self::Hypervolume(_) => IndicatorKind::Hypervolume,
        }
    }

    /// Decode, validate and score one invocation.
    ///
    /// `candidate` is the JSON record of the trial to score and `history`
    /// the JSON array of already scored trials. Never fails: any error is
    /// reported inside the returned record with a null score.
    #[must_use]
    pub fn evaluate_json(&self, candidate: &str, history: &str) -> ScoreRecord {
        let result = self.score_json(candidate, history);
        #[cfg(feature = "tracing")]
        {
            if let Err(e) = &result {
                tracing::error!(error = %e, kind = ?e.kind(), "scoring failed");
            }
        }
        ScoreRecord::from(result)
    }

    /// Decode, validate and score one invocation, propagating errors.
    ///
    /// # Errors
    ///
    /// Returns the first validation, semantic or computation error.
    pub fn score_json(&self, candidate: &str, history: &str) -> Result<f64> {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("score", indicator = %self.kind()).entered();

        trace_info!("validating the input");
        let candidate = validation::decode_candidate(candidate, self.kind())?;

        let score = match self {
            Self::Best(indicator) => {
                let history: Vec<ScoredTrial> = validation::decode_score_history(history)?;
                trace_info!(n_history = history.len(), "calculating the score");
                indicator.score(&candidate, &history)?
            }
            Self::Hypervolume(indicator) => {
                let history = validation::decode_trial_history(history)?;
                trace_info!(n_history = history.len(), "calculating the score");
                indicator.score(&candidate, &history)?
            }
        };
        trace_info!(score, "score calculated");
        Ok(score)
    }
}
