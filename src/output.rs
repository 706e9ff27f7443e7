//! The single record an indicator invocation emits.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outcome of scoring one trial.
///
/// Serializes to `{"score": 1.5}` on success and to
/// `{"score": null, "error": "..."}` on failure. A null score means the
/// trial produced no result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// The computed score, or `None` on failure.
    pub score: Option<f64>,
    /// The failure message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreRecord {
    /// A successful record.
    #[must_use]
    pub fn success(score: f64) -> Self {
        Self {
            score: Some(score),
            error: None,
        }
    }

    /// A failed record carrying `message`.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            score: None,
            error: Some(message.into()),
        }
    }

    /// Returns `true` if a score was produced.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.score.is_some()
    }

    /// Render as a single-line JSON document.
    #[must_use]
    pub fn to_json(&self) -> String {
        match self.score {
            // serde_json writes non-finite floats as `null`; never report
            // that as a success.
            Some(score) if !score.is_finite() => {
                Self::failure(format!("score is not finite: {score}")).to_json()
            }
            _ => serde_json::to_string(self).unwrap_or_else(|_| {
                String::from(r#"{"score":null,"error":"failed to encode the score"}"#)
            }),
        }
    }
}

impl From<Result<f64>> for ScoreRecord {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(score) => Self::success(score),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_success_json() {
        assert_eq!(ScoreRecord::success(1.5).to_json(), r#"{"score":1.5}"#);
    }

    #[test]
    fn test_failure_json() {
        let record = ScoreRecord::from(Err::<f64, _>(Error::FeasibleWithoutObjective));
        assert!(!record.is_success());
        assert_eq!(
            record.to_json(),
            r#"{"score":null,"error":"the trial is feasible, but the objective is null"}"#
        );
    }

    #[test]
    fn test_non_finite_score_is_failure() {
        let json = ScoreRecord::success(f64::INFINITY).to_json();
        assert!(json.starts_with(r#"{"score":null,"error":"#));
    }
}
