//! Decoding and structural validation of the JSON inputs.
//!
//! Each indicator invocation receives two JSON documents: the candidate
//! trial and the history of already scored trials. The accepted shapes are
//! published as JSON Schema documents ([`schemas`]); decoding enforces the
//! same rules with serde and a few post-decode checks, so malformed input
//! never reaches the scoring code.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::objective::{Constraint, Objective};
use crate::trial::{ScoredTrial, Trial};
use crate::types::{Feasibility, IndicatorKind};

/// Minimum number of objectives for the hypervolume indicator.
pub const MIN_HYPERVOLUME_OBJECTIVES: usize = 2;

/// JSON Schema documents describing the accepted inputs.
///
/// Constraint arrays need at least one element in both modes. Older
/// hypervolume schemas asked for two; a single-constraint array is accepted
/// here, so these documents are slightly more permissive than those.
pub mod schemas {
    /// Candidate trial for the best indicator.
    pub const BEST_CANDIDATE: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Trial to score",
  "type": "object",
  "properties": {
    "objective": {"type": ["number", "null"]},
    "feasible": {"type": ["boolean", "null"]},
    "constraint": {
      "oneOf": [
        {"type": ["number", "null"]},
        {"type": "array", "minItems": 1, "items": {"type": "number"}}
      ]
    }
  },
  "required": ["objective", "feasible", "constraint"]
}"#;

    /// History for the best indicator.
    pub const BEST_HISTORY: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Trials scored",
  "type": "array",
  "items": {
    "type": "object",
    "properties": {"score": {"type": "number"}},
    "required": ["score"]
  }
}"#;

    /// Candidate trial for the hypervolume indicator.
    pub const HYPERVOLUME_CANDIDATE: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Trial to score",
  "type": "object",
  "properties": {
    "objective": {
      "oneOf": [
        {"type": "null"},
        {"type": "array", "minItems": 2, "items": {"type": "number"}}
      ]
    },
    "feasible": {"type": ["boolean", "null"]},
    "constraint": {
      "oneOf": [
        {"type": ["number", "null"]},
        {"type": "array", "minItems": 1, "items": {"type": "number"}}
      ]
    }
  },
  "required": ["objective", "feasible", "constraint"]
}"#;

    /// History for the hypervolume indicator.
    pub const HYPERVOLUME_HISTORY: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Trials scored",
  "type": "array",
  "items": {
    "type": "object",
    "properties": {
      "objective": {
        "oneOf": [
          {"type": "null"},
          {"type": "array", "minItems": 2, "items": {"type": "number"}}
        ]
      },
      "feasible": {"type": ["boolean", "null"]},
      "constraint": {
        "oneOf": [
          {"type": ["number", "null"]},
          {"type": "array", "minItems": 1, "items": {"type": "number"}}
        ]
      }
    },
    "required": ["objective", "feasible"]
  }
}"#;

    /// Reference point for the hypervolume indicator.
    pub const REFERENCE_POINT: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Reference point for hypervolume",
  "oneOf": [
    {"type": "null"},
    {"type": "array", "minItems": 2, "items": {"type": "number"}}
  ]
}"#;

    /// Returns the `(candidate, history)` schemas for an indicator.
    #[must_use]
    pub fn for_kind(kind: crate::IndicatorKind) -> (&'static str, &'static str) {
        match kind {
            crate::IndicatorKind::Best => (BEST_CANDIDATE, BEST_HISTORY),
            crate::IndicatorKind::Hypervolume => (HYPERVOLUME_CANDIDATE, HYPERVOLUME_HISTORY),
        }
    }
}

/// Makes an `Option` field required-but-nullable: the key must be present,
/// `null` decodes to `None`.
fn required<'de, D, T>(deserializer: D) -> core::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Deserialize)]
struct CandidateRecord {
    #[serde(deserialize_with = "required")]
    objective: Option<Objective>,
    #[serde(deserialize_with = "required")]
    feasible: Option<bool>,
    constraint: Constraint,
}

#[derive(Deserialize)]
struct HistoryRecord {
    #[serde(deserialize_with = "required")]
    objective: Option<Objective>,
    #[serde(deserialize_with = "required")]
    feasible: Option<bool>,
    #[serde(default)]
    constraint: Constraint,
}

fn decode<T: DeserializeOwned>(json: &str, what: &'static str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| Error::Decode { what, source })
}

/// Check an objective's shape against what `kind` scores.
///
/// # Errors
///
/// - [`Error::ObjectiveShape`] if a scalar is given where a vector is
///   expected or vice versa.
/// - [`Error::TooFewObjectives`] if a hypervolume objective has fewer than
///   [`MIN_HYPERVOLUME_OBJECTIVES`] components.
/// - [`Error::NanObjective`] if any component is NaN.
pub fn check_objective(objective: &Objective, kind: IndicatorKind) -> Result<()> {
    match (kind, objective) {
        (IndicatorKind::Best, Objective::Vector(_)) => {
            return Err(Error::ObjectiveShape { expected: "scalar" });
        }
        (IndicatorKind::Hypervolume, Objective::Scalar(_)) => {
            return Err(Error::ObjectiveShape { expected: "vector" });
        }
        (IndicatorKind::Hypervolume, Objective::Vector(v)) if v.len() < MIN_HYPERVOLUME_OBJECTIVES => {
            return Err(Error::TooFewObjectives {
                min: MIN_HYPERVOLUME_OBJECTIVES,
                got: v.len(),
            });
        }
        _ => {}
    }
    objective.check_not_nan()
}

/// Check that a constraint vector is not empty.
///
/// # Errors
///
/// Returns [`Error::EmptyConstraint`] for `[]`.
pub fn check_constraint(constraint: &Constraint) -> Result<()> {
    match constraint {
        Constraint::Vector(v) if v.is_empty() => Err(Error::EmptyConstraint),
        _ => Ok(()),
    }
}

fn into_trial(
    objective: Option<Objective>,
    feasible: Option<bool>,
    constraint: Constraint,
    kind: IndicatorKind,
) -> Result<Trial> {
    if let Some(objective) = &objective {
        check_objective(objective, kind)?;
    }
    check_constraint(&constraint)?;
    Ok(Trial {
        objective,
        feasible: Feasibility::from(feasible),
        constraint,
    })
}

/// Decode the candidate trial for `kind`.
///
/// All three keys (`objective`, `feasible`, `constraint`) are required;
/// each may be `null`.
///
/// # Errors
///
/// Returns a validation error if the document does not match the candidate
/// schema for `kind`.
pub fn decode_candidate(json: &str, kind: IndicatorKind) -> Result<Trial> {
    let record: CandidateRecord = decode(json, "candidate trial")?;
    into_trial(record.objective, record.feasible, record.constraint, kind)
}

/// Decode the hypervolume indicator's history.
///
/// Every item needs `objective` and `feasible`; `constraint` is optional.
///
/// # Errors
///
/// Returns a validation error if the document does not match
/// [`schemas::HYPERVOLUME_HISTORY`].
pub fn decode_trial_history(json: &str) -> Result<Vec<Trial>> {
    let records: Vec<HistoryRecord> = decode(json, "trial history")?;
    records
        .into_iter()
        .map(|r| into_trial(r.objective, r.feasible, r.constraint, IndicatorKind::Hypervolume))
        .collect()
}

/// Decode the best indicator's history of scores.
///
/// # Errors
///
/// Returns a validation error if the document does not match
/// [`schemas::BEST_HISTORY`].
pub fn decode_score_history(json: &str) -> Result<Vec<ScoredTrial>> {
    decode(json, "score history")
}

/// Decode an optional reference point (`null` or an array of numbers).
///
/// # Errors
///
/// Returns a validation error if the document is neither `null` nor an
/// array of at least [`MIN_HYPERVOLUME_OBJECTIVES`] numbers.
pub fn decode_reference_point(json: &str) -> Result<Option<Vec<f64>>> {
    let reference: Option<Vec<f64>> = decode(json, "reference point")?;
    if let Some(r) = &reference {
        check_reference_point(r)?;
    }
    Ok(reference)
}

/// Check an explicit reference point.
///
/// # Errors
///
/// Returns [`Error::InvalidReferencePoint`] if it has fewer than
/// [`MIN_HYPERVOLUME_OBJECTIVES`] components or contains NaN.
pub fn check_reference_point(reference: &[f64]) -> Result<()> {
    if reference.len() < MIN_HYPERVOLUME_OBJECTIVES {
        return Err(Error::InvalidReferencePoint(
            "reference point must have at least 2 components",
        ));
    }
    if reference.iter().any(|r| r.is_nan()) {
        return Err(Error::InvalidReferencePoint("reference point contains NaN"));
    }
    Ok(())
}
