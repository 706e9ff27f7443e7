//! End-to-end tests for JSON input and the emitted score record.

use trial_indicators::prelude::*;

const EPS: f64 = 1e-6;

fn hypervolume(reference: Option<Vec<f64>>) -> Indicator {
    let mut indicator = HypervolumeIndicator::new();
    if let Some(reference) = reference {
        indicator = indicator.with_reference_point(reference).unwrap();
    }
    Indicator::Hypervolume(indicator)
}

#[test]
fn test_hypervolume_json_with_ref_point() {
    let record = hypervolume(Some(vec![2.0, 4.0])).evaluate_json(
        r#"{"objective": [1, 1], "feasible": null, "constraint": null}"#,
        r#"[{"objective": [2, 0], "feasible": null, "constraint": null},
            {"objective": [0, 2], "feasible": null, "constraint": null}]"#,
    );
    assert!((record.score.unwrap() - 5.0).abs() < EPS);
}

#[test]
fn test_hypervolume_json_constraints() {
    let record = hypervolume(None).evaluate_json(
        r#"{"objective": [1, 1], "feasible": null, "constraint": [0, 0]}"#,
        r#"[{"objective": [2, 0], "feasible": null, "constraint": [0, 0]},
            {"objective": [0, 2], "feasible": null, "constraint": [0, 0]},
            {"objective": [1, 1], "feasible": null, "constraint": [0, 0]},
            {"objective": [0.5, 1], "feasible": null, "constraint": [1, 1]},
            {"objective": [1, 0.5], "feasible": null, "constraint": [1, 1]}]"#,
    );
    assert!((record.score.unwrap() - 1.0).abs() < EPS);
}

#[test]
fn test_best_json() {
    let indicator = Indicator::Best(BestIndicator::new());
    let record = indicator.evaluate_json(
        r#"{"objective": 0.2, "feasible": null, "constraint": null}"#,
        r#"[{"score": 0.5}, {"score": 0.3}]"#,
    );
    assert!((record.score.unwrap() - 0.2).abs() < EPS);
    assert_eq!(record.to_json(), r#"{"score":0.2}"#);
}

#[test]
fn test_best_json_infeasible_empty_history() {
    let indicator = Indicator::Best(BestIndicator::new().with_worst_value(1e300).unwrap());
    let record = indicator.evaluate_json(
        r#"{"objective": 0.2, "feasible": null, "constraint": 0.5}"#,
        "[]",
    );
    assert!((record.score.unwrap() - 1e300).abs() < EPS);
}

#[test]
fn test_validation_errors_surface_as_null_score() {
    let indicator = hypervolume(None);
    let cases = [
        // wrong element type
        (r#"{"objective": [1.0, "A"], "feasible": null, "constraint": null}"#, "[]"),
        // wrong feasible type
        (r#"{"objective": [1.0, 2.0], "feasible": "A", "constraint": null}"#, "[]"),
        // missing constraint key
        (r#"{"objective": [1.0, 2.0], "feasible": null}"#, "[]"),
        // history item missing feasible
        (
            r#"{"objective": [1.0, 2.0], "feasible": null, "constraint": null}"#,
            r#"[{"objective": [2.0, 1.0]}]"#,
        ),
        // dimension mismatch between candidate and history
        (
            r#"{"objective": [1.0, 2.0], "feasible": null, "constraint": null}"#,
            r#"[{"objective": [2.0, 1.0, 0.0], "feasible": true}]"#,
        ),
    ];
    for (candidate, history) in cases {
        let err = indicator.score_json(candidate, history).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{candidate} / {history}");

        let record = indicator.evaluate_json(candidate, history);
        assert_eq!(record.score, None);
        assert!(record.error.is_some());
        assert!(record.to_json().starts_with(r#"{"score":null,"error":"#));
    }
}

#[test]
fn test_semantic_error_json() {
    let indicator = Indicator::Best(BestIndicator::new());
    let err = indicator
        .score_json(r#"{"objective": null, "feasible": true, "constraint": null}"#, "[]")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Semantic);
}

#[test]
fn test_reference_dimension_mismatch_json() {
    let indicator = hypervolume(Some(vec![2.0, 2.0, 2.0]));
    let err = indicator
        .score_json(
            r#"{"objective": [1.0, 1.0], "feasible": null, "constraint": null}"#,
            "[]",
        )
        .unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { expected: 3, got: 2 }));
}

#[test]
fn test_score_record_round_trip() {
    let record: ScoreRecord = serde_json::from_str(r#"{"score": null, "error": "boom"}"#).unwrap();
    assert_eq!(record, ScoreRecord::failure("boom"));
    let record: ScoreRecord = serde_json::from_str(r#"{"score": 2.5}"#).unwrap();
    assert_eq!(record, ScoreRecord::success(2.5));
}
