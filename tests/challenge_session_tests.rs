use bubblechart_rs::challenge::{
    ChallengeDefinition, ChallengeDetail, ChallengeSession, ChallengeSummary, SubmissionRequest,
    SubmissionResponse,
};
use bubblechart_rs::core::{BubblePoint, RuleDescriptor, RuleOperator};

const DETAIL_FIXTURE: &str = r#"{
    "title": "Keep it compact",
    "instruction_text": "Drag the bubbles so every system is shorter than 200km.",
    "rule_operator": "LESS_THAN",
    "rule_value_a": 200.0,
    "rule_value_b": null,
    "initial_data": [
        {"label": "Shanghai", "initial_x": 380.0, "initial_y": 800.0, "initial_z": 3.8},
        {"label": "London", "initial_x": 270.0, "initial_y": 400.0, "initial_z": 1.3}
    ]
}"#;

fn between_definition() -> ChallengeDefinition {
    ChallengeDefinition {
        title: "Fit the band".to_owned(),
        instruction_text: "Land every system between 100km and 300km.".to_owned(),
        rule: RuleDescriptor::between(100.0, 300.0),
        initial_points: vec![
            BubblePoint::new("Shanghai", 380.0, 800.0, 3.8),
            BubblePoint::new("London", 270.0, 400.0, 1.3),
        ],
    }
}

#[test]
fn challenge_detail_parses_from_backend_payload() {
    let detail = ChallengeDetail::from_json_str(DETAIL_FIXTURE).expect("parse detail");
    assert_eq!(detail.rule_operator, RuleOperator::LessThan);
    assert_eq!(detail.initial_data.len(), 2);
    assert_eq!(detail.initial_data[0].label, "Shanghai");

    let definition = ChallengeDefinition::try_from(detail).expect("definition");
    assert_eq!(definition.initial_points.len(), 2);
    assert!((definition.initial_points[1].y - 400.0).abs() <= 1e-9);
}

#[test]
fn definition_rejects_between_without_upper_bound() {
    let mut detail = ChallengeDetail::from_json_str(DETAIL_FIXTURE).expect("parse detail");
    detail.rule_operator = RuleOperator::Between;
    detail.rule_value_b = None;
    assert!(ChallengeDefinition::try_from(detail).is_err());
}

#[test]
fn session_starts_from_initial_values_and_resets_to_them() {
    let mut session = ChallengeSession::new(between_definition());
    assert!((session.points()[0].y - 800.0).abs() <= 1e-9);

    session.apply_move("Shanghai", 380.0, 250.0).expect("move");
    session.apply_move("London", 270.0, 150.0).expect("move");
    assert!((session.points()[0].y - 250.0).abs() <= 1e-9);

    session.reset();
    assert!((session.points()[0].y - 800.0).abs() <= 1e-9);
    assert!((session.points()[1].y - 400.0).abs() <= 1e-9);
}

#[test]
fn apply_move_rejects_unknown_labels_and_non_finite_values() {
    let mut session = ChallengeSession::new(between_definition());
    assert!(session.apply_move("Madrid", 1.0, 1.0).is_err());
    assert!(session.apply_move("London", f64::NAN, 1.0).is_err());
}

#[test]
fn between_grading_matches_backend_semantics() {
    let mut session = ChallengeSession::new(between_definition());

    let outcome = session.evaluate();
    assert!(!outcome.correct);
    assert!(outcome.feedback.contains("The maximum value (800.0km) is too high."));

    session.apply_move("Shanghai", 380.0, 250.0).expect("move");
    session.apply_move("London", 270.0, 150.0).expect("move");

    let outcome = session.evaluate();
    assert!(outcome.correct);
    assert_eq!(
        outcome.feedback,
        "Well done! The range of your data is [150.0km, 250.0km], which fits perfectly \
         within the required range of [100.0km, 300.0km]."
    );
}

#[test]
fn between_grading_reports_low_and_high_violations() {
    let mut session = ChallengeSession::new(between_definition());
    session.apply_move("Shanghai", 380.0, 350.0).expect("move");
    session.apply_move("London", 270.0, 50.0).expect("move");

    let outcome = session.evaluate();
    assert!(!outcome.correct);
    assert!(outcome.feedback.contains("The minimum value (50.0km) is too low."));
    assert!(outcome.feedback.contains("The maximum value (350.0km) is too high."));
}

#[test]
fn less_than_grading_uses_strict_comparison() {
    let definition = ChallengeDefinition {
        rule: RuleDescriptor::less_than(200.0),
        ..between_definition()
    };
    let mut session = ChallengeSession::new(definition);
    session.apply_move("Shanghai", 380.0, 200.0).expect("move");
    session.apply_move("London", 270.0, 100.0).expect("move");

    // max == bound is not "less than".
    let outcome = session.evaluate();
    assert!(!outcome.correct);

    session.apply_move("Shanghai", 380.0, 190.0).expect("move");
    let outcome = session.evaluate();
    assert!(outcome.correct);
    assert!(outcome.feedback.contains("is less than 200.0km."));
}

#[test]
fn greater_than_grading_checks_the_minimum() {
    let definition = ChallengeDefinition {
        rule: RuleDescriptor::greater_than(300.0),
        ..between_definition()
    };
    let mut session = ChallengeSession::new(definition);

    let outcome = session.evaluate();
    assert!(!outcome.correct);
    assert!(outcome.feedback.contains("should be greater than 300.0km"));

    session.apply_move("Shanghai", 380.0, 800.0).expect("move");
    session.apply_move("London", 270.0, 310.0).expect("move");
    let outcome = session.evaluate();
    assert!(outcome.correct);
}

#[test]
fn submission_wire_round_trip() {
    let request = SubmissionRequest {
        submitted_data: vec![BubblePoint::new("Shanghai", 375.0, 450.0, 3.5)],
    };
    let json = request.to_json().expect("serialize");
    assert!(json.contains("\"submitted_data\""));
    assert!(json.contains("\"Shanghai\""));

    let parsed: SubmissionRequest = serde_json::from_str(&json).expect("parse back");
    assert_eq!(parsed, request);
}

#[test]
fn submission_response_converts_from_outcome() {
    let session = ChallengeSession::new(between_definition());
    let response = SubmissionResponse::from(session.evaluate());
    assert!(!response.correct);
    assert!(response.feedback.starts_with("Not quite."));
}

#[test]
fn summary_payload_parses() {
    let json = r#"[{"id": 1, "title": "Warm up", "instruction_text": "Drag things."}]"#;
    let summaries: Vec<ChallengeSummary> = serde_json::from_str(json).expect("parse list");
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, 1);
}
