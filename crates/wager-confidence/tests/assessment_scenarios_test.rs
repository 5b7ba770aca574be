//! End-to-end assessment scenarios through `ConfidenceEngine`.

use chrono::{DateTime, Utc};
use wager_confidence::assessment::meta_keys;
use wager_confidence::bayes::SequentialUpdater;
use wager_confidence::{
    AssessmentInput, ConfidenceEngine, EvidenceKind, GameContext, ModelConfidence, PricePoint,
    Recommendation, RetrievalResult,
};
use wager_core::config::{ConfigOverrides, WagerConfig};

fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap()
}

fn high_confidence_input() -> AssessmentInput {
    AssessmentInput::new()
        .with_model_confidence(ModelConfidence::new("home_cover", 0.92, 0.88))
        .with_retrieval_results(vec![
            RetrievalResult::new(0.94, "beat_writer"),
            RetrievalResult::new(0.89, "injury_report"),
            RetrievalResult::new(0.86, "market_notes"),
        ])
        .with_rationale(
            "Sharp action on the home side, professional bettors have moved the number.",
        )
}

fn low_confidence_preseason_input() -> AssessmentInput {
    AssessmentInput::new()
        .with_model_confidence(ModelConfidence::new("away_cover", 0.35, 0.6))
        .with_retrieval_results(vec![
            RetrievalResult::new(0.42, "fan_blog"),
            RetrievalResult::new(0.38, "forum"),
        ])
        .with_rationale("Public is heavily on this side")
        .with_game_context(GameContext::season("preseason"))
}

/// No inputs at all: neutral confidence, always flagged.
#[test]
fn test_zero_evidence_is_flagged_at_half() {
    wager_core::tracing::init_tracing();
    let engine = ConfidenceEngine::with_defaults();
    let a = engine.assess_at(&AssessmentInput::new(), fixed_time());

    assert_eq!(a.posterior_probability(), 0.5);
    assert_eq!(a.final_confidence(), 0.5);
    assert!(a.should_flag());
    assert!(a.evidence_sources().is_empty());
    assert!(a.bayesian_updates().is_empty());
    assert_eq!(a.metadata()[meta_keys::NO_EVIDENCE_SOURCES], true);
}

/// Strong model, strong diverse retrieval, sharp rationale.
#[test]
fn test_high_confidence_scenario_proceeds() {
    let a = ConfidenceEngine::with_defaults().assess_at(&high_confidence_input(), fixed_time());

    assert!(a.final_confidence() > 0.8, "got {}", a.final_confidence());
    assert!(!a.should_flag());
    assert_eq!(a.recommendation(), Recommendation::Proceed);
    assert_eq!(a.volatility_adjustment(), 0.0);

    let kinds: Vec<EvidenceKind> = a.evidence_sources().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EvidenceKind::ModelConfidence,
            EvidenceKind::RetrievalQuality,
            EvidenceKind::SharpSignal
        ]
    );
    // Retrieval (0.75 trust) edges out the model (0.748) and is applied first.
    assert_eq!(
        a.bayesian_updates()[0].evidence.kind,
        EvidenceKind::RetrievalQuality
    );
    assert_eq!(a.bayesian_updates()[2].evidence.kind, EvidenceKind::SharpSignal);
}

/// Weak model, weak retrieval, public-money rationale, preseason.
#[test]
fn test_low_confidence_preseason_scenario_flags() {
    let a = ConfidenceEngine::with_defaults()
        .assess_at(&low_confidence_preseason_input(), fixed_time());

    assert!(a.final_confidence() < 0.6, "got {}", a.final_confidence());
    assert!(a.should_flag());
    assert_eq!(a.recommendation(), Recommendation::Flag);
    assert!((a.volatility_adjustment() + 0.08).abs() < 1e-12);
    assert!(a.margin() < 0.0);
}

/// Same evidence, playoffs: positive volatility and a lower bar.
#[test]
fn test_playoff_scenario_boosts_and_relaxes_threshold() {
    let engine = ConfidenceEngine::with_defaults();
    let regular = engine.assess_at(&high_confidence_input(), fixed_time());
    let playoffs = engine.assess_at(
        &high_confidence_input().with_game_context(GameContext::season("playoffs")),
        fixed_time(),
    );

    assert!((playoffs.volatility_adjustment() - 0.05).abs() < 1e-12);
    assert!(playoffs.threshold_used() < regular.threshold_used());
    assert_eq!(
        playoffs.posterior_probability(),
        regular.posterior_probability()
    );
    assert!(playoffs.final_confidence() <= 1.0);
}

#[test]
fn test_preseason_penalty_is_exact() {
    let input = AssessmentInput::new()
        .with_model_confidence(ModelConfidence::new("over", 0.7, 0.8))
        .with_game_context(GameContext::season("preseason"));
    let a = ConfidenceEngine::with_defaults().assess_at(&input, fixed_time());
    assert_eq!(a.volatility_adjustment(), -0.08);
}

#[test]
fn test_same_input_same_time_is_identical() {
    let engine = ConfidenceEngine::with_defaults();
    let input = high_confidence_input()
        .with_price_history(vec![
            PricePoint::new(1.91, "2025-01-01T10:00:00Z"),
            PricePoint::new(1.87, "2025-01-01T12:00:00Z"),
            PricePoint::new(1.83, "2025-01-01T14:00:00Z"),
        ])
        .with_game_context(GameContext {
            back_to_back: true,
            ..GameContext::season("regular")
        });

    let first = engine.assess_at(&input, fixed_time());
    let second = engine.assess_at(&input, fixed_time());
    assert_eq!(first, second);
}

/// The recorded updates are exactly what the updater produces for the
/// recorded evidence, and they chain.
#[test]
fn test_updates_reproduce_posterior() {
    let engine = ConfidenceEngine::with_defaults();
    let a = engine.assess_at(&high_confidence_input(), fixed_time());

    let updates = a.bayesian_updates();
    assert_eq!(updates.len(), a.evidence_sources().len());
    assert_eq!(
        updates[0].prior,
        a.metadata()[meta_keys::INITIAL_PRIOR].as_f64().unwrap()
    );
    for pair in updates.windows(2) {
        assert_eq!(pair[1].prior, pair[0].posterior);
    }
    assert_eq!(updates.last().unwrap().posterior, a.posterior_probability());

    let replay = SequentialUpdater::default().run(a.evidence_sources(), fixed_time());
    assert_eq!(replay.posterior, a.posterior_probability());
}

#[test]
fn test_empty_retrieval_and_short_history_contribute_fallbacks() {
    let input = AssessmentInput::new()
        .with_retrieval_results(Vec::new())
        .with_price_history(vec![PricePoint::new(2.1, "2025-01-01T10:00:00Z")]);
    let a = ConfidenceEngine::with_defaults().assess_at(&input, fixed_time());

    assert_eq!(a.evidence_sources().len(), 2);
    let retrieval = &a.evidence_sources()[0];
    assert_eq!(retrieval.kind, EvidenceKind::RetrievalQuality);
    assert_eq!(
        (retrieval.confidence, retrieval.reliability, retrieval.weight),
        (0.3, 0.5, 0.5)
    );
    let price = &a.evidence_sources()[1];
    assert_eq!(price.kind, EvidenceKind::PriceMovement);
    assert_eq!((price.confidence, price.weight), (0.5, 0.3));
}

#[test]
fn test_json_payload_round_trip_through_engine() {
    let payload = r#"{
        "model_confidence": {"predicted_label": "home_cover", "max_score": 0.92, "certainty": 0.88},
        "retrieval_results": [
            {"score": 0.94, "source_tag": "beat_writer"},
            {"score": 0.89, "source_tag": "injury_report"},
            {"score": 0.86, "source_tag": "market_notes"}
        ],
        "rationale_text": "Sharp action on the home side, professional bettors have moved the number.",
        "game_context": {"season_type": "Playoffs"}
    }"#;
    let a = ConfidenceEngine::with_defaults().assess_json(payload).unwrap();
    assert!(!a.should_flag());
    assert!((a.volatility_adjustment() - 0.05).abs() < 1e-12);
    assert_eq!(a.metadata()[meta_keys::GAME_CONTEXT]["season_type"], "playoffs");
}

#[test]
fn test_malformed_payload_fails_before_scoring() {
    let engine = ConfidenceEngine::with_defaults();
    assert!(engine.assess_json("not json").is_err());
    assert!(engine
        .assess_json(r#"{"price_history": [{"price": "high"}]}"#)
        .is_err());
}

#[test]
fn test_report_json_carries_summary() {
    let a = ConfidenceEngine::with_defaults().assess_at(&high_confidence_input(), fixed_time());
    let json = a.to_json().unwrap();

    assert_eq!(json["summary"]["recommendation"], "PROCEED");
    assert_eq!(json["should_flag"], false);
    let sources = json["summary"]["evidence_sources"].as_object().unwrap();
    assert!(sources.contains_key("model_confidence"));
    assert!(sources.contains_key("retrieval_quality"));
    assert!(sources.contains_key("sharp_signal"));
    assert_eq!(
        json["summary"]["bayesian_updates"].as_array().unwrap().len(),
        3
    );

    let pretty = a.to_json_string().unwrap();
    assert!(pretty.contains("\"final_confidence\""));
}

#[test]
fn test_configured_engine_changes_decision() {
    let strict = WagerConfig::from_toml(
        r#"
        [threshold]
        base_threshold = 0.95
        ceiling = 0.99
        "#,
    )
    .unwrap();
    let engine = ConfidenceEngine::new(strict).unwrap();
    let a = engine.assess_at(&low_confidence_preseason_input(), fixed_time());
    assert!(a.threshold_used() > 0.9);
    assert!(a.should_flag());

    let mut relaxed = WagerConfig::default();
    WagerConfig::apply_overrides(
        &mut relaxed,
        &ConfigOverrides {
            base_threshold: Some(0.4),
            ..ConfigOverrides::default()
        },
    );
    let engine = ConfidenceEngine::new(relaxed).unwrap();
    let a = engine.assess_at(&high_confidence_input(), fixed_time());
    assert!((a.threshold_used() - 0.4).abs() < 1e-12);
}
