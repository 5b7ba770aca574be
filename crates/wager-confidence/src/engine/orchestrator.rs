//! ConfidenceEngine: composes normalizers, updater, volatility, and
//! threshold into a single `assess()` call.
//!
//! The engine is stateless. Each call builds its own working data, so one
//! engine can be shared across threads without synchronization.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::{json, Value};
use tracing::{debug, info};
use wager_core::config::WagerConfig;
use wager_core::errors::{AssessError, ConfigError};

use crate::adjust::{ThresholdCalculator, VolatilityAdjuster};
use crate::assessment::{meta_keys, BatchDiagnostics, ConfidenceAssessment};
use crate::bayes::{initial_prior, LikelihoodModel, SequentialUpdater};
use crate::evidence::{AssessmentInput, EvidenceSink, EvidenceSource, GameContext, NormalizerSet};

use super::stage::AssessmentStage;

#[derive(Debug, Clone)]
pub struct ConfidenceEngine {
    config: WagerConfig,
    normalizers: NormalizerSet,
    updater: SequentialUpdater,
    volatility: VolatilityAdjuster,
    threshold: ThresholdCalculator,
}

impl ConfidenceEngine {
    /// Build an engine from a validated configuration.
    pub fn new(config: WagerConfig) -> Result<Self, ConfigError> {
        WagerConfig::validate(&config)?;
        Ok(Self::from_valid_config(config))
    }

    /// Engine with compiled defaults.
    pub fn with_defaults() -> Self {
        Self::from_valid_config(WagerConfig::default())
    }

    fn from_valid_config(config: WagerConfig) -> Self {
        Self {
            normalizers: NormalizerSet::from_config(&config.normalizer),
            updater: SequentialUpdater::new(LikelihoodModel::from_config(&config.likelihood)),
            volatility: VolatilityAdjuster::from_config(&config.volatility),
            threshold: ThresholdCalculator::from_config(&config.threshold),
            config,
        }
    }

    pub fn config(&self) -> &WagerConfig {
        &self.config
    }

    /// Assess one bet, stamping updates with the current time.
    pub fn assess(&self, input: &AssessmentInput) -> ConfidenceAssessment {
        self.assess_at(input, Utc::now())
    }

    /// Assess one bet with an explicit timestamp. Identical inputs and
    /// timestamp produce identical assessments.
    pub fn assess_at(&self, input: &AssessmentInput, at: DateTime<Utc>) -> ConfidenceAssessment {
        let stage = AssessmentStage::Collecting;
        debug!(
            %stage,
            model = input.model_confidence.is_some(),
            retrieval = input.retrieval_results.as_ref().map(Vec::len),
            prices = input.price_history.as_ref().map(Vec::len),
            rationale = input.rationale_text.is_some(),
            "assessment started"
        );
        let context = input.game_context.clone().unwrap_or_default();

        let stage = advance(stage);
        let mut sink = EvidenceSink::new();
        self.normalizers.normalize_all(input, &mut sink);
        debug!(%stage, evidence = sink.sources().len(), warnings = sink.warnings().len(), "normalized");

        self.decide(stage, sink, &context, at)
    }

    /// Assess a JSON payload shaped like `AssessmentInput`. A payload of the
    /// wrong shape fails here, before any scoring.
    pub fn assess_json(&self, payload: &str) -> Result<ConfidenceAssessment, AssessError> {
        let input: AssessmentInput = serde_json::from_str(payload)?;
        Ok(self.assess(&input))
    }

    /// Assess pre-built evidence, skipping the built-in normalizers.
    /// Out-of-range fields are sanitized with warnings.
    pub fn assess_evidence(
        &self,
        evidence: Vec<EvidenceSource>,
        context: Option<&GameContext>,
    ) -> ConfidenceAssessment {
        self.assess_evidence_at(evidence, context, Utc::now())
    }

    pub fn assess_evidence_at(
        &self,
        evidence: Vec<EvidenceSource>,
        context: Option<&GameContext>,
        at: DateTime<Utc>,
    ) -> ConfidenceAssessment {
        let stage = advance(AssessmentStage::Collecting);
        let mut sink = EvidenceSink::new();
        for source in evidence {
            sink.push_sanitized(source);
        }
        let context = context.cloned().unwrap_or_default();
        self.decide(stage, sink, &context, at)
    }

    /// Assess independent inputs in parallel. All results share one
    /// timestamp.
    pub fn assess_batch(&self, inputs: &[AssessmentInput]) -> Vec<ConfidenceAssessment> {
        let at = Utc::now();
        let assessments: Vec<ConfidenceAssessment> = inputs
            .par_iter()
            .map(|input| self.assess_at(input, at))
            .collect();
        info!(
            diagnostics = %BatchDiagnostics::from_assessments(&assessments),
            "batch assessment complete"
        );
        assessments
    }

    /// Updating → Adjusting → Deciding → Done.
    fn decide(
        &self,
        stage: AssessmentStage,
        sink: EvidenceSink,
        context: &GameContext,
        at: DateTime<Utc>,
    ) -> ConfidenceAssessment {
        let (evidence, warnings) = sink.into_parts();

        let stage = advance(stage);
        let prior = initial_prior(&evidence);
        let chain = self.updater.run_from(prior, &evidence, at);
        debug!(%stage, initial_prior = prior, posterior = chain.posterior, "updated");

        let stage = advance(stage);
        let volatility_adjustment = self.volatility.adjustment(context);
        let final_confidence = (chain.posterior + volatility_adjustment).clamp(0.0, 1.0);
        debug!(%stage, volatility_adjustment, final_confidence, "adjusted");

        let stage = advance(stage);
        let avg_reliability = average_reliability(&evidence);
        let threshold_used = self.threshold.threshold(avg_reliability, context);
        let no_evidence = evidence.is_empty();
        let should_flag = no_evidence || final_confidence < threshold_used;
        debug!(%stage, avg_reliability, threshold_used, should_flag, "decided");

        let mut metadata = BTreeMap::new();
        metadata.insert(meta_keys::INITIAL_PRIOR.to_string(), json!(prior));
        metadata.insert(meta_keys::EVIDENCE_COUNT.to_string(), json!(evidence.len()));
        metadata.insert(
            meta_keys::AVERAGE_RELIABILITY.to_string(),
            json!(avg_reliability),
        );
        metadata.insert(
            meta_keys::GAME_CONTEXT.to_string(),
            json!({
                "season_type": context.season_type.name(),
                "back_to_back": context.back_to_back,
                "high_visibility": context.high_visibility,
            }),
        );
        if no_evidence {
            metadata.insert(meta_keys::NO_EVIDENCE_SOURCES.to_string(), Value::Bool(true));
        }
        if !warnings.is_empty() {
            metadata.insert(meta_keys::WARNINGS.to_string(), json!(warnings));
        }

        let stage = advance(stage);
        info!(
            %stage,
            final_confidence,
            threshold = threshold_used,
            should_flag,
            evidence = evidence.len(),
            "assessment complete"
        );

        ConfidenceAssessment::new(
            final_confidence,
            chain.posterior,
            should_flag,
            threshold_used,
            volatility_adjustment,
            evidence,
            chain.updates,
            metadata,
        )
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn advance(stage: AssessmentStage) -> AssessmentStage {
    let next = stage.next().unwrap_or(AssessmentStage::Done);
    debug!(from = %stage, to = %next, "stage transition");
    next
}

/// Mean reliability of the evidence; 0.0 when there is none.
fn average_reliability(evidence: &[EvidenceSource]) -> f64 {
    if evidence.is_empty() {
        return 0.0;
    }
    evidence.iter().map(|e| e.reliability.clamp(0.0, 1.0)).sum::<f64>() / evidence.len() as f64
}
