//! Model-confidence normalizer: classifier output → evidence.

use crate::evidence::inputs::ModelConfidence;
use crate::evidence::sink::EvidenceSink;
use crate::evidence::types::{EvidenceKind, EvidenceSource};

use super::EvidenceNormalizer;

/// `confidence = max_score`, `reliability = base * certainty`, weight 1.0.
#[derive(Debug, Clone)]
pub struct ModelConfidenceNormalizer {
    base_reliability: f64,
}

impl ModelConfidenceNormalizer {
    pub fn new(base_reliability: f64) -> Self {
        Self { base_reliability }
    }
}

impl EvidenceNormalizer for ModelConfidenceNormalizer {
    type Input = ModelConfidence;

    fn normalize(&self, input: &ModelConfidence, sink: &mut EvidenceSink) {
        let max_score = sink.unit("model_confidence.max_score", input.max_score);
        let certainty = sink.unit("model_confidence.certainty", input.certainty);

        let source = EvidenceSource::new(
            EvidenceKind::ModelConfidence,
            max_score,
            self.base_reliability * certainty,
        )
        .with_metadata("predicted_label", input.predicted_label.as_str())
        .with_metadata("certainty", certainty)
        .with_metadata("label_count", input.probabilities.len());

        sink.push(source);
    }
}
