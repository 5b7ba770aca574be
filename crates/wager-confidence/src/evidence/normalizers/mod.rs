//! One normalizer per evidence kind family.
//!
//! Each normalizer is total: it handles its own degenerate input and pushes
//! zero or more `EvidenceSource`s into the sink. An absent input pushes
//! nothing.

pub mod model;
pub mod price;
pub mod retrieval;
pub mod text;

use wager_core::config::NormalizerConfig;

use super::inputs::AssessmentInput;
use super::sink::EvidenceSink;

pub use model::ModelConfidenceNormalizer;
pub use price::PriceMovementNormalizer;
pub use retrieval::RetrievalQualityNormalizer;
pub use text::TextPatternNormalizer;

/// Converts one collaborator's raw output into evidence.
pub trait EvidenceNormalizer {
    type Input: ?Sized;

    fn normalize(&self, input: &Self::Input, sink: &mut EvidenceSink);

    /// Absent input contributes no evidence at all.
    fn normalize_opt(&self, input: Option<&Self::Input>, sink: &mut EvidenceSink) {
        if let Some(input) = input {
            self.normalize(input, sink);
        }
    }
}

/// The four built-in normalizers, configured once.
#[derive(Debug, Clone)]
pub struct NormalizerSet {
    pub model: ModelConfidenceNormalizer,
    pub retrieval: RetrievalQualityNormalizer,
    pub price: PriceMovementNormalizer,
    pub text: TextPatternNormalizer,
}

impl NormalizerSet {
    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self {
            model: ModelConfidenceNormalizer::new(config.effective_model_base_reliability()),
            retrieval: RetrievalQualityNormalizer::new(
                config.effective_retrieval_base_reliability(),
                config.effective_retrieval_relevance_cutoff(),
            ),
            price: PriceMovementNormalizer::new(
                config.effective_price_base_reliability(),
                config.effective_price_sensitivity(),
            ),
            text: TextPatternNormalizer::new(),
        }
    }

    /// Normalize every present input, in fixed order: model, retrieval,
    /// price, text.
    pub fn normalize_all(&self, input: &AssessmentInput, sink: &mut EvidenceSink) {
        self.model.normalize_opt(input.model_confidence.as_ref(), sink);
        self.retrieval
            .normalize_opt(input.retrieval_results.as_deref(), sink);
        self.price.normalize_opt(input.price_history.as_deref(), sink);
        self.text.normalize_opt(input.rationale_text.as_deref(), sink);
    }
}

impl Default for NormalizerSet {
    fn default() -> Self {
        Self::from_config(&NormalizerConfig::default())
    }
}
