//! Evidence normalizer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MODEL_BASE_RELIABILITY, DEFAULT_PRICE_BASE_RELIABILITY, DEFAULT_PRICE_SENSITIVITY,
    DEFAULT_RETRIEVAL_BASE_RELIABILITY, DEFAULT_RETRIEVAL_RELEVANCE_CUTOFF,
};

/// Base reliabilities and sensitivities for the evidence normalizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Classifier base reliability, scaled by certainty. Default: 0.85.
    pub model_base_reliability: Option<f64>,
    /// Retrieval base reliability, scaled by source diversity. Default: 0.75.
    pub retrieval_base_reliability: Option<f64>,
    /// Price history reliability. Default: 0.90.
    pub price_base_reliability: Option<f64>,
    /// Movement strength to confidence multiplier. Default: 0.1.
    pub price_sensitivity: Option<f64>,
    /// Score a hit must exceed to count as strong. Default: 0.7.
    pub retrieval_relevance_cutoff: Option<f64>,
}

impl NormalizerConfig {
    pub fn effective_model_base_reliability(&self) -> f64 {
        self.model_base_reliability
            .unwrap_or(DEFAULT_MODEL_BASE_RELIABILITY)
    }

    pub fn effective_retrieval_base_reliability(&self) -> f64 {
        self.retrieval_base_reliability
            .unwrap_or(DEFAULT_RETRIEVAL_BASE_RELIABILITY)
    }

    pub fn effective_price_base_reliability(&self) -> f64 {
        self.price_base_reliability
            .unwrap_or(DEFAULT_PRICE_BASE_RELIABILITY)
    }

    pub fn effective_price_sensitivity(&self) -> f64 {
        self.price_sensitivity.unwrap_or(DEFAULT_PRICE_SENSITIVITY)
    }

    pub fn effective_retrieval_relevance_cutoff(&self) -> f64 {
        self.retrieval_relevance_cutoff
            .unwrap_or(DEFAULT_RETRIEVAL_RELEVANCE_CUTOFF)
    }
}
