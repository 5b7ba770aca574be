//! Evidence kinds and the uniform `EvidenceSource` record.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of evidence kinds. Each kind carries the type prior used to
/// seed the sequential update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceKind {
    /// Output of the text-confidence classifier.
    ModelConfidence,
    /// Relevance of retrieved supporting documents.
    RetrievalQuality,
    /// Direction and steadiness of market price movement.
    PriceMovement,
    /// Professional/sharp-money language in the rationale.
    SharpSignal,
    /// Public/recreational-money language. A negative indicator.
    PublicSignal,
    /// Injury/availability language.
    InjurySignal,
}

impl EvidenceKind {
    pub const ALL: [EvidenceKind; 6] = [
        Self::ModelConfidence,
        Self::RetrievalQuality,
        Self::PriceMovement,
        Self::SharpSignal,
        Self::PublicSignal,
        Self::InjurySignal,
    ];

    /// Type prior: how likely the favorable outcome is, given only that
    /// this kind of evidence exists.
    pub fn prior(&self) -> f64 {
        match self {
            Self::ModelConfidence => 0.65,
            Self::RetrievalQuality => 0.6,
            Self::PriceMovement => 0.55,
            Self::SharpSignal => 0.8,
            Self::PublicSignal => 0.4,
            Self::InjurySignal => 0.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ModelConfidence => "model_confidence",
            Self::RetrievalQuality => "retrieval_quality",
            Self::PriceMovement => "price_movement",
            Self::SharpSignal => "sharp_signal",
            Self::PublicSignal => "public_signal",
            Self::InjurySignal => "injury_signal",
        }
    }
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One piece of evidence, normalized.
///
/// `confidence` and `reliability` are in [0, 1]. `weight` is non-negative
/// and is clamped to [0, 1] only when used as an interpolation factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub name: String,
    pub kind: EvidenceKind,
    pub confidence: f64,
    pub reliability: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Explainability annotations. Never read by the math.
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

fn default_weight() -> f64 {
    1.0
}

impl EvidenceSource {
    /// Build a source named after its kind, weight 1.0.
    pub fn new(kind: EvidenceKind, confidence: f64, reliability: f64) -> Self {
        Self {
            name: kind.name().to_string(),
            kind,
            confidence,
            reliability,
            weight: 1.0,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Ordering key for the sequential updater: most trustworthy first.
    pub fn trust(&self) -> f64 {
        self.reliability * self.weight
    }

    /// Weight as an interpolation factor.
    pub fn interpolation_weight(&self) -> f64 {
        self.weight.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<&str> = EvidenceKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EvidenceKind::ALL.len());
    }

    #[test]
    fn test_priors_are_probabilities() {
        for kind in EvidenceKind::ALL {
            assert!((0.0..=1.0).contains(&kind.prior()), "{kind} prior out of range");
        }
        assert_eq!(EvidenceKind::SharpSignal.prior(), 0.8);
        assert_eq!(EvidenceKind::PublicSignal.prior(), 0.4);
        assert_eq!(EvidenceKind::RetrievalQuality.prior(), 0.6);
    }

    #[test]
    fn test_interpolation_weight_clamps_large_weights() {
        let e = EvidenceSource::new(EvidenceKind::PriceMovement, 0.5, 0.9).with_weight(2.5);
        assert_eq!(e.interpolation_weight(), 1.0);
        assert_eq!(e.trust(), 0.9 * 2.5);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EvidenceKind::ModelConfidence).unwrap();
        assert_eq!(json, "\"model_confidence\"");
    }
}
