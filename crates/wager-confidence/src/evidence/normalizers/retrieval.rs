//! Retrieval-quality normalizer: ranked relevance scores → evidence.

use std::collections::BTreeSet;

use crate::evidence::inputs::RetrievalResult;
use crate::evidence::sink::EvidenceSink;
use crate::evidence::types::{EvidenceKind, EvidenceSource};

use super::EvidenceNormalizer;

/// Blend weights for mean, max, and strong-hit coverage.
const MEAN_WEIGHT: f64 = 0.6;
const MAX_WEIGHT: f64 = 0.3;
const COVERAGE_WEIGHT: f64 = 0.1;

/// Strong hits / distinct sources at which coverage saturates.
const SATURATION_COUNT: f64 = 3.0;

/// Empty retrieval: absence of support is informative but not damning.
const EMPTY_CONFIDENCE: f64 = 0.3;
const EMPTY_RELIABILITY: f64 = 0.5;
const EMPTY_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct RetrievalQualityNormalizer {
    base_reliability: f64,
    relevance_cutoff: f64,
}

impl RetrievalQualityNormalizer {
    pub fn new(base_reliability: f64, relevance_cutoff: f64) -> Self {
        Self {
            base_reliability,
            relevance_cutoff,
        }
    }
}

impl EvidenceNormalizer for RetrievalQualityNormalizer {
    type Input = [RetrievalResult];

    fn normalize(&self, results: &[RetrievalResult], sink: &mut EvidenceSink) {
        if results.is_empty() {
            sink.push(
                EvidenceSource::new(
                    EvidenceKind::RetrievalQuality,
                    EMPTY_CONFIDENCE,
                    EMPTY_RELIABILITY,
                )
                .with_weight(EMPTY_WEIGHT)
                .with_metadata("result_count", 0),
            );
            return;
        }

        let scores: Vec<f64> = results
            .iter()
            .enumerate()
            .map(|(i, r)| sink.unit(&format!("retrieval_results[{i}].score"), r.score))
            .collect();

        let count = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / count;
        let max = scores.iter().copied().fold(0.0_f64, f64::max);
        let strong = scores.iter().filter(|&&s| s > self.relevance_cutoff).count();
        let coverage = (strong as f64 / SATURATION_COUNT).min(1.0);
        let quality = MEAN_WEIGHT * mean + MAX_WEIGHT * max + COVERAGE_WEIGHT * coverage;

        let distinct: BTreeSet<&str> = results.iter().map(|r| r.source_tag.as_str()).collect();
        let diversity = (distinct.len() as f64 / SATURATION_COUNT).min(1.0);

        sink.push(
            EvidenceSource::new(
                EvidenceKind::RetrievalQuality,
                quality.clamp(0.0, 1.0),
                self.base_reliability * diversity,
            )
            .with_metadata("result_count", results.len())
            .with_metadata("strong_hits", strong)
            .with_metadata("distinct_sources", distinct.len()),
        );
    }
}
