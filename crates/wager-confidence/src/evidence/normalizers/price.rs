//! Price-movement normalizer: market price history → evidence.
//!
//! Steady movement in one direction pushes confidence above neutral;
//! choppy movement is discounted by its own spread.

use statrs::statistics::Statistics;

use crate::evidence::inputs::PricePoint;
use crate::evidence::sink::EvidenceSink;
use crate::evidence::types::{EvidenceKind, EvidenceSource};

use super::EvidenceNormalizer;

const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Too little history to say anything: neutral, low weight.
const SHORT_HISTORY_RELIABILITY: f64 = 0.5;
const SHORT_HISTORY_WEIGHT: f64 = 0.3;

const MOVEMENT_WEIGHT: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct PriceMovementNormalizer {
    base_reliability: f64,
    sensitivity: f64,
}

impl PriceMovementNormalizer {
    pub fn new(base_reliability: f64, sensitivity: f64) -> Self {
        Self {
            base_reliability,
            sensitivity,
        }
    }

    /// Movement strength: `mean(|m|) * (1 - stdev(m))` over the relative
    /// step movements. Population standard deviation.
    pub fn movement_strength(movements: &[f64]) -> f64 {
        if movements.is_empty() {
            return 0.0;
        }
        let mean_abs = movements.iter().map(|m| m.abs()).mean();
        let spread = if movements.len() > 1 {
            movements.iter().population_std_dev()
        } else {
            0.0
        };
        let strength = mean_abs * (1.0 - spread);
        if strength.is_finite() {
            strength
        } else {
            0.0
        }
    }
}

impl EvidenceNormalizer for PriceMovementNormalizer {
    type Input = [PricePoint];

    fn normalize(&self, history: &[PricePoint], sink: &mut EvidenceSink) {
        let mut prices = Vec::with_capacity(history.len());
        for (i, point) in history.iter().enumerate() {
            if point.price.is_finite() && point.price > 0.0 {
                prices.push(point.price);
            } else {
                sink.warn(format!(
                    "price_history[{i}].price={} is not a positive finite price; dropped",
                    point.price
                ));
            }
        }

        if prices.len() < 2 {
            sink.push(
                EvidenceSource::new(
                    EvidenceKind::PriceMovement,
                    NEUTRAL_CONFIDENCE,
                    SHORT_HISTORY_RELIABILITY,
                )
                .with_weight(SHORT_HISTORY_WEIGHT)
                .with_metadata("observations", prices.len()),
            );
            return;
        }

        let movements: Vec<f64> = prices.windows(2).map(|w| (w[1] - w[0]) / w[0]).collect();
        let strength = Self::movement_strength(&movements);
        let confidence = (NEUTRAL_CONFIDENCE + strength * self.sensitivity).clamp(0.0, 1.0);

        sink.push(
            EvidenceSource::new(EvidenceKind::PriceMovement, confidence, self.base_reliability)
                .with_weight(MOVEMENT_WEIGHT)
                .with_metadata("observations", prices.len())
                .with_metadata("strength", strength),
        );
    }
}
