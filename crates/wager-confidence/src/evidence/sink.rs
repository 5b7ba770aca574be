//! Collector for normalized evidence and the non-fatal warnings raised
//! while producing it.

use super::types::EvidenceSource;

/// Accumulates evidence sources plus sanitization warnings.
///
/// Warnings never stop an assessment; they end up in
/// `ConfidenceAssessment::metadata["warnings"]`.
#[derive(Debug, Default, Clone)]
pub struct EvidenceSink {
    sources: Vec<EvidenceSource>,
    warnings: Vec<String>,
}

impl EvidenceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, source: EvidenceSource) {
        self.sources.push(source);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "evidence input sanitized");
        self.warnings.push(message);
    }

    /// Clamp `value` into [0, 1], warning when it was NaN or out of range.
    /// NaN maps to 0.0.
    pub fn unit(&mut self, field: &str, value: f64) -> f64 {
        if value.is_nan() {
            self.warn(format!("{field} was NaN; treated as 0.0"));
            0.0
        } else if !(0.0..=1.0).contains(&value) {
            let clamped = value.clamp(0.0, 1.0);
            self.warn(format!("{field}={value} outside [0, 1]; clamped to {clamped}"));
            clamped
        } else {
            value
        }
    }

    /// Non-negative weight, warning on NaN or negative values.
    pub fn weight(&mut self, field: &str, value: f64) -> f64 {
        if value.is_nan() {
            self.warn(format!("{field} was NaN; treated as 0.0"));
            0.0
        } else if value < 0.0 {
            self.warn(format!("{field}={value} is negative; clamped to 0.0"));
            0.0
        } else {
            value
        }
    }

    /// Sanitize a caller-built source in place.
    pub fn push_sanitized(&mut self, mut source: EvidenceSource) {
        let label = source.name.clone();
        source.confidence = self.unit(&format!("{label}.confidence"), source.confidence);
        source.reliability = self.unit(&format!("{label}.reliability"), source.reliability);
        source.weight = self.weight(&format!("{label}.weight"), source.weight);
        self.push(source);
    }

    pub fn sources(&self) -> &[EvidenceSource] {
        &self.sources
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Vec<EvidenceSource>, Vec<String>) {
        (self.sources, self.warnings)
    }
}
