//! Raw collaborator outputs accepted by the engine.
//!
//! These are the deserialization boundary: a payload that does not fit
//! these shapes is rejected before scoring. Values that fit the shape but
//! fall out of range are accepted and sanitized later.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Output of the text-confidence classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfidence {
    pub predicted_label: String,
    pub max_score: f64,
    pub certainty: f64,
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
}

impl ModelConfidence {
    pub fn new(predicted_label: impl Into<String>, max_score: f64, certainty: f64) -> Self {
        Self {
            predicted_label: predicted_label.into(),
            max_score,
            certainty,
            probabilities: BTreeMap::new(),
        }
    }
}

/// One ranked hit from the retrieval service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub score: f64,
    pub source_tag: String,
}

impl RetrievalResult {
    pub fn new(score: f64, source_tag: impl Into<String>) -> Self {
        Self {
            score,
            source_tag: source_tag.into(),
        }
    }
}

/// One market price observation. The feed supplies these in
/// chronological order; the timestamp is carried, not parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub price: f64,
    pub timestamp: String,
}

impl PricePoint {
    pub fn new(price: f64, timestamp: impl Into<String>) -> Self {
        Self {
            price,
            timestamp: timestamp.into(),
        }
    }
}

/// Season phase of the game being bet on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SeasonType {
    #[default]
    Regular,
    Playoffs,
    Preseason,
    /// Any other phase (e.g. "all_star"). Carries no adjustment.
    Other(String),
}

impl SeasonType {
    pub fn name(&self) -> &str {
        match self {
            Self::Regular => "regular",
            Self::Playoffs => "playoffs",
            Self::Preseason => "preseason",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for SeasonType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" | "regular_season" => Self::Regular,
            "playoffs" | "playoff" | "postseason" => Self::Playoffs,
            "preseason" => Self::Preseason,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SeasonType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<SeasonType> for String {
    fn from(s: SeasonType) -> Self {
        s.name().to_string()
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Categorical game context used by the volatility and threshold stages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameContext {
    pub season_type: SeasonType,
    pub back_to_back: bool,
    /// e.g. nationally televised.
    pub high_visibility: bool,
}

impl GameContext {
    pub fn season(season_type: impl Into<SeasonType>) -> Self {
        Self {
            season_type: season_type.into(),
            ..Self::default()
        }
    }
}

/// Everything one `assess()` call consumes. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssessmentInput {
    pub model_confidence: Option<ModelConfidence>,
    pub retrieval_results: Option<Vec<RetrievalResult>>,
    pub price_history: Option<Vec<PricePoint>>,
    pub rationale_text: Option<String>,
    pub game_context: Option<GameContext>,
}

impl AssessmentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model_confidence(mut self, model: ModelConfidence) -> Self {
        self.model_confidence = Some(model);
        self
    }

    pub fn with_retrieval_results(mut self, results: Vec<RetrievalResult>) -> Self {
        self.retrieval_results = Some(results);
        self
    }

    pub fn with_price_history(mut self, history: Vec<PricePoint>) -> Self {
        self.price_history = Some(history);
        self
    }

    pub fn with_rationale(mut self, text: impl Into<String>) -> Self {
        self.rationale_text = Some(text.into());
        self
    }

    pub fn with_game_context(mut self, context: GameContext) -> Self {
        self.game_context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_type_parses_case_insensitively() {
        assert_eq!(SeasonType::from("Playoffs"), SeasonType::Playoffs);
        assert_eq!(SeasonType::from(" PRESEASON "), SeasonType::Preseason);
        assert_eq!(SeasonType::from("regular"), SeasonType::Regular);
        assert_eq!(
            SeasonType::from("all_star"),
            SeasonType::Other("all_star".to_string())
        );
    }

    #[test]
    fn test_season_type_serializes_as_string() {
        let json = serde_json::to_string(&GameContext::season("playoffs")).unwrap();
        assert!(json.contains("\"season_type\":\"playoffs\""), "{json}");
    }

    #[test]
    fn test_empty_payload_deserializes_to_empty_input() {
        let input: AssessmentInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, AssessmentInput::default());
    }

    #[test]
    fn test_model_confidence_probabilities_optional() {
        let model: ModelConfidence = serde_json::from_str(
            r#"{"predicted_label": "win", "max_score": 0.8, "certainty": 0.7}"#,
        )
        .unwrap();
        assert!(model.probabilities.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let err = serde_json::from_str::<AssessmentInput>(r#"{"retrieval_results": 3}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<AssessmentInput>(r#"{"odds_feed": []}"#);
        assert!(err.is_err(), "unknown top-level fields are a contract violation");
    }
}
