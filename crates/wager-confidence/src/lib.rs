//! Bayesian evidence fusion for bet confidence.
//!
//! Heterogeneous evidence (classifier output, retrieval hits, market price
//! history, rationale text) is normalized into uniform `EvidenceSource`
//! records, fused by sequential Bayesian updating, shifted by game-context
//! volatility, and compared against a dynamic threshold to produce a
//! PROCEED / FLAG decision.
//!
//! ```no_run
//! use wager_confidence::{AssessmentInput, ConfidenceEngine, ModelConfidence};
//!
//! let engine = ConfidenceEngine::with_defaults();
//! let input = AssessmentInput::new()
//!     .with_model_confidence(ModelConfidence::new("cover", 0.92, 0.88))
//!     .with_rationale("sharp money moved the number");
//! let assessment = engine.assess(&input);
//! println!("{} at {:.3}", assessment.recommendation(), assessment.final_confidence());
//! ```

pub mod adjust;
pub mod assessment;
pub mod bayes;
pub mod engine;
pub mod evidence;

pub use adjust::{ThresholdCalculator, VolatilityAdjuster};
pub use assessment::{
    AssessmentReport, AssessmentSummary, BatchDiagnostics, ConfidenceAssessment, Recommendation,
};
pub use bayes::{BayesianUpdate, LikelihoodModel, SequentialUpdater};
pub use engine::{AssessmentStage, ConfidenceEngine};
pub use evidence::{
    AssessmentInput, EvidenceKind, EvidenceSource, GameContext, ModelConfidence, PricePoint,
    RetrievalResult, SeasonType,
};
