//! The assessment orchestrator.

pub mod orchestrator;
pub mod stage;

pub use orchestrator::ConfidenceEngine;
pub use stage::AssessmentStage;
