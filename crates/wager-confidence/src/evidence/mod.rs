//! Evidence: collaborator input shapes, the uniform `EvidenceSource`
//! record, and the normalizers that turn one into the other.

pub mod inputs;
pub mod normalizers;
pub mod sink;
pub mod types;

pub use inputs::{
    AssessmentInput, GameContext, ModelConfidence, PricePoint, RetrievalResult, SeasonType,
};
pub use normalizers::{
    EvidenceNormalizer, ModelConfidenceNormalizer, NormalizerSet, PriceMovementNormalizer,
    RetrievalQualityNormalizer, TextPatternNormalizer,
};
pub use sink::EvidenceSink;
pub use types::{EvidenceKind, EvidenceSource};
