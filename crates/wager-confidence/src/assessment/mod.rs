//! Assessment output: the immutable `ConfidenceAssessment`, its summary
//! view, and batch diagnostics.

pub mod diagnostics;
pub mod summary;
pub mod types;

pub use diagnostics::BatchDiagnostics;
pub use summary::{AssessmentReport, AssessmentSummary, EvidenceSummary, UpdateSummary};
pub use types::{meta_keys, ConfidenceAssessment, Recommendation};
