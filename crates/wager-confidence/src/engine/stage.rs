//! Linear pipeline stages of one assessment.

use std::fmt;

/// `Collecting → Normalizing → Updating → Adjusting → Deciding → Done`.
/// No branches, loops, or retries; nothing persists between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentStage {
    Collecting,
    Normalizing,
    Updating,
    Adjusting,
    Deciding,
    Done,
}

impl AssessmentStage {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Collecting => Some(Self::Normalizing),
            Self::Normalizing => Some(Self::Updating),
            Self::Updating => Some(Self::Adjusting),
            Self::Adjusting => Some(Self::Deciding),
            Self::Deciding => Some(Self::Done),
            Self::Done => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Normalizing => "normalizing",
            Self::Updating => "updating",
            Self::Adjusting => "adjusting",
            Self::Deciding => "deciding",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for AssessmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
