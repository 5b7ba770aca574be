//! Text-pattern normalizer: free-text rationale → keyword-family evidence.
//!
//! Three disjoint keyword families are scanned in a single overlapping
//! Aho-Corasick pass. Among word-bounded matches the leftmost-longest
//! non-overlapping set is counted. Each family with at least one hit emits
//! one source; a family with no hits emits nothing.

use std::sync::LazyLock;

use std::cmp::Reverse;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::evidence::sink::EvidenceSink;
use crate::evidence::types::{EvidenceKind, EvidenceSource};

use super::EvidenceNormalizer;

/// Hits beyond this count do not move confidence further.
const MAX_COUNTED_HITS: usize = 3;

/// Scoring constants for one keyword family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordFamily {
    pub kind: EvidenceKind,
    /// Confidence before any hits are counted.
    pub base_confidence: f64,
    /// Signed confidence change per hit; negative for contrarian families.
    pub per_hit: f64,
    pub reliability: f64,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

impl KeywordFamily {
    /// Confidence for `hits` matches, monotone in `hits` and capped.
    pub fn confidence(&self, hits: usize) -> f64 {
        let counted = hits.min(MAX_COUNTED_HITS) as f64;
        (self.base_confidence + self.per_hit * counted).clamp(0.0, 1.0)
    }
}

pub const SHARP_FAMILY: KeywordFamily = KeywordFamily {
    kind: EvidenceKind::SharpSignal,
    base_confidence: 0.65,
    per_hit: 0.10,
    reliability: 0.80,
    weight: 0.70,
    keywords: &[
        "sharp",
        "sharps",
        "sharp money",
        "professional",
        "professionals",
        "pro money",
        "smart money",
        "wiseguy",
        "wiseguys",
        "syndicate",
        "steam",
        "steam move",
        "moved the number",
        "reverse line movement",
        "line movement",
    ],
};

pub const PUBLIC_FAMILY: KeywordFamily = KeywordFamily {
    kind: EvidenceKind::PublicSignal,
    base_confidence: 0.45,
    per_hit: -0.05,
    reliability: 0.60,
    weight: 0.50,
    keywords: &[
        "public",
        "public money",
        "recreational",
        "square",
        "squares",
        "casual bettors",
        "heavily on",
        "popular pick",
        "everyone is on",
        "trendy",
        "hype",
    ],
};

pub const INJURY_FAMILY: KeywordFamily = KeywordFamily {
    kind: EvidenceKind::InjurySignal,
    base_confidence: 0.50,
    per_hit: 0.05,
    reliability: 0.65,
    weight: 0.50,
    keywords: &[
        "injury",
        "injuries",
        "injured",
        "questionable",
        "doubtful",
        "ruled out",
        "out for",
        "day-to-day",
        "sidelined",
        "load management",
        "resting",
    ],
};

pub const FAMILIES: [KeywordFamily; 3] = [SHARP_FAMILY, PUBLIC_FAMILY, INJURY_FAMILY];

/// Single automaton over every family's keywords. Pattern ids map back to
/// families through `PATTERN_FAMILY`.
static MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    let patterns: Vec<&str> = FAMILIES.iter().flat_map(|f| f.keywords.iter().copied()).collect();
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::Standard)
        .build(patterns)
        .expect("static keyword set compiles")
});

static PATTERN_FAMILY: LazyLock<Vec<usize>> = LazyLock::new(|| {
    FAMILIES
        .iter()
        .enumerate()
        .flat_map(|(idx, f)| std::iter::repeat(idx).take(f.keywords.len()))
        .collect()
});

#[derive(Debug, Clone, Default)]
pub struct TextPatternNormalizer;

impl TextPatternNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Count word-bounded hits per family, in `FAMILIES` order.
    ///
    /// Boundaries are checked before choosing between overlapping keywords,
    /// so "public moneyline" still counts "public" even though the longer
    /// "public money" is not word-bounded there.
    pub fn count_hits(text: &str) -> [usize; 3] {
        let bytes = text.as_bytes();
        let mut bounded: Vec<(usize, usize, usize)> = MATCHER
            .find_overlapping_iter(text)
            .filter(|m| is_word_bounded(bytes, m.start(), m.end()))
            .map(|m| (m.start(), m.end(), PATTERN_FAMILY[m.pattern().as_usize()]))
            .collect();
        bounded.sort_by_key(|&(start, end, _)| (start, Reverse(end)));

        let mut counts = [0usize; 3];
        let mut covered_until = 0;
        for (start, end, family) in bounded {
            if start < covered_until {
                continue;
            }
            counts[family] += 1;
            covered_until = end;
        }
        counts
    }
}

impl EvidenceNormalizer for TextPatternNormalizer {
    type Input = str;

    fn normalize(&self, text: &str, sink: &mut EvidenceSink) {
        let counts = Self::count_hits(text);
        for (family, hits) in FAMILIES.iter().zip(counts) {
            if hits == 0 {
                continue;
            }
            sink.push(
                EvidenceSource::new(family.kind, family.confidence(hits), family.reliability)
                    .with_weight(family.weight)
                    .with_metadata("hits", hits),
            );
        }
    }
}

fn is_word_bounded(bytes: &[u8], start: usize, end: usize) -> bool {
    let before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before && after
}
