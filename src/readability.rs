use crate::models::TextMetrics;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How to interpret very high readability scores. The two policies agree
/// that below [`HARD_TO_READ_THRESHOLD`] the text is too hard; they
/// disagree about whether scoring above [`EASY_THRESHOLD`] is a virtue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityPolicy {
    /// High readability is good: plain language is the goal.
    #[default]
    Balanced,
    /// High readability means the text is too simple for an expert
    /// audience and could use denser vocabulary.
    Technical,
}

pub const HARD_TO_READ_THRESHOLD: u8 = 30;
pub const EASY_THRESHOLD: u8 = 70;

/// Flesch-style reading ease over the Turkish syllable heuristic, clamped
/// to [0,100] and rounded. Returns 0 when the document has no words or no
/// sentences so no caller ever divides by zero.
pub fn readability_score(metrics: &TextMetrics) -> u8 {
    if metrics.word_count == 0 || metrics.sentence_count == 0 {
        return 0;
    }

    let words = metrics.word_count as f64;
    let sentences = metrics.sentence_count as f64;
    let syllables = metrics.syllable_estimate as f64;

    let score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words);
    score.clamp(0.0, 100.0).round() as u8
}

/// Reading of a score under a policy, for the suggestion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityVerdict {
    HardToRead,
    Good,
    TooSimple,
}

pub fn assess(score: u8, policy: ReadabilityPolicy) -> ReadabilityVerdict {
    if score < HARD_TO_READ_THRESHOLD {
        ReadabilityVerdict::HardToRead
    } else if score > EASY_THRESHOLD && policy == ReadabilityPolicy::Technical {
        ReadabilityVerdict::TooSimple
    } else {
        ReadabilityVerdict::Good
    }
}
