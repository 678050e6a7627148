use crate::metrics;
use crate::models::{ContentInput, ScoreBand, ScoreFactor, ScoreResult, TextMetrics};

/// Inclusive value range worth a fixed number of points. Buckets are
/// checked in order and the first match wins, so narrower (better) ranges
/// come first.
#[derive(Debug, Clone, Copy)]
pub struct Bucket {
    pub min: usize,
    pub max: usize,
    pub points: u8,
}

const fn bucket(min: usize, max: usize, points: u8) -> Bucket {
    Bucket { min, max, points }
}

/// One scored aspect of a document: a name, the best score it can
/// contribute, and the bucket table mapping measured values to points.
#[derive(Debug, Clone, Copy)]
pub struct FactorSpec {
    pub name: &'static str,
    pub max_points: u8,
    pub buckets: &'static [Bucket],
}

// The single source of truth for the SEO score. These thresholds drive
// every score badge, so changing them is a behavioral change, not a
// refactor.
pub const TITLE: FactorSpec = FactorSpec {
    name: "title",
    max_points: 20,
    buckets: &[
        bucket(30, 60, 20),
        bucket(25, 70, 15),
        bucket(1, usize::MAX, 5),
    ],
};

pub const META_DESCRIPTION: FactorSpec = FactorSpec {
    name: "meta_description",
    max_points: 20,
    buckets: &[
        bucket(120, 160, 20),
        bucket(100, 180, 15),
        bucket(1, usize::MAX, 10),
    ],
};

pub const CONTENT_LENGTH: FactorSpec = FactorSpec {
    name: "content_length",
    max_points: 20,
    buckets: &[
        bucket(800, usize::MAX, 20),
        bucket(500, usize::MAX, 15),
        bucket(300, usize::MAX, 10),
        bucket(0, usize::MAX, 5),
    ],
};

pub const KEYWORDS: FactorSpec = FactorSpec {
    name: "keywords",
    max_points: 10,
    buckets: &[bucket(5, usize::MAX, 10), bucket(1, usize::MAX, 5)],
};

pub const EXCERPT: FactorSpec = FactorSpec {
    name: "excerpt",
    max_points: 10,
    buckets: &[bucket(150, 200, 10), bucket(1, usize::MAX, 5)],
};

pub const HEADINGS: FactorSpec = FactorSpec {
    name: "headings",
    max_points: 10,
    buckets: &[bucket(3, usize::MAX, 10), bucket(2, usize::MAX, 5)],
};

pub const LINKS: FactorSpec = FactorSpec {
    name: "links",
    max_points: 10,
    buckets: &[bucket(3, usize::MAX, 10), bucket(1, usize::MAX, 5)],
};

impl FactorSpec {
    /// Points for a measured value: first matching bucket, 0 if none match.
    pub fn points_for(&self, value: usize) -> u8 {
        self.buckets
            .iter()
            .find(|b| value >= b.min && value <= b.max)
            .map(|b| b.points)
            .unwrap_or(0)
    }

    fn score(&self, value: usize) -> ScoreFactor {
        ScoreFactor {
            factor: self.name.to_string(),
            points: self.points_for(value),
            max_points: self.max_points,
        }
    }
}

// Lengths are char counts; the content is Turkish-oriented and byte
// lengths would penalize every dotted letter.
fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Additive SEO score over the bucket table, capped at 100, with the
/// per-factor breakdown in evaluation order.
pub fn seo_score(input: &ContentInput, metrics: &TextMetrics) -> ScoreResult {
    let excerpt_len = input.excerpt.as_deref().map(char_len).unwrap_or(0);
    let meta_len = input.meta_description.as_deref().map(char_len).unwrap_or(0);

    let factors = vec![
        TITLE.score(char_len(&input.title)),
        META_DESCRIPTION.score(meta_len),
        CONTENT_LENGTH.score(metrics.word_count),
        KEYWORDS.score(input.keywords.len()),
        EXCERPT.score(excerpt_len),
        HEADINGS.score(metrics.structural_heading_count()),
        LINKS.score(metrics.link_count()),
    ];

    let total: u32 = factors.iter().map(|f| f.points as u32).sum();
    let value = total.min(100) as u8;

    ScoreResult {
        value,
        band: ScoreBand::from_score(value),
        factors,
    }
}

/// Convenience for callers that only have raw content: extracts metrics
/// and scores in one call.
pub fn score_content(input: &ContentInput) -> ScoreResult {
    let metrics = metrics::extract(&input.content, None);
    seo_score(input, &metrics)
}
