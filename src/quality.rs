use crate::models::TextMetrics;

pub const READABILITY_WEIGHT: f64 = 0.3;
pub const SEO_WEIGHT: f64 = 0.4;
pub const ENGAGEMENT_WEIGHT: f64 = 0.3;

const ENGAGEMENT_BASE: u32 = 50;
pub const OPTIMAL_WORD_RANGE: (usize, usize) = (800, 2000);
pub const ACCEPTABLE_WORD_RANGE: (usize, usize) = (300, 800);

/// Heuristic engagement score: starts at a neutral base and rewards the
/// structural elements that keep readers on the page.
pub fn engagement_score(metrics: &TextMetrics) -> u8 {
    let mut score = ENGAGEMENT_BASE;

    if metrics.question_count > 0 {
        score += 10;
    }
    if metrics.list_count > 0 {
        score += 10;
    }
    if metrics.image_count > 0 {
        score += 10;
    }
    if metrics.blockquote_count > 0 {
        score += 5;
    }
    if metrics.table_count > 0 {
        score += 5;
    }

    let words = metrics.word_count;
    if words >= OPTIMAL_WORD_RANGE.0 && words <= OPTIMAL_WORD_RANGE.1 {
        score += 10;
    } else if words >= ACCEPTABLE_WORD_RANGE.0 && words < ACCEPTABLE_WORD_RANGE.1 {
        score += 5;
    }

    if metrics.internal_link_count > 0 {
        score += 5;
    }

    score.min(100) as u8
}

/// Weighted 30/40/30 combination of the three sub-scores, rounded.
pub fn overall_score(readability: u8, seo: u8, engagement: u8) -> u8 {
    let overall = readability as f64 * READABILITY_WEIGHT
        + seo as f64 * SEO_WEIGHT
        + engagement as f64 * ENGAGEMENT_WEIGHT;
    overall.round().clamp(0.0, 100.0) as u8
}
