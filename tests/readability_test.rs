use scorely::metrics;
use scorely::models::TextMetrics;
use scorely::readability::{
    ReadabilityPolicy, ReadabilityVerdict, assess, readability_score,
};

fn metrics_with(words: usize, sentences: usize, syllables: usize) -> TextMetrics {
    TextMetrics {
        word_count: words,
        sentence_count: sentences,
        syllable_estimate: syllables,
        ..TextMetrics::default()
    }
}

#[test]
fn test_zero_words_scores_zero() {
    assert_eq!(readability_score(&metrics_with(0, 0, 0)), 0);
    assert_eq!(readability_score(&metrics_with(0, 3, 0)), 0);
    assert_eq!(readability_score(&metrics_with(10, 0, 12)), 0);
}

#[test]
fn test_formula_value() {
    // 206.835 - 1.015 * (100/5) - 84.6 * (150/100) = 59.635 -> 60
    assert_eq!(readability_score(&metrics_with(100, 5, 150)), 60);
}

#[test]
fn test_score_is_clamped() {
    // Very long sentences with heavy words push the raw formula below zero
    assert_eq!(readability_score(&metrics_with(200, 1, 800)), 0);
    // One short, light word per sentence pushes it above one hundred
    assert_eq!(readability_score(&metrics_with(2, 2, 2)), 100);
}

#[test]
fn test_score_from_real_text() {
    let metrics = metrics::extract("Ev güzel. Ev büyük.", None);
    // 206.835 - 1.015 * 2 - 84.6 * 1.5 = 77.905 -> 78
    assert_eq!(readability_score(&metrics), 78);
}

#[test]
fn test_hard_to_read_band_is_shared() {
    assert_eq!(
        assess(20, ReadabilityPolicy::Balanced),
        ReadabilityVerdict::HardToRead
    );
    assert_eq!(
        assess(20, ReadabilityPolicy::Technical),
        ReadabilityVerdict::HardToRead
    );
}

#[test]
fn test_policies_disagree_above_easy_threshold() {
    assert_eq!(
        assess(85, ReadabilityPolicy::Balanced),
        ReadabilityVerdict::Good
    );
    assert_eq!(
        assess(85, ReadabilityPolicy::Technical),
        ReadabilityVerdict::TooSimple
    );
}

#[test]
fn test_mid_band_is_good_for_both() {
    for policy in [ReadabilityPolicy::Balanced, ReadabilityPolicy::Technical] {
        assert_eq!(assess(50, policy), ReadabilityVerdict::Good);
        assert_eq!(assess(70, policy), ReadabilityVerdict::Good);
    }
}
