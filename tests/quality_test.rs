use scorely::metrics;
use scorely::models::TextMetrics;
use scorely::quality::{engagement_score, overall_score};

#[test]
fn test_overall_weighting() {
    // 80 * 0.3 + 90 * 0.4 + 70 * 0.3 = 24 + 36 + 21 = 81
    assert_eq!(overall_score(80, 90, 70), 81);
}

#[test]
fn test_overall_bounds() {
    assert_eq!(overall_score(0, 0, 0), 0);
    assert_eq!(overall_score(100, 100, 100), 100);
}

#[test]
fn test_engagement_base_for_bare_text() {
    // No structure, no questions, word count below every band
    assert_eq!(engagement_score(&TextMetrics::default()), 50);
}

#[test]
fn test_engagement_rewards_structure() {
    let metrics = TextMetrics {
        question_count: 2,
        list_count: 1,
        image_count: 1,
        ..TextMetrics::default()
    };
    // 50 + 10 + 10 + 10
    assert_eq!(engagement_score(&metrics), 80);
}

#[test]
fn test_engagement_word_count_bands() {
    let mid = TextMetrics {
        word_count: 500,
        ..TextMetrics::default()
    };
    assert_eq!(engagement_score(&mid), 55);

    let optimal = TextMetrics {
        word_count: 1200,
        ..TextMetrics::default()
    };
    assert_eq!(engagement_score(&optimal), 60);

    let too_long = TextMetrics {
        word_count: 5000,
        ..TextMetrics::default()
    };
    assert_eq!(engagement_score(&too_long), 50);
}

#[test]
fn test_engagement_caps_at_100() {
    let metrics = TextMetrics {
        word_count: 1000,
        question_count: 3,
        list_count: 2,
        image_count: 4,
        blockquote_count: 1,
        table_count: 1,
        internal_link_count: 5,
        ..TextMetrics::default()
    };
    // 50 + 10 + 10 + 10 + 5 + 5 + 10 + 5 = 105, capped
    assert_eq!(engagement_score(&metrics), 100);
}

#[test]
fn test_engagement_from_real_content() {
    let content = r#"
        <p>Konut almak mantıklı mı?</p>
        <ul><li>Faiz</li><li>Kredi</li></ul>
        <img src="/grafik.png">
        <a href="/rehber">rehber</a>
    "#;
    let metrics = metrics::extract(content, None);
    // base 50 + question 10 + list 10 + image 10 + internal link 5
    assert_eq!(engagement_score(&metrics), 85);
}
