use scorely::metrics;
use scorely::models::{ContentInput, ScoreBand};
use scorely::seo::{self, seo_score};

fn input(
    title: &str,
    content: &str,
    excerpt: Option<&str>,
    meta: Option<&str>,
    keywords: &[&str],
) -> ContentInput {
    ContentInput {
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.map(String::from),
        meta_description: meta.map(String::from),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn score(input: &ContentInput) -> scorely::models::ScoreResult {
    let metrics = metrics::extract(&input.content, None);
    seo_score(input, &metrics)
}

fn factor_points(result: &scorely::models::ScoreResult, name: &str) -> u8 {
    result
        .factors
        .iter()
        .find(|f| f.factor == name)
        .map(|f| f.points)
        .unwrap_or_else(|| panic!("missing factor {}", name))
}

#[test]
fn test_title_of_45_chars_earns_maximum() {
    let doc = input(&"a".repeat(45), "", None, None, &[]);
    assert_eq!(factor_points(&score(&doc), "title"), 20);
}

#[test]
fn test_title_length_buckets() {
    assert_eq!(seo::TITLE.points_for(30), 20);
    assert_eq!(seo::TITLE.points_for(60), 20);
    assert_eq!(seo::TITLE.points_for(25), 15);
    assert_eq!(seo::TITLE.points_for(70), 15);
    assert_eq!(seo::TITLE.points_for(10), 5);
    assert_eq!(seo::TITLE.points_for(200), 5);
    assert_eq!(seo::TITLE.points_for(0), 0);
}

#[test]
fn test_meta_description_of_140_chars_earns_maximum() {
    let doc = input("", "", None, Some(&"m".repeat(140)), &[]);
    assert_eq!(factor_points(&score(&doc), "meta_description"), 20);
}

#[test]
fn test_meta_description_buckets() {
    assert_eq!(seo::META_DESCRIPTION.points_for(120), 20);
    assert_eq!(seo::META_DESCRIPTION.points_for(160), 20);
    assert_eq!(seo::META_DESCRIPTION.points_for(100), 15);
    assert_eq!(seo::META_DESCRIPTION.points_for(180), 15);
    assert_eq!(seo::META_DESCRIPTION.points_for(50), 10);
    assert_eq!(seo::META_DESCRIPTION.points_for(0), 0);
}

#[test]
fn test_keyword_buckets() {
    assert_eq!(seo::KEYWORDS.points_for(5), 10);
    assert_eq!(seo::KEYWORDS.points_for(1), 5);
    assert_eq!(seo::KEYWORDS.points_for(0), 0);
}

#[test]
fn test_excerpt_buckets() {
    assert_eq!(seo::EXCERPT.points_for(150), 10);
    assert_eq!(seo::EXCERPT.points_for(200), 10);
    assert_eq!(seo::EXCERPT.points_for(100), 5);
    assert_eq!(seo::EXCERPT.points_for(0), 0);
}

#[test]
fn test_title_length_counts_chars_not_bytes() {
    // 45 Turkish characters, far more than 45 bytes
    let doc = input(&"ü".repeat(45), "", None, None, &[]);
    assert_eq!(factor_points(&score(&doc), "title"), 20);
}

#[test]
fn test_fully_optimized_document_scores_100() {
    let body = format!(
        "<h2>Bölüm bir</h2><h2>Bölüm iki</h2><h2>Bölüm üç</h2>\
         <a href=\"/bir\">bağlantı</a><a href=\"/iki\">bağlantı</a><a href=\"/üç\">bağlantı</a>\
         <p>{}</p>",
        "kelime ".repeat(900)
    );
    let doc = input(
        &"a".repeat(45),
        &body,
        Some(&"e".repeat(175)),
        Some(&"m".repeat(140)),
        &["konut", "emlak", "piyasa", "faiz", "kredi"],
    );

    let result = score(&doc);
    assert_eq!(result.value, 100);
    assert_eq!(result.band, ScoreBand::High);
    for factor in &result.factors {
        assert_eq!(factor.points, factor.max_points, "factor {}", factor.factor);
    }
}

#[test]
fn test_empty_document_gets_only_the_length_floor() {
    let result = score(&ContentInput::default());
    // Every bucket is zero except the content-length floor of 5
    assert_eq!(result.value, 5);
    assert_eq!(result.band, ScoreBand::Low);
}

#[test]
fn test_score_never_exceeds_100() {
    // A document maxing every bucket still caps at 100
    let body = format!(
        "{}{}<p>{}</p>",
        "<h2>Başlık</h2>".repeat(10),
        "<a href=\"/a\">bağlantı</a>".repeat(10),
        "kelime ".repeat(3000)
    );
    let doc = input(
        &"a".repeat(45),
        &body,
        Some(&"e".repeat(175)),
        Some(&"m".repeat(140)),
        &["a", "b", "c", "d", "e", "f", "g"],
    );
    assert!(score(&doc).value <= 100);
}

#[test]
fn test_factor_order_is_stable() {
    let result = score(&ContentInput::default());
    let names: Vec<&str> = result.factors.iter().map(|f| f.factor.as_str()).collect();
    assert_eq!(
        names,
        [
            "title",
            "meta_description",
            "content_length",
            "keywords",
            "excerpt",
            "headings",
            "links"
        ]
    );
}
