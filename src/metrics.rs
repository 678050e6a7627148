use crate::models::TextMetrics;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use url::Url;

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static HEADING_SELECTORS: Lazy<Vec<(u8, Selector)>> = Lazy::new(|| {
    (1u8..=6)
        .map(|level| {
            let selector = Selector::parse(&format!("h{}", level))
                .expect("heading selector should be valid");
            (level, selector)
        })
        .collect()
});
static LIST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("ul, ol").expect("list selector should be valid"));
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("link selector should be valid"));
static BLOCKQUOTE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("blockquote").expect("blockquote selector should be valid"));
static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("table selector should be valid"));

const TURKISH_VOWELS: [char; 8] = ['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü'];

/// Removes markup and returns the readable text. Plain text passes through
/// unchanged apart from whitespace normalization. Every scorer strips
/// through this one function so their views of the content never diverge.
pub fn strip_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(content);
    let text: Vec<&str> = fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    text.join(" ")
}

/// Counts non-empty whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits on runs of `.`, `!` and `?` and counts non-empty segments.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Turkish vowel heuristic: one syllable per vowel, minimum one per word.
pub fn syllable_count(word: &str) -> usize {
    let vowels = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| TURKISH_VOWELS.contains(c))
        .count();
    vowels.max(1)
}

fn syllable_estimate(text: &str) -> usize {
    text.split_whitespace().map(syllable_count).sum()
}

/// Classifies an href as internal or external. Absolute URLs are compared
/// against the base host when one is known; without a base, any absolute
/// http(s) URL counts as external. `mailto:`/`tel:`/`javascript:` links
/// count as neither.
fn classify_href(href: &str, base_url: Option<&Url>) -> Option<bool> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let lower = href.to_lowercase();
    if lower.starts_with("mailto:") || lower.starts_with("tel:") || lower.starts_with("javascript:")
    {
        return None;
    }

    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//") {
        let is_internal = match (base_url, Url::parse(href)) {
            (Some(base), Ok(parsed)) => {
                parsed.host_str() == base.host_str() && parsed.port() == base.port()
            }
            _ => false,
        };
        return Some(is_internal);
    }

    // Relative and fragment links point within the site
    Some(true)
}

/// Extracts all metrics in a single parse of the content. Empty content
/// yields all-zero metrics; downstream formulas must not divide by the
/// zero counts.
pub fn extract(content: &str, base_url: Option<&Url>) -> TextMetrics {
    if content.trim().is_empty() {
        return TextMetrics::default();
    }

    let fragment = Html::parse_fragment(content);

    let mut heading_counts = BTreeMap::new();
    for (level, selector) in HEADING_SELECTORS.iter() {
        let count = fragment.select(selector).count();
        if count > 0 {
            heading_counts.insert(*level, count);
        }
    }

    let mut internal_link_count = 0;
    let mut external_link_count = 0;
    for element in fragment.select(&LINK_SELECTOR) {
        if let Some(href) = element.value().attr("href")
            && let Some(is_internal) = classify_href(href, base_url)
        {
            if is_internal {
                internal_link_count += 1;
            } else {
                external_link_count += 1;
            }
        }
    }

    let text = strip_html(content);

    TextMetrics {
        word_count: word_count(&text),
        sentence_count: sentence_count(&text),
        syllable_estimate: syllable_estimate(&text),
        heading_counts,
        list_count: fragment.select(&LIST_SELECTOR).count(),
        image_count: fragment.select(&IMG_SELECTOR).count(),
        blockquote_count: fragment.select(&BLOCKQUOTE_SELECTOR).count(),
        table_count: fragment.select(&TABLE_SELECTOR).count(),
        question_count: text.matches('?').count(),
        internal_link_count,
        external_link_count,
    }
}
