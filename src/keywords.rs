use crate::metrics::strip_html;
use crate::models::KeywordDensityMap;

/// Below this density a keyword is considered underused.
pub const UNDERUSED_THRESHOLD: f64 = 0.5;
/// Above this density a keyword risks reading as stuffing.
pub const STUFFING_THRESHOLD: f64 = 3.0;

/// Lower-cases and strips punctuation, keeping alphanumerics (including
/// Turkish letters) and whitespace. Both the content and the keywords go
/// through this so matching is case- and punctuation-insensitive.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect()
}

/// Density per keyword as a percentage of total token count. Content is
/// tag-stripped through the shared extractor, then normalized. Single-word
/// keywords match whole tokens; multi-word keywords match as literal
/// phrases (non-overlapping). Empty content yields 0.0 for every keyword.
pub fn keyword_density(content: &str, keywords: &[String]) -> KeywordDensityMap {
    let normalized = normalize(&strip_html(content));
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let total = tokens.len();

    let mut densities = KeywordDensityMap::new();
    for keyword in keywords {
        let needle = normalize(keyword);
        let needle = needle.split_whitespace().collect::<Vec<_>>().join(" ");
        if needle.is_empty() {
            continue;
        }

        let density = if total == 0 {
            0.0
        } else {
            let occurrences = if needle.contains(' ') {
                phrase_count(&tokens, &needle)
            } else {
                tokens.iter().filter(|token| **token == needle).count()
            };
            occurrences as f64 / total as f64 * 100.0
        };

        densities.insert(needle, density);
    }

    densities
}

fn phrase_count(tokens: &[&str], phrase: &str) -> usize {
    let joined = tokens.join(" ");
    joined.matches(phrase).count()
}
