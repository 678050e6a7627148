use crate::keywords::{STUFFING_THRESHOLD, UNDERUSED_THRESHOLD};
use crate::models::{
    ContentAnalysis, ContentInput, Impact, KeywordDensityMap, PrioritizedSuggestion, ScoreResult,
    SuggestionAction, SuggestionList, TextMetrics,
};
use crate::quality::{ACCEPTABLE_WORD_RANGE, OPTIMAL_WORD_RANGE};
use crate::readability::{ReadabilityPolicy, ReadabilityVerdict, assess};

const LOW_SCORE: u8 = 50;
const HIGH_SCORE: u8 = 80;

/// Elements a well-formed document should carry. Absent ones are reported
/// under `missingElements` in the order given here.
pub fn missing_elements(input: &ContentInput, metrics: &TextMetrics) -> Vec<String> {
    let mut missing = Vec::new();

    if input
        .meta_description
        .as_deref()
        .is_none_or(|d| d.trim().is_empty())
    {
        missing.push("meta description".to_string());
    }
    if input.excerpt.as_deref().is_none_or(|e| e.trim().is_empty()) {
        missing.push("excerpt".to_string());
    }
    if input.keywords.is_empty() {
        missing.push("keywords".to_string());
    }
    if metrics.structural_heading_count() == 0 {
        missing.push("headings".to_string());
    }
    if metrics.image_count == 0 {
        missing.push("images".to_string());
    }
    if metrics.internal_link_count == 0 {
        missing.push("internal links".to_string());
    }

    missing
}

/// Flat suggestions and strengths for one document, highest-impact items
/// first. Pure string mapping; every input combination produces a valid
/// (possibly empty-strength) list.
#[allow(clippy::too_many_arguments)]
pub fn suggestion_list(
    input: &ContentInput,
    metrics: &TextMetrics,
    readability: u8,
    seo: &ScoreResult,
    engagement: u8,
    density: &KeywordDensityMap,
    policy: ReadabilityPolicy,
) -> SuggestionList {
    let mut suggestions = Vec::new();
    let mut strengths = Vec::new();

    // Content length first: everything else is noise until there is text
    let words = metrics.word_count;
    if words < ACCEPTABLE_WORD_RANGE.0 {
        suggestions.push(format!(
            "Content is too short ({} words); aim for at least {} words",
            words, ACCEPTABLE_WORD_RANGE.0
        ));
    } else if words >= OPTIMAL_WORD_RANGE.0 && words <= OPTIMAL_WORD_RANGE.1 {
        strengths.push(format!("Content length is in the optimal range ({} words)", words));
    }

    let title_len = input.title.trim().chars().count();
    if title_len == 0 {
        suggestions.push("Add a title".to_string());
    } else if title_len < 30 {
        suggestions.push(format!(
            "Title is too short ({} chars, recommended: 30-60)",
            title_len
        ));
    } else if title_len > 60 {
        suggestions.push(format!(
            "Title is too long ({} chars, recommended: 30-60)",
            title_len
        ));
    } else {
        strengths.push("Title length is on target".to_string());
    }

    match input.meta_description.as_deref().map(|d| d.trim().chars().count()) {
        None | Some(0) => suggestions.push("Add a meta description".to_string()),
        Some(len) if len < 120 => suggestions.push(format!(
            "Meta description is too short ({} chars, recommended: 120-160)",
            len
        )),
        Some(len) if len > 160 => suggestions.push(format!(
            "Meta description is too long ({} chars, recommended: 120-160)",
            len
        )),
        Some(_) => strengths.push("Meta description length is on target".to_string()),
    }

    match assess(readability, policy) {
        ReadabilityVerdict::HardToRead => suggestions.push(
            "Text is hard to read; use shorter sentences and simpler words".to_string(),
        ),
        ReadabilityVerdict::TooSimple => suggestions.push(
            "Text may be too simple for the audience; consider more technical vocabulary"
                .to_string(),
        ),
        ReadabilityVerdict::Good => {
            if readability > 0 {
                strengths.push("Readability is good".to_string());
            }
        }
    }

    if seo.value < LOW_SCORE {
        suggestions.push("SEO score is low; review titles, meta fields and headings".to_string());
    } else if seo.value > HIGH_SCORE {
        strengths.push("SEO fundamentals are strong".to_string());
    }

    if engagement < LOW_SCORE {
        suggestions.push(
            "Add engaging elements such as questions, lists or images".to_string(),
        );
    } else if engagement > HIGH_SCORE {
        strengths.push("Content structure is engaging".to_string());
    }

    if metrics.structural_heading_count() < 2 {
        suggestions.push("Break the content up with more subheadings (h2/h3)".to_string());
    }
    if metrics.link_count() == 0 {
        suggestions.push("Add links to related content".to_string());
    }

    for (keyword, pct) in density {
        if *pct > STUFFING_THRESHOLD {
            suggestions.push(format!(
                "Keyword \"{}\" appears too often ({:.1}%); this reads as keyword stuffing",
                keyword, pct
            ));
        } else if *pct < UNDERUSED_THRESHOLD {
            suggestions.push(format!(
                "Keyword \"{}\" is underused ({:.1}%); work it into the text naturally",
                keyword, pct
            ));
        }
    }

    SuggestionList {
        suggestions,
        strengths,
    }
}

/// Dashboard-style recommendations aggregated over a batch of analyses:
/// which fixes would move the most documents, ordered by priority.
pub fn prioritized(analyses: &[ContentAnalysis]) -> Vec<PrioritizedSuggestion> {
    let mut recommendations = Vec::new();

    let missing_count = |element: &str| {
        analyses
            .iter()
            .filter(|a| a.missing_elements.iter().any(|m| m == element))
            .count()
    };

    let missing_meta = missing_count("meta description");
    if missing_meta > 0 {
        recommendations.push(PrioritizedSuggestion {
            category: "meta".to_string(),
            impact: Impact::High,
            priority: 1,
            message: format!("{} document(s) have no meta description", missing_meta),
            action: Some(SuggestionAction {
                label: "Write meta descriptions".to_string(),
                url: None,
            }),
        });
    }

    let low_seo = analyses.iter().filter(|a| a.seo_score < LOW_SCORE).count();
    if low_seo > 0 {
        recommendations.push(PrioritizedSuggestion {
            category: "seo".to_string(),
            impact: Impact::High,
            priority: 2,
            message: format!("{} document(s) score below {} on SEO", low_seo, LOW_SCORE),
            action: Some(SuggestionAction {
                label: "Review low-scoring documents".to_string(),
                url: None,
            }),
        });
    }

    let missing_images = missing_count("images");
    if missing_images > 0 {
        recommendations.push(PrioritizedSuggestion {
            category: "media".to_string(),
            impact: Impact::Medium,
            priority: 3,
            message: format!("{} document(s) contain no images", missing_images),
            action: Some(SuggestionAction {
                label: "Add images".to_string(),
                url: None,
            }),
        });
    }

    let missing_headings = missing_count("headings");
    if missing_headings > 0 {
        recommendations.push(PrioritizedSuggestion {
            category: "structure".to_string(),
            impact: Impact::Medium,
            priority: 4,
            message: format!("{} document(s) have no subheadings", missing_headings),
            action: None,
        });
    }

    let missing_links = missing_count("internal links");
    if missing_links > 0 {
        recommendations.push(PrioritizedSuggestion {
            category: "links".to_string(),
            impact: Impact::Low,
            priority: 5,
            message: format!("{} document(s) have no internal links", missing_links),
            action: None,
        });
    }

    recommendations.sort_by_key(|r| r.priority);
    recommendations
}
