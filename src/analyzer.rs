use crate::models::{ContentAnalysis, ContentInput, ScoreBand};
use crate::readability::ReadabilityPolicy;
use crate::{keywords, metrics, quality, readability, seo, suggestions};
use url::Url;

/// Runs the whole scoring pipeline over one document at a time. Stateless:
/// the same input always yields the same analysis, and instances can be
/// shared across any number of calls.
#[derive(Debug, Clone, Default)]
pub struct ContentAnalyzer {
    policy: ReadabilityPolicy,
    /// Keywords applied to every document on top of its own list.
    extra_keywords: Vec<String>,
    /// Base for internal/external link classification, when known.
    base_url: Option<Url>,
}

impl ContentAnalyzer {
    pub fn new(policy: ReadabilityPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn with_extra_keywords(mut self, keywords: Vec<String>) -> Self {
        self.extra_keywords = keywords;
        self
    }

    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn analyze(&self, input: &ContentInput) -> ContentAnalysis {
        let metrics = metrics::extract(&input.content, self.base_url.as_ref());

        let mut keyword_list = input.keywords.clone();
        for extra in &self.extra_keywords {
            if !keyword_list.iter().any(|k| k.eq_ignore_ascii_case(extra)) {
                keyword_list.push(extra.clone());
            }
        }

        let readability_score = readability::readability_score(&metrics);
        let seo_result = seo::seo_score(input, &metrics);
        let engagement_score = quality::engagement_score(&metrics);
        let overall_score =
            quality::overall_score(readability_score, seo_result.value, engagement_score);

        let keyword_density = keywords::keyword_density(&input.content, &keyword_list);
        let missing_elements = suggestions::missing_elements(input, &metrics);
        let list = suggestions::suggestion_list(
            input,
            &metrics,
            readability_score,
            &seo_result,
            engagement_score,
            &keyword_density,
            self.policy,
        );

        ContentAnalysis {
            seo_score: seo_result.value,
            readability_score,
            engagement_score,
            overall_score,
            band: ScoreBand::from_score(overall_score),
            word_count: metrics.word_count,
            keyword_density,
            suggestions: list.suggestions,
            strengths: list.strengths,
            missing_elements,
            seo_factors: seo_result.factors,
        }
    }

    /// Scores a batch sequentially. Each call is independent, so callers
    /// that want fan-out can map over inputs themselves.
    pub fn analyze_all(&self, inputs: &[ContentInput]) -> Vec<ContentAnalysis> {
        inputs.iter().map(|input| self.analyze(input)).collect()
    }
}
