use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single document to score. Content may be HTML or plain text; every
/// scorer strips tags through the same extractor so they all see identical
/// text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default, alias = "metaDescription")]
    pub meta_description: Option<String>,
    /// Accepts either a JSON array or a comma-separated string, since both
    /// shapes exist in the wild.
    #[serde(
        default,
        alias = "seo_keywords",
        alias = "seoKeywords",
        deserialize_with = "keywords_field"
    )]
    pub keywords: Vec<String>,
}

fn keywords_field<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        List(Vec<String>),
        Csv(String),
    }

    let keywords = match Field::deserialize(deserializer)? {
        Field::List(list) => list,
        Field::Csv(csv) => csv.split(',').map(|s| s.to_string()).collect(),
    };

    Ok(keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect())
}

/// Counts derived from one pass over the content. Recomputed per scoring
/// call; nothing is cached between documents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_estimate: usize,
    /// Heading level (1-6) to count, only levels that occur.
    pub heading_counts: BTreeMap<u8, usize>,
    pub list_count: usize,
    pub image_count: usize,
    pub blockquote_count: usize,
    pub table_count: usize,
    pub question_count: usize,
    pub internal_link_count: usize,
    pub external_link_count: usize,
}

impl TextMetrics {
    pub fn link_count(&self) -> usize {
        self.internal_link_count + self.external_link_count
    }

    /// Headings that count toward SEO structure (h2-h6; the h1 is the title).
    pub fn structural_heading_count(&self) -> usize {
        self.heading_counts
            .iter()
            .filter(|(level, _)| **level >= 2)
            .map(|(_, count)| count)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => ScoreBand::Low,
            50..=79 => ScoreBand::Medium,
            _ => ScoreBand::High,
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreBand::Low => "low",
            ScoreBand::Medium => "medium",
            ScoreBand::High => "high",
        };
        write!(f, "{}", label)
    }
}

/// One scoring factor's contribution, in the order factors are evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub factor: String,
    pub points: u8,
    pub max_points: u8,
}

/// A 0-100 score plus the per-factor breakdown that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub value: u8,
    pub band: ScoreBand,
    pub factors: Vec<ScoreFactor>,
}

/// Keyword (lower-cased) to density percentage. Unrounded; presentation
/// layers round for display.
pub type KeywordDensityMap = BTreeMap<String, f64>;

/// Actionable issues plus what the document already does well.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestionList {
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionAction {
    pub label: String,
    pub url: Option<String>,
}

/// Dashboard-style suggestion aggregated over a batch of documents,
/// ordered by priority (1 is most urgent).
#[derive(Debug, Clone, Serialize)]
pub struct PrioritizedSuggestion {
    pub category: String,
    pub impact: Impact,
    pub priority: u8,
    pub message: String,
    pub action: Option<SuggestionAction>,
}

/// Full analysis for one document. Field names follow the consumer
/// contract (`seo_score`, `keywordDensity`, ...) and must not drift.
#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub seo_score: u8,
    #[serde(rename = "readabilityScore")]
    pub readability_score: u8,
    #[serde(rename = "engagementScore")]
    pub engagement_score: u8,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    pub band: ScoreBand,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "keywordDensity")]
    pub keyword_density: KeywordDensityMap,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    #[serde(rename = "missingElements")]
    pub missing_elements: Vec<String>,
    #[serde(rename = "seoFactors")]
    pub seo_factors: Vec<ScoreFactor>,
}

/// A scored document plus where it came from (file path or URL).
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDocument {
    pub source: String,
    pub title: String,
    pub analysis: ContentAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub source: String,
    pub documents: Vec<ScoredDocument>,
    pub summary: ScoreSummary,
    pub recommendations: Vec<PrioritizedSuggestion>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub total_documents: usize,
    pub average_seo_score: u8,
    pub average_overall_score: u8,
    pub high_count: usize,
    pub medium_count: usize,
    pub low_count: usize,
}
