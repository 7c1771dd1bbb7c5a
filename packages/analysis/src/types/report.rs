//! Core report types - the output of the analysis pipeline.
//!
//! Field names serialize as camelCase to match the strict schema the prompt
//! fixes (and that the upstream model is instructed to emit).

use serde::{Deserialize, Serialize};

/// The result of analyzing a product/review URL.
///
/// Created fresh on every analysis, never mutated after normalization -
/// only replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Product identified from the URL
    pub product_name: String,

    /// Aggregate fraud-risk estimate, 0 (authentic) to 100 (extreme fraud)
    pub overall_score: u8,

    /// Verdict label, e.g. "Authentic", "Anomalous", "Extreme Fraud Risk"
    pub verdict: String,

    /// High-level synthesis of the findings
    pub summary: String,

    /// Short intelligence bullet points
    #[serde(default)]
    pub key_insights: Vec<String>,

    /// Per-review analyses
    #[serde(default)]
    pub reviews: Vec<ReviewAnalysis>,

    /// Review counts per star value; normalization guarantees entries for
    /// stars 1-5 when the field was absent upstream
    #[serde(default)]
    pub rating_distribution: Vec<RatingBucket>,

    /// Deduplicated grounding citations; omitted when the inference call
    /// produced no grounding metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<AnalysisSource>>,
}

impl AnalysisResult {
    /// Whether the overall score is inside the documented range.
    pub fn score_in_range(&self) -> bool {
        self.overall_score <= 100
    }
}

/// Analysis of a single review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAnalysis {
    pub id: String,

    pub reviewer_name: String,

    /// Star rating, 1-5
    pub rating: u8,

    /// Review text (real quote or synthesized summary)
    pub text: String,

    /// Display date string as the upstream service formatted it
    pub date: String,

    /// Fake-likelihood estimate, 0-100
    pub fake_score: u8,

    /// Flag labels, e.g. "Bot Pattern", "Linguistic Anomaly"
    #[serde(default)]
    pub flags: Vec<String>,

    pub sentiment: Sentiment,
}

/// Review sentiment as classified upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Review count for one star value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub star: u8,
    pub count: u32,
}

impl RatingBucket {
    /// An empty bucket for the given star value.
    pub fn empty(star: u8) -> Self {
        Self { star, count: 0 }
    }
}

/// A web source cited by the inference service's search grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSource {
    /// Unique key for deduplication
    pub uri: String,

    /// Display title
    pub title: String,
}
