//! Normalization: parse the extracted envelope into a typed report.
//!
//! Parsing happens through a raw payload type with optional list fields so
//! that an absent field and a present-but-empty one stay distinguishable:
//! only genuinely absent fields are defaulted.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::traits::inference::Citation;
use crate::types::report::{
    AnalysisResult, AnalysisSource, RatingBucket, ReviewAnalysis,
};

/// Fallback display title for a citation the service left untitled.
const UNTITLED_SOURCE: &str = "Intelligence Source";

/// Upstream payload as the model emits it, before defaulting.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReport {
    product_name: String,
    overall_score: u8,
    verdict: String,
    summary: String,
    key_insights: Option<Vec<String>>,
    reviews: Option<Vec<ReviewAnalysis>>,
    rating_distribution: Option<Vec<RatingBucket>>,
}

/// Five zero-count buckets covering stars 1-5.
pub fn default_rating_distribution() -> Vec<RatingBucket> {
    (1..=5).map(RatingBucket::empty).collect()
}

/// Parse extracted text and fold grounding citations into a report.
///
/// Fails with [`crate::error::AnalysisError::MalformedPayload`] when the text
/// is not the expected JSON shape. Post-parse defaults: an absent
/// `ratingDistribution` becomes five zero-count buckets, absent `reviews`
/// an empty list. Citations are deduplicated by URI (last write wins per URI,
/// first-appearance order preserved); `sources` stays `None` when no
/// grounding metadata exists.
pub fn normalize_report(extracted: &str, grounding: &[Citation]) -> Result<AnalysisResult> {
    let raw: RawReport = serde_json::from_str(extracted)?;

    let sources = fold_sources(grounding);

    debug!(
        product = %raw.product_name,
        score = raw.overall_score,
        source_count = sources.as_ref().map(Vec::len).unwrap_or(0),
        "normalized analysis payload"
    );

    Ok(AnalysisResult {
        product_name: raw.product_name,
        overall_score: raw.overall_score.min(100),
        verdict: raw.verdict,
        summary: raw.summary,
        key_insights: raw.key_insights.unwrap_or_default(),
        reviews: raw.reviews.unwrap_or_default(),
        rating_distribution: raw
            .rating_distribution
            .unwrap_or_else(default_rating_distribution),
        sources,
    })
}

/// Deduplicate citations by URI into an ordered sources list.
fn fold_sources(grounding: &[Citation]) -> Option<Vec<AnalysisSource>> {
    if grounding.is_empty() {
        return None;
    }

    let mut by_uri: IndexMap<String, AnalysisSource> = IndexMap::new();
    for citation in grounding {
        by_uri.insert(
            citation.uri.clone(),
            AnalysisSource {
                uri: citation.uri.clone(),
                title: citation
                    .title
                    .clone()
                    .unwrap_or_else(|| UNTITLED_SOURCE.to_string()),
            },
        );
    }

    Some(by_uri.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    const MINIMAL: &str = r#"{
        "productName": "Widget",
        "overallScore": 40,
        "verdict": "Anomalous",
        "summary": "mixed signals"
    }"#;

    fn citation(uri: &str, title: Option<&str>) -> Citation {
        Citation {
            uri: uri.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_distribution_zero_filled() {
        let result = normalize_report(MINIMAL, &[]).unwrap();
        assert_eq!(result.rating_distribution.len(), 5);
        for (i, bucket) in result.rating_distribution.iter().enumerate() {
            assert_eq!(bucket.star, i as u8 + 1);
            assert_eq!(bucket.count, 0);
        }
    }

    #[test]
    fn test_absent_reviews_default_empty() {
        let result = normalize_report(MINIMAL, &[]).unwrap();
        assert!(result.reviews.is_empty());
        assert!(result.key_insights.is_empty());
    }

    #[test]
    fn test_present_distribution_not_redefaulted() {
        let raw = r#"{
            "productName": "Widget",
            "overallScore": 40,
            "verdict": "Anomalous",
            "summary": "s",
            "ratingDistribution": [{"star": 1, "count": 5}]
        }"#;
        let result = normalize_report(raw, &[]).unwrap();
        assert_eq!(
            result.rating_distribution,
            vec![RatingBucket { star: 1, count: 5 }]
        );
    }

    #[test]
    fn test_malformed_payload_error() {
        let err = normalize_report("not json", &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedPayload(_)));
        // Parse detail survives into the displayed message
        assert!(err.to_string().starts_with("malformed analysis payload"));
    }

    #[test]
    fn test_no_grounding_omits_sources() {
        let result = normalize_report(MINIMAL, &[]).unwrap();
        assert_eq!(result.sources, None);
    }

    #[test]
    fn test_sources_deduplicated_by_uri() {
        let grounding = vec![
            citation("https://a.example", Some("First title")),
            citation("https://b.example", None),
            citation("https://a.example", Some("Second title")),
        ];
        let sources = normalize_report(MINIMAL, &grounding).unwrap().sources.unwrap();

        assert_eq!(sources.len(), 2);
        // First-appearance order, last-write-wins title
        assert_eq!(sources[0].uri, "https://a.example");
        assert_eq!(sources[0].title, "Second title");
        assert_eq!(sources[1].uri, "https://b.example");
        assert_eq!(sources[1].title, UNTITLED_SOURCE);
    }

    #[test]
    fn test_overall_score_clamped() {
        let raw = r#"{
            "productName": "Widget",
            "overallScore": 120,
            "verdict": "v",
            "summary": "s"
        }"#;
        let result = normalize_report(raw, &[]).unwrap();
        assert_eq!(result.overall_score, 100);
    }
}
