//! The analysis prompt.
//!
//! The template fixes an exact, strict output schema; the normalizer depends
//! on these field names and types, so the schema block must stay in sync with
//! the types in [`crate::types::report`].

use crate::error::{AnalysisError, Result};

/// Prompt for the fraud-analysis report, parameterized by `{url}`.
pub const ANALYSIS_PROMPT: &str = r#"You are an elite E-commerce Fraud & Intelligence Analyst.

TARGET ASSET: "{url}"

YOUR DIRECTIVE:
1. Identify the specific product and brand from the URL.
2. Synthesize a global intelligence report by searching for real consumer data, Reddit threads, tech forums, and third-party review aggregators.
3. Identify "Fraud Vectors":
   - Linguistic anomalies suggesting LLM-generated reviews.
   - Synchronized review spikes (bot farms).
   - High sentiment bias (extreme positivity with zero nuance).
   - Recurring technical phrasing across diverse platforms.

OUTPUT ARCHITECTURE:
Return a SINGLE Valid JSON object. Do not include markdown formatting.
The JSON must strictly match this schema:
{
  "productName": "string",
  "overallScore": number (0-100, where 100 is EXTREME FRAUD/SCAM, 0 is AUTHENTIC),
  "verdict": "string" (e.g., "Authentic", "Anomalous", "Extreme Fraud Risk"),
  "summary": "string (A high-level synthesis of your findings)",
  "keyInsights": ["string (3 distinct bullet points about intelligence gathered)"],
  "ratingDistribution": [
     {"star": 1, "count": number},
     {"star": 2, "count": number},
     {"star": 3, "count": number},
     {"star": 4, "count": number},
     {"star": 5, "count": number}
  ],
  "reviews": [
    {
      "id": "string",
      "reviewerName": "string",
      "rating": number (1-5),
      "text": "string (Real quote or synthesized summary of a specific user point)",
      "date": "string",
      "fakeScore": number (0-100),
      "flags": ["string (e.g., 'Bot Pattern', 'Linguistic Anomaly', 'Paid Review')"],
      "sentiment": "Positive" | "Negative" | "Neutral"
    }
  ]
}"#;

/// Build the analysis prompt for a URL.
///
/// The only validation is a non-empty trimmed string; malformed URLs pass
/// through as-is and the upstream service is expected to interpret intent.
pub fn build_analysis_prompt(url: &str) -> Result<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AnalysisError::EmptyUrl);
    }
    Ok(ANALYSIS_PROMPT.replace("{url}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_trimmed_url() {
        let prompt = build_analysis_prompt("  https://shop.example/p/1  ").unwrap();
        assert!(prompt.contains(r#"TARGET ASSET: "https://shop.example/p/1""#));
        assert!(!prompt.contains("{url}"));
    }

    #[test]
    fn test_prompt_fixes_schema_fields() {
        let prompt = build_analysis_prompt("https://shop.example").unwrap();
        for field in [
            "productName",
            "overallScore",
            "verdict",
            "keyInsights",
            "ratingDistribution",
            "reviews",
            "fakeScore",
        ] {
            assert!(prompt.contains(field), "schema field missing: {field}");
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(matches!(
            build_analysis_prompt("   "),
            Err(AnalysisError::EmptyUrl)
        ));
    }

    #[test]
    fn test_malformed_url_passes_through() {
        let prompt = build_analysis_prompt("not a url at all").unwrap();
        assert!(prompt.contains("not a url at all"));
    }
}
