//! User and history types for the persistence collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::report::AnalysisResult;

/// A signed-in user. No credential is carried past login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// One saved analysis in a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,

    pub timestamp: DateTime<Utc>,

    /// URL the analysis was run against
    pub url: String,

    pub result: AnalysisResult,
}

impl HistoryItem {
    /// Create a history item stamped with the current time.
    pub fn new(url: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            url: url.into(),
            result,
        }
    }
}

/// Maximum history entries kept per user (newest first).
pub const HISTORY_CAP: usize = 50;
