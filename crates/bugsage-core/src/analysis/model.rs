//! Value types produced and consumed by the analyzer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BugsageError, BugsageResult};

/// Maximum number of related links kept per analysis.
pub const MAX_LINKS: usize = 3;

/// The captured error text to analyze.
///
/// Invariant: non-empty after trimming. Nothing downstream issues a
/// network call without a valid report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport(String);

impl ErrorReport {
    /// Validate and wrap captured text. Surrounding whitespace is kept
    /// as captured; only blankness is rejected.
    pub fn new(text: impl Into<String>) -> BugsageResult<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(BugsageError::EmptyReport);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One related reference returned by the search provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub title: String,
    pub link: String,
}

/// Aggregate result of analyzing one report.
///
/// `suggestion` is `None` when the AI fetch failed; `links` is empty when
/// the search fetch failed or found nothing. Presentation decides how to
/// render either degradation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    pub suggestion: Option<String>,
    pub links: Vec<SearchLink>,
}

impl Analysis {
    /// True when both fetches came back empty-handed.
    pub fn is_empty(&self) -> bool {
        self.suggestion.is_none() && self.links.is_empty()
    }
}

/// One completed follow-up exchange in a chat session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatTurn {
    pub question: String,
    /// `None` when the AI fetch for this turn failed.
    pub answer: Option<String>,
    pub asked_at: DateTime<Utc>,
}
