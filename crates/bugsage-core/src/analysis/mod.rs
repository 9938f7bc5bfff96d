//! Dual-fetch analysis orchestration.
//!
//! The analyzer queries the AI and search providers for one report and
//! folds both answers into a single [`Analysis`]. Provider failures are
//! absorbed here: a failed AI fetch degrades to no suggestion, a failed
//! search to an empty link list. Diagnostics go to the log, never to the
//! result, and nothing at this layer is fatal or retried.

pub mod model;

use async_trait::async_trait;
use tracing::warn;

use crate::ai::AiClient;
use crate::error::FetchError;
use crate::stackoverflow::SearchClient;

pub use model::{Analysis, ChatTurn, ErrorReport, SearchLink, MAX_LINKS};

/// Provider of AI explanations. Seam for testing the orchestration
/// without a network.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Explain the captured error.
    async fn suggest(&self, report: &ErrorReport) -> Result<String, FetchError>;

    /// Answer a free-form follow-up question, context-free.
    async fn answer(&self, question: &str) -> Result<String, FetchError>;
}

/// Provider of related external references.
#[async_trait]
pub trait RelatedSource: Send + Sync {
    /// Find references related to the captured error, best first.
    async fn related(&self, report: &ErrorReport) -> Result<Vec<SearchLink>, FetchError>;
}

#[async_trait]
impl SuggestionSource for AiClient {
    async fn suggest(&self, report: &ErrorReport) -> Result<String, FetchError> {
        AiClient::suggest(self, report).await
    }

    async fn answer(&self, question: &str) -> Result<String, FetchError> {
        AiClient::answer(self, question).await
    }
}

#[async_trait]
impl RelatedSource for SearchClient {
    async fn related(&self, report: &ErrorReport) -> Result<Vec<SearchLink>, FetchError> {
        SearchClient::related(self, report).await
    }
}

/// Queries both providers for one report and aggregates the results.
pub struct Analyzer<S, R> {
    suggestions: S,
    related: R,
}

impl<S: SuggestionSource, R: RelatedSource> Analyzer<S, R> {
    pub fn new(suggestions: S, related: R) -> Self {
        Self {
            suggestions,
            related,
        }
    }

    /// Run both fetches concurrently and fold the outcomes. The two
    /// calls are independent, so neither waits on the other.
    pub async fn analyze(&self, report: &ErrorReport) -> Analysis {
        let (suggestion, links) = tokio::join!(
            self.suggestions.suggest(report),
            self.related.related(report),
        );

        let suggestion = match suggestion {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "AI suggestion fetch failed");
                None
            }
        };

        let mut links = match links {
            Ok(links) => links,
            Err(e) => {
                warn!(error = %e, "Related search fetch failed");
                Vec::new()
            }
        };
        // Cap holds regardless of which source produced the links.
        links.truncate(MAX_LINKS);

        Analysis { suggestion, links }
    }

    pub(crate) fn suggestions(&self) -> &S {
        &self.suggestions
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::Mutex;

    /// Stub suggestion provider recording every question it was asked.
    pub struct StubSuggestions {
        pub reply: Result<String, ()>,
        pub asked: Mutex<Vec<String>>,
    }

    impl StubSuggestions {
        pub fn answering(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                asked: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: Err(()),
                asked: Mutex::new(Vec::new()),
            }
        }

        fn respond(&self, question: &str) -> Result<String, FetchError> {
            self.asked.lock().unwrap().push(question.to_string());
            self.reply
                .clone()
                .map_err(|_| FetchError::MalformedResponse("stub failure".to_string()))
        }
    }

    #[async_trait]
    impl SuggestionSource for StubSuggestions {
        async fn suggest(&self, report: &ErrorReport) -> Result<String, FetchError> {
            self.respond(report.as_str())
        }

        async fn answer(&self, question: &str) -> Result<String, FetchError> {
            self.respond(question)
        }
    }

    /// Stub related-link provider returning a fixed item count.
    pub struct StubRelated {
        pub links: Result<Vec<SearchLink>, ()>,
    }

    impl StubRelated {
        pub fn with_links(n: usize) -> Self {
            let links = (0..n)
                .map(|i| SearchLink {
                    title: format!("Question {}", i),
                    link: format!("https://stackoverflow.com/q/{}", i),
                })
                .collect();
            Self { links: Ok(links) }
        }

        pub fn failing() -> Self {
            Self { links: Err(()) }
        }
    }

    #[async_trait]
    impl RelatedSource for StubRelated {
        async fn related(&self, _report: &ErrorReport) -> Result<Vec<SearchLink>, FetchError> {
            self.links
                .clone()
                .map_err(|_| FetchError::MalformedResponse("stub failure".to_string()))
        }
    }
}
