//! Interactive follow-up chat session.
//!
//! One session per analyzed report. The initial analysis is computed
//! once at open and reused by every surface that renders it. Follow-up
//! questions are serialized per session (`follow_up` takes `&mut self`,
//! so a second request cannot start before the first resolves) and each
//! is a context-free query: no prior turns are sent to the provider.

use chrono::Utc;
use tracing::{debug, warn};

use crate::analysis::model::{Analysis, ChatTurn, ErrorReport};
use crate::analysis::{Analyzer, RelatedSource, SuggestionSource};
use crate::error::{BugsageError, BugsageResult};

/// A live chat session over one analyzed error report.
pub struct ChatSession<S, R> {
    analyzer: Analyzer<S, R>,
    report: ErrorReport,
    initial: Analysis,
    transcript: Vec<ChatTurn>,
}

impl<S: SuggestionSource, R: RelatedSource> ChatSession<S, R> {
    /// Analyze the report and open a session around the result.
    pub async fn open(analyzer: Analyzer<S, R>, report: ErrorReport) -> Self {
        debug!("Opening chat session");
        let initial = analyzer.analyze(&report).await;
        Self {
            analyzer,
            report,
            initial,
            transcript: Vec::new(),
        }
    }

    pub fn report(&self) -> &ErrorReport {
        &self.report
    }

    /// The analysis computed when the session opened.
    pub fn initial(&self) -> &Analysis {
        &self.initial
    }

    /// All completed follow-up turns, oldest first.
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Submit one follow-up question and wait for the response.
    ///
    /// A failed fetch degrades to a turn with no answer; only a blank
    /// question is an error. The completed turn is appended to the
    /// transcript and returned.
    pub async fn follow_up(&mut self, question: &str) -> BugsageResult<&ChatTurn> {
        let question = question.trim();
        if question.is_empty() {
            return Err(BugsageError::validation("Follow-up question is empty"));
        }

        let asked_at = Utc::now();
        let answer = match self.analyzer.suggestions().answer(question).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Follow-up fetch failed");
                None
            }
        };

        self.transcript.push(ChatTurn {
            question: question.to_string(),
            answer,
            asked_at,
        });
        Ok(self.transcript.last().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::{StubRelated, StubSuggestions};

    fn report() -> ErrorReport {
        ErrorReport::new("segfault in frob()").unwrap()
    }

    #[tokio::test]
    async fn test_initial_analysis_computed_once() {
        let suggestions = StubSuggestions::answering("explanation");
        let analyzer = Analyzer::new(suggestions, StubRelated::with_links(1));
        let session = ChatSession::open(analyzer, report()).await;

        assert_eq!(session.initial().suggestion.as_deref(), Some("explanation"));
        // Exactly one AI call went out for the initial analysis.
        assert_eq!(
            session.analyzer.suggestions().asked.lock().unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_follow_ups_are_context_free() {
        let analyzer = Analyzer::new(
            StubSuggestions::answering("because"),
            StubRelated::with_links(0),
        );
        let mut session = ChatSession::open(analyzer, report()).await;

        session.follow_up("why does this happen").await.unwrap();
        session.follow_up("how do I fix it").await.unwrap();

        let asked = session.analyzer.suggestions().asked.lock().unwrap();
        // Initial report plus two follow-ups, each sent verbatim with no
        // accumulated context.
        assert_eq!(
            *asked,
            vec![
                "segfault in frob()".to_string(),
                "why does this happen".to_string(),
                "how do I fix it".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_follow_up_has_no_answer() {
        let analyzer = Analyzer::new(StubSuggestions::failing(), StubRelated::with_links(0));
        let mut session = ChatSession::open(analyzer, report()).await;

        let turn = session.follow_up("anything").await.unwrap();
        assert!(turn.answer.is_none());
        assert_eq!(turn.question, "anything");
    }

    #[tokio::test]
    async fn test_blank_follow_up_rejected() {
        let analyzer = Analyzer::new(
            StubSuggestions::answering("x"),
            StubRelated::with_links(0),
        );
        let mut session = ChatSession::open(analyzer, report()).await;

        assert!(session.follow_up("   ").await.is_err());
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_transcript_accumulates_in_order() {
        let analyzer = Analyzer::new(
            StubSuggestions::answering("a"),
            StubRelated::with_links(0),
        );
        let mut session = ChatSession::open(analyzer, report()).await;

        session.follow_up("first").await.unwrap();
        session.follow_up("second").await.unwrap();

        let questions: Vec<&str> = session
            .transcript()
            .iter()
            .map(|t| t.question.as_str())
            .collect();
        assert_eq!(questions, vec!["first", "second"]);
    }
}
