//! Chat-completion HTTP client.
//!
//! Talks to an OpenAI-compatible endpoint (typically a local proxy) using
//! the `{model, messages}` request shape and the
//! `{choices: [{message: {content}}]}` response shape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::model::ErrorReport;
use crate::config::Config;
use crate::error::FetchError;

/// System instruction sent with every completion request.
const SYSTEM_PROMPT: &str = "You are an expert software bug fixer. \
    Explain errors and suggest fixes clearly and step-by-step.";

/// Client for the AI completion endpoint.
#[derive(Clone)]
pub struct AiClient {
    url: String,
    api_key: Option<String>,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl AiClient {
    /// Create a client from loaded configuration.
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            url: config.ai_url.trim_end_matches('/').to_string(),
            api_key: config.ai_key.clone(),
            model: config.model.clone(),
            client,
        }
    }

    /// Ask the AI to explain the captured error.
    pub async fn suggest(&self, report: &ErrorReport) -> Result<String, FetchError> {
        self.complete(report.as_str()).await
    }

    /// Ask the AI a free-form follow-up question. Each call is
    /// context-free: no prior turns are included in the request.
    pub async fn answer(&self, question: &str) -> Result<String, FetchError> {
        self.complete(question).await
    }

    async fn complete(&self, user_content: &str) -> Result<String, FetchError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user",
                    content: user_content.to_string(),
                },
            ],
        };

        debug!(url = %self.url, model = %self.model, "Requesting AI completion");

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| FetchError::MalformedResponse("empty choices array".to_string()))?;

        debug!(len = content.len(), "AI completion received");
        Ok(content)
    }
}
