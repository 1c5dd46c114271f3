//! Layer 3: aesthetic synthesis through a language model
//!
//! The brief is sent in a single request. There is no retry and no partial
//! result: a failed call surfaces as a [`RibbonError`](crate::RibbonError).

use async_trait::async_trait;

use crate::types::{Result, Synthesis};

#[cfg(feature = "anthropic")]
pub use anthropic::AnthropicSynthesizer;

/// Instructions sent alongside every brief
pub const SYSTEM_PROMPT: &str = "You are an expert rhythmic gymnastics choreographer and \
ribbon coach. You receive a structured brief built from a fixed ribbon-dance vocabulary. \
Write a vivid, technically accurate description of the routine that uses the brief's \
terminology verbatim where it fits, respects the chosen style, and follows the suggested \
development path. Do not invent apparatus elements outside the vocabulary.";

/// Wrap a brief into the user message sent to the model
pub fn user_message(brief: &str) -> String {
    format!(
        "{brief}\n\n---\nSynthesize the brief above into a cohesive routine description \
         (opening, development, climax, resolution) for the performer."
    )
}

/// Something that can turn a brief into finished prose
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Model identifier used for logging
    fn model(&self) -> &str;

    /// Run the single synthesis call
    async fn synthesize(&self, brief: &str) -> Result<Synthesis>;
}

#[cfg(feature = "anthropic")]
mod anthropic {
    use std::time::{Duration, Instant};

    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};
    use tracing::{debug, warn};

    use super::{SYSTEM_PROMPT, Synthesizer, user_message};
    use crate::config::SynthesisConfig;
    use crate::types::{Result, RibbonError, Synthesis};

    const ANTHROPIC_VERSION: &str = "2023-06-01";

    #[derive(Debug, Serialize)]
    pub(super) struct MessagesRequest<'a> {
        pub model: &'a str,
        pub max_tokens: u32,
        pub temperature: f32,
        pub system: &'a str,
        pub messages: Vec<Message>,
    }

    #[derive(Debug, Serialize)]
    pub(super) struct Message {
        pub role: &'static str,
        pub content: String,
    }

    #[derive(Debug, Deserialize)]
    pub(super) struct MessagesResponse {
        pub model: String,
        pub content: Vec<ContentBlock>,
        #[serde(default)]
        pub usage: Usage,
    }

    #[derive(Debug, Deserialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    pub(super) enum ContentBlock {
        Text {
            text: String,
        },
        #[serde(other)]
        Other,
    }

    #[derive(Debug, Default, Deserialize)]
    pub(super) struct Usage {
        #[serde(default)]
        pub input_tokens: u32,
        #[serde(default)]
        pub output_tokens: u32,
    }

    #[derive(Debug, Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }

    #[derive(Debug, Deserialize)]
    struct ErrorDetail {
        #[serde(rename = "type")]
        kind: String,
        message: String,
    }

    /// Synthesizer backed by the Anthropic Messages API
    #[derive(Clone)]
    pub struct AnthropicSynthesizer {
        client: reqwest::Client,
        api_key: String,
        config: SynthesisConfig,
    }

    impl AnthropicSynthesizer {
        pub fn new(api_key: impl Into<String>, config: SynthesisConfig) -> Result<Self> {
            let api_key = api_key.into();
            if api_key.trim().is_empty() {
                return Err(RibbonError::Config("API key must not be empty".to_string()));
            }
            config.validate()?;

            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(config.timeout_ms))
                .build()?;

            Ok(Self {
                client,
                api_key,
                config,
            })
        }

        /// Full URL of the messages endpoint
        pub fn endpoint(&self) -> String {
            format!("{}/v1/messages", self.config.base_url.trim_end_matches('/'))
        }

        pub(super) fn request_body<'a>(&'a self, brief: &str) -> MessagesRequest<'a> {
            MessagesRequest {
                model: &self.config.model,
                max_tokens: self.config.max_tokens,
                temperature: self.config.temperature,
                system: SYSTEM_PROMPT,
                messages: vec![Message {
                    role: "user",
                    content: user_message(brief),
                }],
            }
        }
    }

    /// Collect the text blocks of a response
    pub(super) fn into_synthesis(response: MessagesResponse, duration_ms: u64) -> Result<Synthesis> {
        let text = response
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(RibbonError::EmptyResponse);
        }

        Ok(Synthesis {
            text,
            model: response.model,
            input_tokens: response.usage.input_tokens,
            output_tokens: response.usage.output_tokens,
            duration_ms,
        })
    }

    /// Turn a non-success body into an error message
    pub(super) fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => format!("{}: {}", parsed.error.kind, parsed.error.message),
            Err(_) if body.trim().is_empty() => "empty error body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }

    #[async_trait]
    impl Synthesizer for AnthropicSynthesizer {
        fn model(&self) -> &str {
            &self.config.model
        }

        async fn synthesize(&self, brief: &str) -> Result<Synthesis> {
            let start = Instant::now();
            debug!(
                model = %self.config.model,
                brief_chars = brief.len(),
                "Sending synthesis request"
            );

            let response = self
                .client
                .post(self.endpoint())
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&self.request_body(brief))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = error_message(&body);
                warn!(status = status.as_u16(), %message, "Synthesis request rejected");
                return Err(RibbonError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: MessagesResponse = response.json().await?;
            let duration_ms = start.elapsed().as_millis() as u64;
            into_synthesis(parsed, duration_ms)
        }
    }
}
