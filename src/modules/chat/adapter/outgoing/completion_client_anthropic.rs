use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::chat::application::domain::entities::ChatMessage;
use crate::chat::application::ports::outgoing::{
    CompletionError, CompletionStream, TokenStream,
};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Hardcoded on purpose; a config knob here invites model drift between
/// environments.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

//
// ──────────────────────────────────────────────────────────
// Wire DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    stream: bool,
    system: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// The subset of stream events the relay cares about; everything else
/// (message_start, ping, content_block_stop, ...) is skipped.
#[derive(Debug, Deserialize)]
struct StreamEvent {
    #[serde(rename = "type")]
    event_type: String,
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

//
// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────
//

/// Streaming client for the Anthropic Messages API.
#[derive(Clone)]
pub struct AnthropicCompletionClient {
    client: reqwest::Client,
    api_key: String,
}

impl AnthropicCompletionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionStream for AnthropicCompletionClient {
    async fn stream_completion(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<TokenStream, CompletionError> {
        let request_body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            stream: true,
            system: system_prompt,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_wire(),
                    content: &m.content,
                })
                .collect(),
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(Box::pin(text_deltas(response.bytes_stream())))
    }
}

//
// ──────────────────────────────────────────────────────────
// SSE parsing
// ──────────────────────────────────────────────────────────
//

/// Turns the raw SSE byte stream into the text deltas it carries. Lines
/// are reassembled across chunk boundaries before parsing.
fn text_deltas<S, E>(bytes: S) -> impl Stream<Item = Result<String, CompletionError>> + Send
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let state = (Box::pin(bytes), String::new(), VecDeque::new());

    futures::stream::unfold(state, |(mut bytes, mut buffer, mut pending)| async move {
        loop {
            if let Some(text) = pending.pop_front() {
                return Some((Ok(text), (bytes, buffer, pending)));
            }

            match bytes.next().await {
                Some(Ok(chunk)) => {
                    buffer.push_str(&String::from_utf8_lossy(&chunk));

                    while let Some(newline) = buffer.find('\n') {
                        let line = buffer[..newline].trim_end_matches('\r').to_string();
                        buffer.drain(..=newline);

                        let Some(data) = line.strip_prefix("data: ") else {
                            continue;
                        };

                        let Ok(event) = serde_json::from_str::<StreamEvent>(data) else {
                            continue;
                        };

                        if event.event_type == "content_block_delta" {
                            if let Some(text) = event.delta.and_then(|d| d.text) {
                                if !text.is_empty() {
                                    pending.push_back(text);
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    return Some((
                        Err(CompletionError::Network(e.to_string())),
                        (bytes, buffer, pending),
                    ));
                }
                None => return None,
            }
        }
    })
}
