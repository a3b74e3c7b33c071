use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

use crate::chat::application::domain::entities::ChatMessage;

/// Token chunks as they arrive from the completion provider.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, CompletionError>> + Send>>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompletionError {
    #[error("Completion API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),
}

/// Port for the third-party streaming completion API.
///
/// A dropped upstream connection surfaces as an `Err` item mid-stream;
/// there is no retry at this layer or above.
#[async_trait]
pub trait CompletionStream: Send + Sync {
    async fn stream_completion(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<TokenStream, CompletionError>;
}
