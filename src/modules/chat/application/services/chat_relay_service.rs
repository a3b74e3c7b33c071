use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::warn;

use super::context_builder::build_system_context;
use crate::chat::application::domain::entities::{ChatLogRecord, ChatMessage};
use crate::chat::application::domain::tagging;
use crate::chat::application::ports::{
    incoming::use_cases::{RespondCommand, RespondError, RespondUseCase},
    outgoing::{ChatLogStore, CompletionStream, TokenStream},
};
use crate::content::application::ports::outgoing::ContentStore;

/// The relay: system context + conversation in, token stream out, one
/// tagged log record after the stream ends.
pub struct ChatRelayService {
    store: Arc<dyn ContentStore>,
    completions: Arc<dyn CompletionStream>,
    log: Arc<dyn ChatLogStore>,
    // Built once per process; content edits reach the chatbot on restart.
    system_context: OnceCell<String>,
}

impl ChatRelayService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        completions: Arc<dyn CompletionStream>,
        log: Arc<dyn ChatLogStore>,
    ) -> Self {
        Self {
            store,
            completions,
            log,
            system_context: OnceCell::new(),
        }
    }

    async fn system_context(&self) -> Result<&str, RespondError> {
        self.system_context
            .get_or_try_init(|| async { build_system_context(self.store.as_ref()).await })
            .await
            .map(String::as_str)
            .map_err(|e| RespondError::ContextUnavailable(e.to_string()))
    }
}

#[async_trait]
impl RespondUseCase for ChatRelayService {
    async fn execute(&self, command: RespondCommand) -> Result<TokenStream, RespondError> {
        let system = self.system_context().await?;
        let (session_id, messages) = command.into_parts();

        let mut upstream = self
            .completions
            .stream_completion(system, &messages)
            .await?;

        let (tx, rx) = futures::channel::mpsc::unbounded();
        let log = Arc::clone(&self.log);

        tokio::spawn(async move {
            let mut reply = String::new();

            while let Some(item) = upstream.next().await {
                match item {
                    Ok(chunk) => {
                        reply.push_str(&chunk);
                        if tx.unbounded_send(Ok(chunk)).is_err() {
                            // visitor closed the page; stop relaying but
                            // still log what was exchanged
                            break;
                        }
                    }
                    Err(err) => {
                        // a dropped upstream connection ends the visible
                        // response; no mid-stream retry
                        let _ = tx.unbounded_send(Err(err));
                        break;
                    }
                }
            }
            drop(tx);

            let mut transcript = messages;
            if !reply.is_empty() {
                transcript.push(ChatMessage::assistant(reply));
            }

            let record = ChatLogRecord {
                session_id,
                timestamp: Utc::now(),
                user_email: tagging::extract_email(&transcript),
                summary: tagging::summarize(&transcript),
                messages: transcript,
            };

            if let Err(e) = log.append(record).await {
                warn!("Failed to append chat log record: {}", e);
            }
        });

        Ok(Box::pin(rx))
    }
}
