use async_trait::async_trait;

use crate::chat::application::domain::entities::ChatMessage;
use crate::chat::application::ports::outgoing::{CompletionError, TokenStream};

//
// ──────────────────────────────────────────────────────────
// Respond Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RespondCommand {
    session_id: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RespondCommandError {
    #[error("Session id is required")]
    MissingSessionId,

    #[error("Conversation cannot be empty")]
    EmptyConversation,
}

impl RespondCommand {
    pub fn new(
        session_id: String,
        messages: Vec<ChatMessage>,
    ) -> Result<Self, RespondCommandError> {
        let session_id = session_id.trim().to_string();

        if session_id.is_empty() {
            return Err(RespondCommandError::MissingSessionId);
        }

        if messages.is_empty() {
            return Err(RespondCommandError::EmptyConversation);
        }

        Ok(Self {
            session_id,
            messages,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn into_parts(self) -> (String, Vec<ChatMessage>) {
        (self.session_id, self.messages)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RespondError {
    #[error("Failed to assemble chat context: {0}")]
    ContextUnavailable(String),

    #[error(transparent)]
    Upstream(#[from] CompletionError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RespondUseCase: Send + Sync {
    async fn execute(&self, command: RespondCommand) -> Result<TokenStream, RespondError>;
}
