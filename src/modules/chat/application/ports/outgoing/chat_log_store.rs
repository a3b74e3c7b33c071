use async_trait::async_trait;

use crate::chat::application::domain::entities::ChatLogRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatLogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for the local session log.
///
/// `append` is best-effort from the caller's point of view: the relay
/// logs a failure and moves on, it never surfaces one to the visitor.
#[async_trait]
pub trait ChatLogStore: Send + Sync {
    async fn append(&self, record: ChatLogRecord) -> Result<(), ChatLogError>;

    async fn read_all(&self) -> Result<Vec<ChatLogRecord>, ChatLogError>;
}
