use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportSessionsError {
    #[error("Log error: {0}")]
    LogError(String),
}

/// CSV summary of every logged chat session, one row per session.
#[async_trait]
pub trait ExportSessionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<String, ExportSessionsError>;
}
