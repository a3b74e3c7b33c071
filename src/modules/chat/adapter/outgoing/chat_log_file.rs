use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

use crate::chat::application::domain::entities::ChatLogRecord;
use crate::chat::application::ports::outgoing::{ChatLogError, ChatLogStore};

/// JSON-array session log on local disk.
///
/// Appends are serialized behind a single writer lock, so two sessions
/// finishing at the same time cannot race the read-modify-write and drop
/// each other's record.
pub struct ChatLogFile {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ChatLogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_records(&self) -> Result<Vec<ChatLogRecord>, ChatLogError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ChatLogError::Serialization(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ChatLogError::Io(e.to_string())),
        }
    }
}

#[async_trait]
impl ChatLogStore for ChatLogFile {
    async fn append(&self, record: ChatLogRecord) -> Result<(), ChatLogError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ChatLogError::Io(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| ChatLogError::Serialization(e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| ChatLogError::Io(e.to_string()))
    }

    async fn read_all(&self) -> Result<Vec<ChatLogRecord>, ChatLogError> {
        self.read_records().await
    }
}
