use async_trait::async_trait;
use uuid::Uuid;

use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::outgoing::StoredObject;

//
// ──────────────────────────────────────────────────────────
// Store Upload Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StoreUploadCommand {
    bucket: String,
    path: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadCommandError {
    #[error("No file was supplied")]
    MissingFile,

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Invalid mime type: {0}")]
    InvalidMimeType(String),
}

impl StoreUploadCommand {
    /// The upload form carries the file plus an optional bucket/path; the
    /// generated path keeps the original file name for debuggability.
    pub fn new(
        policy: &UploadPolicy,
        file_name: &str,
        content_type: &str,
        bucket: Option<String>,
        path: Option<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadCommandError> {
        if bytes.is_empty() {
            return Err(UploadCommandError::MissingFile);
        }

        let file_name = file_name.trim();
        if file_name.is_empty()
            || file_name.len() > policy.max_file_name_len
            || file_name.contains('/')
            || file_name.contains("..")
        {
            return Err(UploadCommandError::InvalidFileName);
        }

        if bytes.len() as u64 > policy.max_file_size_bytes {
            return Err(UploadCommandError::FileTooLarge {
                max_bytes: policy.max_file_size_bytes,
                actual_bytes: bytes.len() as u64,
            });
        }

        if !policy.allowed_mime_types.contains(&content_type) {
            return Err(UploadCommandError::InvalidMimeType(content_type.to_string()));
        }

        let bucket = bucket
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| policy.default_bucket.clone());

        let path = path
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| format!("uploads/{}-{}", Uuid::new_v4(), file_name));

        Ok(Self {
            bucket,
            path,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreUploadError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait StoreUploadUseCase: Send + Sync {
    async fn execute(&self, command: StoreUploadCommand) -> Result<StoredObject, StoreUploadError>;
}
