use async_trait::async_trait;
use serde::Serialize;

/// Where the upload ended up; `url` is publicly retrievable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredObject {
    pub url: String,
    pub path: String,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ObjectStorageError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

/// Port for the cloud object store the site serves images from.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, ObjectStorageError>;
}
