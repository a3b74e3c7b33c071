use async_trait::async_trait;
use std::sync::Arc;

use crate::multimedia::application::ports::{
    incoming::use_cases::{StoreUploadCommand, StoreUploadError, StoreUploadUseCase},
    outgoing::{ObjectStorage, StoredObject},
};

pub struct StoreUploadService {
    storage: Arc<dyn ObjectStorage>,
}

impl StoreUploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl StoreUploadUseCase for StoreUploadService {
    async fn execute(
        &self,
        command: StoreUploadCommand,
    ) -> Result<StoredObject, StoreUploadError> {
        let bucket = command.bucket().to_string();
        let path = command.path().to_string();
        let content_type = command.content_type().to_string();

        self.storage
            .put_object(&bucket, &path, &content_type, command.into_bytes())
            .await
            .map_err(|e| StoreUploadError::StorageError(e.to_string()))
    }
}
