use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::multimedia::application::ports::outgoing::{
    ObjectStorage, ObjectStorageError, StoredObject,
};

/// TTL for the signed PUT URLs the upload is pushed through.
const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn public_object_url(bucket: &str, path: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, path)
}

fn map_storage_error(msg: &str) -> ObjectStorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        ObjectStorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        ObjectStorageError::BucketNotFound
    } else {
        ObjectStorageError::Infrastructure(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types.
///
/// Tests implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_via_signed_put(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_via_signed_put(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), String> {
        self.0
            .upload_via_signed_put(bucket_resource, object_name, content_type, bytes, ttl)
            .await
    }
}

/// Production adapter: implements the ObjectStorage port against GCS.
#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    signed_url_ttl: Duration,
}

impl GcsObjectStorage {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            signed_url_ttl: SIGNED_URL_TTL,
        }
    }

    async fn get_client(&self) -> anyhow::Result<&dyn GcsClient> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new()?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, signed_url_ttl: Duration) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            signed_url_ttl,
        }
    }
}

impl Default for GcsObjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn put_object(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, ObjectStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| ObjectStorageError::Infrastructure(e.to_string()))?;

        client
            .upload_via_signed_put(
                &bucket_resource(bucket),
                path,
                content_type,
                bytes,
                self.signed_url_ttl,
            )
            .await
            .map_err(|e| map_storage_error(&e))?;

        Ok(StoredObject {
            url: public_object_url(bucket, path),
            path: path.to_string(),
        })
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    signer: google_cloud_auth::signer::Signer,
    http: reqwest::Client,
}

impl RealGcsClient {
    fn new() -> anyhow::Result<Self> {
        tracing::info!("Initializing GCS signer...");

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                let msg = e.to_string();
                tracing::error!("Failed to build GCS signer: {:?}", e);

                if msg.contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }

                e
            })?;

        tracing::info!("GCS signer created successfully");

        Ok(Self {
            signer,
            http: reqwest::Client::new(),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_via_signed_put(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
        ttl: Duration,
    ) -> Result<(), String> {
        let url = google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())?;

        let response = self
            .http
            .put(url)
            .header("content-type", content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("signed PUT returned {}: {}", status, body));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
