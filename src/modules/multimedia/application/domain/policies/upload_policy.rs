#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
    pub default_bucket: String,
}

impl UploadPolicy {
    pub const DEFAULT_BUCKET: &'static str = "portfolio-uploads";
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "image/webp", "image/svg+xml"];

    /// Load policy with the bucket from `UPLOAD_BUCKET`, falling back to
    /// the default bucket name.
    pub fn from_env() -> Self {
        let default_bucket = std::env::var("UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BUCKET.to_string());

        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            default_bucket,
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(default_bucket: impl Into<String>) -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            default_bucket: default_bucket.into(),
        }
    }
}
