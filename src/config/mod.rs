use crate::error::AppError;
use std::env;

/// Single-PUT upload ceiling: 5 GiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024 * 1024;

/// Signed URL validity window: 24 hours
pub const DEFAULT_URL_VALIDITY_SECS: u64 = 86_400;

/// Connection and policy settings for one invocation.
///
/// Read fresh from the environment every run, never cached in process memory.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub access_key: String,
    pub secret_key: String,
    pub bucket_name: String,
    pub region: String,

    /// Custom endpoint for S3-compatible providers (MinIO, R2).
    /// When set, the client uses path-style addressing.
    pub endpoint_url: Option<String>,

    /// Maximum file size accepted for the single PUT (default: 5 GiB)
    pub max_upload_bytes: u64,

    /// Validity window for the signed download URL (default: 24 hours)
    pub url_validity_secs: u64,
}

impl Preferences {
    /// Load preferences from environment variables.
    ///
    /// The four connection values are required; limits fall back to their
    /// defaults when unset or unparsable.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            access_key: require("AWS_ACCESS_KEY")?,
            secret_key: require("AWS_SECRET_KEY")?,
            bucket_name: require("BUCKET_NAME")?,
            region: require("AWS_REGION")?,

            endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),

            url_validity_secs: env::var("URL_VALIDITY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_URL_VALIDITY_SECS),
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("{} must be set", name)))
}
