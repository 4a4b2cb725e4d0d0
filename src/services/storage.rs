use crate::error::AppError;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use std::time::Duration;

/// Object storage boundary. One invocation performs exactly one upload and
/// one signing call; neither is retried here.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Uploads a local file under `key` in a single streamed PUT.
    async fn upload_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), AppError>;

    /// Produces a presigned GET URL for `key`, valid for `validity`, that
    /// forces the given Content-Disposition on the response.
    async fn presign_download(
        &self,
        key: &str,
        content_disposition: &str,
        validity: Duration,
    ) -> Result<String, AppError>;
}

pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload_file(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), AppError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 upload failed"
                );
                AppError::Upload(e.to_string())
            })?;

        tracing::info!(bucket = %self.bucket, key = %key, "S3 upload successful");
        Ok(())
    }

    async fn presign_download(
        &self,
        key: &str,
        content_disposition: &str,
        validity: Duration,
    ) -> Result<String, AppError> {
        let presigning_config =
            PresigningConfig::expires_in(validity).map_err(|e| AppError::Signing(e.to_string()))?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .response_content_disposition(content_disposition)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    key = %key,
                    "Presigning failed"
                );
                AppError::Signing(e.to_string())
            })?;

        Ok(presigned_request.uri().to_string())
    }
}
