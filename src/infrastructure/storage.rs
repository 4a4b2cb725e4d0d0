use crate::config::Preferences;
use crate::services::storage::S3Storage;
use aws_sdk_s3::config::{Credentials, Region};
use std::sync::Arc;
use tracing::info;

/// Builds the S3 client for this invocation from the loaded preferences.
pub async fn setup_storage(prefs: &Preferences) -> Arc<S3Storage> {
    info!(
        "☁️  S3 Storage: bucket '{}' in {}",
        prefs.bucket_name, prefs.region
    );

    let mut loader = aws_config::from_env()
        .region(Region::new(prefs.region.clone()))
        .credentials_provider(Credentials::new(
            prefs.access_key.clone(),
            prefs.secret_key.clone(),
            None,
            None,
            "static",
        ));

    if let Some(endpoint) = &prefs.endpoint_url {
        info!("🔌 Custom endpoint: {}", endpoint);
        loader = loader.endpoint_url(endpoint);
    }

    let aws_config = loader.load().await;

    let mut s3_config = aws_sdk_s3::config::Builder::from(&aws_config);
    if prefs.endpoint_url.is_some() {
        // S3-compatible providers (MinIO, R2) expect path-style addressing
        s3_config = s3_config.force_path_style(true);
    }

    let client = aws_sdk_s3::Client::from_conf(s3_config.build());
    Arc::new(S3Storage::new(client, prefs.bucket_name.clone()))
}
