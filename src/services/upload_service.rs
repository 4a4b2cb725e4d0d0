use crate::config::Preferences;
use crate::error::AppError;
use crate::services::clipboard::Clipboard;
use crate::services::status::StatusReporter;
use crate::services::storage::ObjectStorage;
use crate::utils::content_type::{disposition_for, resolve_content_type};
use crate::utils::validation::{content_disposition, validate_file};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// What a successful invocation leaves behind: the object key now owned by
/// the bucket, and the signed URL that was copied to the clipboard.
#[derive(Debug)]
pub struct UploadOutcome {
    pub key: String,
    pub url: String,
}

/// One-shot orchestrator: clipboard file in, signed URL out.
pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    clipboard: Arc<dyn Clipboard>,
    status: Arc<dyn StatusReporter>,
    prefs: Preferences,
}

impl UploadService {
    pub fn new(
        storage: Arc<dyn ObjectStorage>,
        clipboard: Arc<dyn Clipboard>,
        status: Arc<dyn StatusReporter>,
        prefs: Preferences,
    ) -> Self {
        Self {
            storage,
            clipboard,
            status,
            prefs,
        }
    }

    /// Runs one upload. Every failure is terminal and surfaced through the
    /// status indicator; the clipboard is only overwritten on success.
    pub async fn run(&self) -> Result<UploadOutcome, AppError> {
        let result = self.run_inner().await;

        match &result {
            Ok(_) => self.status.success("File Uploaded", "URL copied to clipboard"),
            Err(AppError::NoFileInClipboard) => self.status.failure("No file in clipboard", ""),
            Err(e) => self.status.failure("Upload Failed", &e.to_string()),
        }

        result
    }

    async fn run_inner(&self) -> Result<UploadOutcome, AppError> {
        let Some(path) = self.clipboard.read_file_reference()? else {
            return Err(AppError::NoFileInClipboard);
        };

        self.status.pending("Uploading...");
        info!("📋 Clipboard file: {}", path.display());

        let size = validate_file(&path, self.prefs.max_upload_bytes).await?;

        let content_type = resolve_content_type(&path);
        let disposition = disposition_for(&content_type);
        let original_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file");
        let key = generate_object_key(&path);

        info!(
            "⬆️  Uploading {} ({} bytes, {}) as {}",
            original_name, size, content_type, key
        );
        self.storage.upload_file(&key, &path, &content_type).await?;

        let url = self
            .storage
            .presign_download(
                &key,
                &content_disposition(disposition, original_name),
                Duration::from_secs(self.prefs.url_validity_secs),
            )
            .await?;

        self.clipboard.write_text(&url)?;

        Ok(UploadOutcome { key, url })
    }
}

/// Fresh object key per invocation: a random UUID keeps names collision-free
/// and non-enumerable; the original extension is preserved so the stored
/// object keeps its type.
fn generate_object_key(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!("{}.{}", Uuid::new_v4(), ext),
        _ => Uuid::new_v4().to_string(),
    }
}
