use crate::error::AppError;
use std::path::{Path, PathBuf};
use url::Url;

/// Host clipboard boundary.
///
/// The flow reads at most one file reference from it and writes back exactly
/// one URL, and only after the upload has fully succeeded.
pub trait Clipboard: Send + Sync {
    /// Extracts a local-file reference from the current clipboard payload,
    /// or `None` when the clipboard holds no file.
    fn read_file_reference(&self) -> Result<Option<PathBuf>, AppError>;

    /// Overwrites the clipboard with plain text.
    fn write_text(&self, text: &str) -> Result<(), AppError>;
}

/// System clipboard backed by arboard.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn read_file_reference(&self) -> Result<Option<PathBuf>, AppError> {
        // arboard requires a fresh handle per operation
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;

        let text = match clipboard.get_text() {
            Ok(text) => text,
            // Non-text payloads (raw image data, empty clipboard) carry no
            // file reference
            Err(arboard::Error::ContentNotAvailable) => return Ok(None),
            Err(e) => return Err(AppError::Clipboard(e.to_string())),
        };

        Ok(parse_file_reference(text.trim()))
    }

    fn write_text(&self, text: &str) -> Result<(), AppError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}

/// Interprets a clipboard payload as a single file reference.
///
/// File managers put copied files on the clipboard as `file://` URIs; shells
/// and pickers as absolute paths. Anything else — prose, remote URLs,
/// multi-entry URI lists — is "no file".
pub fn parse_file_reference(text: &str) -> Option<PathBuf> {
    if text.is_empty() || text.contains('\n') {
        return None;
    }

    if let Ok(url) = Url::parse(text) {
        return match url.scheme() {
            "file" => url.to_file_path().ok(),
            _ => None,
        };
    }

    let path = Path::new(text);
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }

    None
}
