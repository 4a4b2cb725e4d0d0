use std::fmt;
use std::path::Path;

/// MIME types a browser is trusted to render inline. Everything else is
/// served as an attachment so it downloads instead of executing in-page.
const INLINE_TYPES: [&str; 14] = [
    "application/json",
    "application/pdf",
    "audio/mpeg",
    "audio/ogg",
    "audio/wav",
    "audio/webm",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/webp",
    "text/css",
    "text/plain",
    "video/mp4",
    "video/webm",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disposition::Inline => f.write_str("inline"),
            Disposition::Attachment => f.write_str("attachment"),
        }
    }
}

/// Derives a MIME type from the filename extension.
pub fn resolve_content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

pub fn disposition_for(content_type: &str) -> Disposition {
    if INLINE_TYPES.contains(&content_type) {
        Disposition::Inline
    } else {
        Disposition::Attachment
    }
}
