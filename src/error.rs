use thiserror::Error;

/// Errors for a single upload invocation. Every variant is terminal: it is
/// surfaced once through the status indicator and never retried.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No file in clipboard")]
    NoFileInClipboard,

    #[error("Clipboard item is not a file")]
    NotAFile,

    #[error("File is larger than {} (single PUT limit)", human_size(.limit))]
    TooLarge { size: u64, limit: u64 },

    #[error("{0}")]
    Upload(String),

    #[error("{0}")]
    Signing(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn human_size(bytes: &u64) -> String {
    const GIB: u64 = 1024 * 1024 * 1024;
    const MIB: u64 = 1024 * 1024;
    if *bytes >= GIB && bytes % GIB == 0 {
        format!("{} GB", bytes / GIB)
    } else if *bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}
