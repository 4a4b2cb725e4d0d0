pub mod config;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod utils;

pub use config::Preferences;
pub use error::AppError;
pub use services::upload_service::{UploadOutcome, UploadService};
