use clap::Parser;
use clipdrop::config::Preferences;
use clipdrop::infrastructure::storage;
use clipdrop::services::clipboard::SystemClipboard;
use clipdrop::services::status::ConsoleStatus;
use clipdrop::UploadService;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Upload the file on the clipboard to S3, then replace the clipboard with a
/// 24-hour download link.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clipdrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let prefs = match Preferences::from_env() {
        Ok(prefs) => prefs,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = storage::setup_storage(&prefs).await;
    let service = UploadService::new(
        storage,
        Arc::new(SystemClipboard::new()),
        Arc::new(ConsoleStatus),
        prefs,
    );

    match service.run().await {
        Ok(outcome) => {
            info!("🔗 {}", outcome.url);
            Ok(())
        }
        // Already reported through the status indicator
        Err(_) => std::process::exit(1),
    }
}
