use tracing::{error, info};

/// Single user-visible status indicator for one invocation.
///
/// Transitions at most twice: `pending` once the flow starts real work, then
/// exactly one of `success` or `failure`. A flow that finds no file in the
/// clipboard goes straight to `failure`.
pub trait StatusReporter: Send + Sync {
    fn pending(&self, title: &str);
    fn success(&self, title: &str, message: &str);
    fn failure(&self, title: &str, message: &str);
}

/// Renders the indicator into the CLI's log stream.
pub struct ConsoleStatus;

impl StatusReporter for ConsoleStatus {
    fn pending(&self, title: &str) {
        info!("⏳ {}", title);
    }

    fn success(&self, title: &str, message: &str) {
        info!("✅ {}: {}", title, message);
    }

    fn failure(&self, title: &str, message: &str) {
        if message.is_empty() {
            error!("❌ {}", title);
        } else {
            error!("❌ {}: {}", title, message);
        }
    }
}
