use anyhow::Result;
use task_tracker::commands::Cli;
use task_tracker::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let _ = dotenv::dotenv();
    init_tracing();

    Cli::menu()
}

/// Installs a stderr subscriber, but only in debug mode. Normal runs print
/// plain lines through the message macros and need no subscriber.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
