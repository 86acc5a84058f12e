//! Assistant bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr
//! so they never interleave with the conversation.

use anyhow::Result;
use assistant_bot::{Config, Session};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first: it carries the default log level
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut session = Session::new(config);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    session.run(stdin, stdout).await?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
