//! Icon Hunter HTTP host.
//!
//! Usage: `hunter-host [config.toml]`. Without an argument the path comes
//! from `HUNTER_CONFIG`, then `~/.config/icon-hunter/config.toml` if it
//! exists, else built-in defaults.
//!
//! All tracing output goes to stderr.

use std::path::PathBuf;

use icon_hunter::{HunterConfig, run_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("icon_hunter=info,hunter_search=info")
            }),
        )
        .init();

    tracing::info!("hunter-host starting");

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let config = HunterConfig::load(explicit)
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    run_server(config).await.map_err(|e| {
        tracing::error!(error = %e, "hunter-host exited with error");
        anyhow::anyhow!("hunter-host failed: {e}")
    })?;

    tracing::info!("hunter-host shut down cleanly");
    Ok(())
}
