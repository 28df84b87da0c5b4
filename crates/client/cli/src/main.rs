//! Terminal client entry point.
use anyhow::Result;
use xzap_cli::{CliApp, CliConfig, logging, summary};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env()?;

    let _log_guard = logging::try_setup_logging(config.log_dir.as_deref());

    let end = CliApp::new(config).run().await?;
    for line in summary(&end) {
        println!("{line}");
    }

    Ok(())
}
