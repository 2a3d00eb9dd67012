//! GreenShift CLI - search cities, calculate route footprints and manage the
//! calculation history from the terminal.

use clap::Parser;
use gs_api::{ApiClient, ApiConfig};
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "gs-cli",
    version,
    about = "GreenShift carbon footprint toolkit"
)]
struct Cli {
    /// Backend base URL [default: $GREENSHIFT_API_URL, else http://localhost:8000]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds (0 disables it)
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: gs_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let timeout = (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs));
    let config = match cli.api_url.as_deref() {
        Some(url) => ApiConfig::new(url)?,
        None => ApiConfig::from_env()?,
    }
    .with_timeout(timeout);
    log::debug!("Backend: {}", config.base_url());
    let api = ApiClient::new(config)?;

    gs_cmd::run(cli.command, api).await
}
