//! registrar-cli - console client for registrar-api

use anyhow::{Context, Result};
use clap::Parser;
use registrar_cli::{run_main_menu, ApiClient, Console};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for registrar-cli
#[derive(Parser, Debug)]
#[command(name = "registrar-cli")]
#[command(about = "Console client for the registrar REST API")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(long, env = "SERVER_HOST", default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 3000)]
    port: u16,

    /// Full server URL, overrides host and port
    #[arg(long)]
    base_url: Option<String>,
}

impl Args {
    fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let base_url = args.base_url();
    info!("registrar-cli v{} using {}", env!("CARGO_PKG_VERSION"), base_url);

    let client = ApiClient::new(base_url).context("Failed to create HTTP client")?;

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    run_main_menu(&client, &mut console)
        .await
        .context("Console I/O failed")?;

    Ok(())
}
