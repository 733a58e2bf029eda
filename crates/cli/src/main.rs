//! `fieldops` -- read-only admin queries against the fieldops backend.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                     | Description                     |
//! |-------------------------|----------|-----------------------------|---------------------------------|
//! | `FIELDOPS_API_URL`      | no       | `http://localhost:8080/api` | Backend base URL                |
//! | `FIELDOPS_API_TOKEN`    | no       | --                          | Bearer token sent with requests |
//! | `FIELDOPS_TIMEOUT_SECS` | no       | `30`                        | Per-request timeout             |
//! | `RUST_LOG`              | no       | `fieldops=info`             | Log filter                      |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fieldops_cli::cli::Cli;
use fieldops_cli::commands;
use fieldops_client::{ApiClient, ClientConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldops=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url)?;
    }

    let client = ApiClient::new(config)?;
    tracing::debug!(base_url = client.base_url(), "Using backend");
    let output = commands::run(&client, &cli.command).await?;
    println!("{}", output.render()?);
    Ok(())
}
