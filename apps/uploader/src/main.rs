mod batch;
mod cli;
mod config;
mod errors;
mod render;
mod upload;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::RenderOptions;
use crate::upload::{HttpParseClient, UploadController};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse_args(std::env::args_os().skip(1))?;
    if args.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    let mut config = Config::from_env()?;
    if let Some(endpoint) = args.endpoint {
        config.api_url = endpoint;
    }
    if args.timeout.is_some() {
        config.timeout = args.timeout;
    }

    // Logs go to stderr so stdout carries only the rendered view
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_uploader={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume-uploader v{}", env!("CARGO_PKG_VERSION"));

    if args.files.is_empty() {
        anyhow::bail!("no resume files given\n\n{}", cli::USAGE);
    }

    let client = HttpParseClient::new(config.endpoint()?, config.timeout)
        .context("Failed to build HTTP client")?;
    info!("Parse endpoint: {}", client.endpoint());

    let controller = UploadController::new(Arc::new(client));
    let options = RenderOptions {
        compact: args.compact,
    };

    let failed = batch::run_batch(&controller, &args.files, &options).await;

    if failed > 0 {
        anyhow::bail!("{failed} of {} uploads failed", args.files.len());
    }
    Ok(())
}
