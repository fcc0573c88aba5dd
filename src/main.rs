use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use item_registry::{logging, server, Config, InMemoryRegistry};

/// Serve the item registry over HTTP.
#[derive(Debug, Parser)]
#[command(name = "item_registry", version, about)]
struct Args {
    /// TOML config file (defaults to ./item_registry.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding config.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding config.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    logging::init(&config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    let registry = Arc::new(InMemoryRegistry::new());
    let addr = config.bind_addr();
    server::serve(registry, &addr)
        .await
        .with_context(|| format!("serving on {addr}"))?;

    Ok(())
}
