use anyhow::Context;
use forge_core::{ForgeConfig, Pipeline};
use forge_server::{command, routes, telemetry, ServerArgs};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::from_matches(&command().get_matches());

    // Load .env before the subscriber so RUST_LOG from the file applies.
    let dotenv = dotenvy::dotenv();
    telemetry::init(args.log_json).context("installing tracing subscriber")?;
    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(error = %err, "Ignoring unreadable environment file"),
    }

    let config = ForgeConfig::load(args.config.as_deref()).context("loading configuration")?;
    info!(
        generative = config.generative.is_configured(),
        hosting = config.hosting.token().is_some() && config.hosting.enabled,
        "Configuration loaded"
    );

    let pipeline = Arc::new(Pipeline::new(config).context("building pipeline")?);

    let (addr, server) = warp::serve(routes(pipeline))
        .try_bind_with_graceful_shutdown(args.addr, shutdown_signal())
        .with_context(|| format!("binding {}", args.addr))?;
    info!(%addr, version = forge_server::VERSION, "PromptForge API listening");

    server.await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
