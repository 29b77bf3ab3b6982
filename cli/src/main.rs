//! CLI entrypoint for Spot Concierge
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the webhook.

use anyhow::{Context, Result, bail};
use clap::Parser;
use concierge_application::ConversationHandler;
use concierge_domain::CategoryMenu;
use concierge_infrastructure::{
    ConfigLoader, FileConfig, GooglePlacesClient, InMemorySessionStore, LINE_MESSAGES_PER_CALL,
    LineMessagingClient, OpenAiDescriptionGenerator,
};
use concierge_presentation::{Cli, router};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        config.server.port = None;
    }

    config.validate().context("Invalid configuration")?;

    let missing = config.missing_secrets();
    if !missing.is_empty() {
        bail!("Missing secrets: {}", missing.join(", "));
    }

    let pipeline = config.pipeline.to_pipeline_config()?;
    if pipeline.batch_size.get() > LINE_MESSAGES_PER_CALL {
        warn!(
            batch_size = pipeline.batch_size.get(),
            limit = LINE_MESSAGES_PER_CALL,
            "Batch size exceeds the LINE per-call limit; oversized chunks will be refused"
        );
    }

    // === Dependency Injection ===
    let sessions = Arc::new(InMemorySessionStore::new());
    let search = Arc::new(GooglePlacesClient::from_config(&config.places)?);
    let generator = Arc::new(OpenAiDescriptionGenerator::from_config(&config.generator)?);
    let channel = Arc::new(LineMessagingClient::from_config(&config.line)?);

    let handler = ConversationHandler::new(
        CategoryMenu::default(),
        sessions,
        search,
        generator,
        channel,
        pipeline,
    );

    // === Serve ===
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(%addr, "Starting Spot Concierge webhook");

    axum::serve(listener, router(Arc::new(handler)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Webhook server failed")?;

    info!("Webhook server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
