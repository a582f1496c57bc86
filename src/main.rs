//! Session Calendar server binary.
//!
//! Loads configuration, seeds the schedule, and serves the HTTP API.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use session_calendar::adapters::http::{schedule_routes, ScheduleHandlers};
use session_calendar::adapters::storage::{
    FileSeedSource, InMemorySessionRepository, StaticSeedSource,
};
use session_calendar::config::{AppConfig, ServerConfig};
use session_calendar::ports::{SeedSource, SessionRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server);

    let grid = config.schedule.slot_grid()?;
    let seed: Box<dyn SeedSource> = match &config.schedule.seed_path {
        Some(path) => Box::new(FileSeedSource::new(path)),
        None => Box::new(StaticSeedSource::new()),
    };
    let repository = Arc::new(InMemorySessionRepository::seeded(grid, seed.as_ref()).await?);
    tracing::info!(
        "Schedule loaded: {} sessions over {} slots per day",
        repository.count().await?,
        grid.slot_count()
    );

    let app = schedule_routes(ScheduleHandlers::from_repository(repository))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
