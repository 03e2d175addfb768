use std::sync::Arc;

use anyhow::Context;

use member_check::adapters::http::{app_router, CheckAppState};
use member_check::adapters::roster::{load_roster, InMemoryRosterReader};
use member_check::config::AppConfig;
use member_check::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_logging(&config.server);

    let roster = load_roster(&config.membership.roster_path)
        .await
        .context("failed to load membership roster")?;
    let active_semester = config.membership.active_semester();

    let state = CheckAppState::new(Arc::new(InMemoryRosterReader::new(roster)), active_semester);
    let app = app_router(state.clone(), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        active_semester = %state.active_semester,
        "Member check server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
