//! ROI Audit server binary.
//!
//! Loads configuration, initializes tracing, wires the selected AI provider,
//! and serves the HTTP API until SIGINT or SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use roi_audit::adapters::{app_router, AuditAppState, JsonDiagnosticValidator};
use roi_audit::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.server);

    let ai_provider = config.ai.build_provider()?;
    let provider_info = ai_provider.provider_info();
    if !config.ai.has_api_key() {
        warn!(
            provider = %provider_info.name,
            "no API key configured; every audit will return the fallback diagnostic"
        );
    }

    let state = AuditAppState::new(ai_provider, Arc::new(JsonDiagnosticValidator::new()));
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        provider = %provider_info.name,
        model = %provider_info.model,
        "roi-audit listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}

/// Wait for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
