//! Ghost Token Service - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use ghost_token::api::create_router;
use ghost_token::observability::{init_tracing, TracingConfig};
use ghost_token::shutdown::wait_for_signal;
use ghost_token::{Config, SystemClock, TokenIssuer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let tracing_config = TracingConfig::from_config(&config);
    init_tracing(&tracing_config);

    info!(service = %tracing_config.service_name, "Starting Ghost Token Service");

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    let issuer = Arc::new(TokenIssuer::new(SystemClock));
    let app = create_router(issuer, config.request_timeout);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Ghost Token Service running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_signal())
        .await?;

    info!("Ghost Token Service stopped");

    Ok(())
}
