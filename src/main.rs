//! Checkout Gateway server binary.
//!
//! Loads configuration, installs tracing, wires the MercadoPago gateway into
//! the checkout router and serves until Ctrl-C.

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use checkout_gateway::adapters::http::{checkout_router, CheckoutAppState};
use checkout_gateway::adapters::mercadopago::{
    MercadoPagoConfig, MercadoPagoGateway, ReqwestTransport,
};
use checkout_gateway::config::{AppConfig, ConfigError, ValidationError};
use checkout_gateway::ports::TransportError;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build provider client: {0}")]
    Transport(#[from] TransportError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;

    let transport = ReqwestTransport::new(config.provider.timeout())?;
    let gateway = MercadoPagoGateway::new(
        MercadoPagoConfig::new().with_base_url(config.provider.base_url.clone()),
        Arc::new(transport),
    );
    let app = checkout_router(CheckoutAppState::new(Arc::new(gateway)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        provider = %config.provider.base_url,
        "Checkout gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Checkout gateway stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured filter; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
