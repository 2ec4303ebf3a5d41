//! Router assembly and server lifecycle.

use std::env;
use std::sync::Arc;

use atelier_core::DeskConfig;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::{bonds, health, onboarding, stocks};
use crate::{AppError, AppState};

pub const HOST_ENV: &str = "ATELIER_HOST";
pub const PORT_ENV: &str = "ATELIER_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Listener address plus the desk it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub desk: DeskConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            desk: DeskConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with `ATELIER_*` environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var(HOST_ENV)
            .ok()
            .map(|host| host.trim().to_owned())
            .filter(|host| !host.is_empty())
            .unwrap_or(defaults.host);
        let port = env::var(PORT_ENV)
            .ok()
            .and_then(|port| port.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Self {
            host,
            port,
            desk: DeskConfig::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the router with every desk route, CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/stocks", get(stocks::list_stocks))
        .route("/api/bonds", get(bonds::list_bonds))
        .route("/api/bonds/:id", get(bonds::bond_detail))
        .route("/api/service-brief", get(onboarding::service_brief))
        .route("/api/instruments", get(onboarding::instruments))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Load fixtures, bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    let desk = config.desk.open()?;
    tracing::info!(
        latency_ms = desk.latency().delay().as_millis() as u64,
        stocks = desk.store().stocks().len(),
        bonds = desk.store().bonds().len(),
        "desk ready"
    );

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "listening");

    let app = create_app(AppState::new(Arc::new(desk)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
