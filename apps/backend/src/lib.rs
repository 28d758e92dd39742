pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::services::store::DeckStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DeckStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(DeckStore::new(config.deck_id_length)),
            config: Arc::new(config),
        }
    }
}

/// Build the router: deck API plus the static front end, which also answers
/// any unknown GET with `index.html` so share links like `/?id=...` load.
pub fn build_router(state: AppState) -> Router {
    let static_dir = &state.config.static_dir;
    let front_end = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));
    let body_limit = state.config.body_limit();

    Router::new()
        .route("/health", get(health_check))
        .route("/deck", post(routes::decks::create))
        .route("/deck/:id", get(routes::decks::fetch))
        .route("/deck/:id/preview", get(routes::decks::preview))
        .fallback_service(front_end)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.addr();
    tracing::info!(static_dir = %config.static_dir.display(), "Serving front end");

    let app = build_router(AppState::new(config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped; stored decks discarded");
    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
