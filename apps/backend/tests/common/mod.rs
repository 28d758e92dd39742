//! Common test utilities for integration tests.
//!
//! Every test gets its own in-memory store and a temporary front end
//! directory, so tests need no external services and can run in parallel.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use tempfile::TempDir;

use flipdeck_server::config::ServerConfig;
use flipdeck_server::services::store::DeckStore;
use flipdeck_server::{build_router, AppState};

/// Test context holding the shared store and the router built around it.
pub struct TestContext {
    pub store: Arc<DeckStore>,
    app: Router,
    _static_dir: TempDir,
}

impl TestContext {
    /// Create a context with default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a context with custom limits. `static_dir` is replaced by a
    /// temporary directory containing `index.html` and `app.js`.
    pub fn with_config(mut config: ServerConfig) -> Self {
        let static_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(static_dir.path().join("index.html"), fixtures::INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(static_dir.path().join("app.js"), fixtures::APP_JS)
            .expect("Failed to write app.js");
        config.static_dir = static_dir.path().to_path_buf();

        let state = AppState::new(config);
        let store = state.store.clone();
        let app = build_router(state);

        Self {
            store,
            app,
            _static_dir: static_dir,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
