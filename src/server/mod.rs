//! HTTP service.

mod handlers;
mod middleware;

pub use middleware::{locale_redirect, LocaleRouting, DEFAULT_EXCLUDED};

use crate::config::Config;
use crate::i18n::{MessageCatalog, MessageValidator};
use crate::render::CHROME_KEYS;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<MessageCatalog>,
    pub routing: Arc<LocaleRouting>,
}

impl AppState {
    pub fn new(config: Config, catalog: MessageCatalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            routing: Arc::new(LocaleRouting::default()),
        }
    }
}

/// Load the message catalog named by the config and log its validation.
///
/// Falls back to the embedded copies when `MESSAGES_DIR` is unset. A missing
/// file for an enabled locale is fatal.
pub fn load_catalog(config: &Config) -> Result<MessageCatalog> {
    let catalog = match &config.messages_dir {
        Some(dir) => {
            info!("Loading messages from {}", dir);
            MessageCatalog::load(Path::new(dir))?
        }
        None => MessageCatalog::embedded().context("Embedded messages are invalid")?,
    };

    let mut report = MessageValidator::validate(&catalog);
    report
        .errors
        .extend(MessageValidator::require_keys(&catalog, CHROME_KEYS.iter().copied()).errors);
    for e in &report.errors {
        error!("Message catalog: {}", e);
    }
    for w in &report.warnings {
        warn!("Message catalog: {}", w);
    }
    info!(
        "✓ Loaded messages for {} locales ({} errors, {} warnings)",
        catalog.len(),
        report.errors.len(),
        report.warnings.len()
    );

    Ok(catalog)
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/manifest.webmanifest", get(handlers::manifest))
        .route("/robots.txt", get(handlers::robots))
        .route("/ads.txt", get(handlers::ads))
        .route("/calculator", get(handlers::calculator))
        .route("/api/health", get(handlers::health))
        .nest_service("/static", static_dir)
        .route("/:locale", get(handlers::home))
        .route("/:locale/:page", get(handlers::subpage))
        .fallback(handlers::fallback)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            locale_redirect,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: Config) -> Result<()> {
    let catalog = load_catalog(&config)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let app = build_router(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
