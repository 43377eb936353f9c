//! Quote Catalog Server
//!
//! Serves an in-memory quote catalog over HTTP: add, list, filter by author,
//! pick at random and delete by id. Nothing is persisted across restarts.

mod handlers;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, on, MethodFilter},
    Router,
};
use quote_core::QuoteStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use storage::MemoryQuoteStore;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<dyn QuoteStore>,
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|info| {
        error!("PANIC: {}", info);
    }));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Quote Catalog Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();
    info!("Config loaded: bind={}", config.bind_address);

    // Random picks are seeded from the wall clock once, here
    let state = AppState {
        quotes: Arc::new(MemoryQuoteStore::new()),
    };

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server ready to accept connections");
    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}

/// Catalog routes. Unregistered methods answer 405, unknown paths 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/quotes",
            // `get` would also answer HEAD
            on(MethodFilter::GET, handlers::quotes::list)
                .post(handlers::quotes::create)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/quotes/:id",
            delete(handlers::quotes::delete).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

    Config { bind_address }
}
