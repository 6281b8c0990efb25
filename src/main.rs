// src/main.rs
mod config;
mod database;
mod dtos;
mod error;
mod handlers;
mod managers;
mod models;
mod routes;
mod state;
mod validation;

use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

use crate::config::Config;

/// Ports tried after the configured one when it is already taken.
const PORT_FALLBACKS: u16 = 20;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Open (and create if needed) the store
    let db_pool = match database::create_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, url = %config.database_url, "Failed to open database");
            return;
        }
    };
    tracing::info!(url = %config.database_url, "Database ready");

    let app = routes::app(state::AppState::new(db_pool));

    let Some((listener, addr)) = bind(&config).await else {
        tracing::error!(
            "Failed to bind to any port starting at {} on {}",
            config.port,
            config.host
        );
        return;
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}

/// Binds the configured port, or the first free one of the next few.
async fn bind(config: &Config) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0u16..=PORT_FALLBACKS {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Some((listener, addr)),
            Err(e) => {
                if offset == 0 {
                    tracing::warn!(%addr, error = %e, "Port in use, trying next");
                }
            }
        }
    }
    None
}
