//! Menucat Catalog Server
//!
//! Serves the menu item collection that the `menucat` client talks to. Items
//! are kept in memory and lost on restart.
//!
//! # Configuration
//!
//! Environment variables:
//! - `MENUCAT_PORT`: Port to listen on (default: 8080)
//! - `MENUCAT_SEED`: Start with the sample menu (default: true)
//! - `RUST_LOG`: Log filter (default: `menucat=info,menucat_server=info,tower_http=info`)
//!
//! # Endpoints
//!
//! - `GET /health`: Health check
//! - `GET|POST /api/entities`: List or create menu items
//! - `GET|PUT|DELETE /api/entities/{id}`: Fetch, update or delete one item

use menucat::server::{router, AppState, MenuItemRepository, COLLECTION_PATH};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Server configuration
#[derive(Debug, Clone)]
struct Config {
    /// Port to listen on
    port: u16,
    /// Whether to preload the sample menu
    seed: bool,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let port = std::env::var("MENUCAT_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let seed = std::env::var("MENUCAT_SEED")
            .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self { port, seed }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menucat=info,menucat_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let repo = if config.seed {
        MenuItemRepository::seeded().await
    } else {
        MenuItemRepository::new()
    };
    tracing::info!("Loaded {} menu item(s)", repo.find_all().await.len());

    let app = router(AppState::new(Arc::new(repo)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Serving {} on {}", COLLECTION_PATH, addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
