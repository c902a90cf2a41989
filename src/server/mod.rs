//! Web shell for the capture screen.

mod handlers;
mod state;
mod static_files;

use axum::routing::{get, post};
use axum::Router;
use state::AppState;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;

use crate::position::PositionProvider;
use crate::store::CoordinateStore;
use crate::workflow::Workflow;

pub fn build_router(
    provider: Box<dyn PositionProvider + Send>,
    store: Arc<dyn CoordinateStore + Send + Sync>,
) -> Router {
    let state = Arc::new(AppState {
        workflow: Mutex::new(Workflow::sensor(provider, store.clone())),
        store,
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::style))
        .route("/app.js", get(handlers::script))
        .route("/api/position", get(handlers::position))
        .route("/api/coordinates", post(handlers::submit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(
    host: &str,
    port: u16,
    provider: Box<dyn PositionProvider + Send>,
    store: Arc<dyn CoordinateStore + Send + Sync>,
) {
    let app = build_router(provider, store);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Muure Positioner listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use crate::position::NetPositionProvider;
    use crate::store::TableStore;

    #[test]
    fn test_router_builds_with_live_adapters() {
        let config = StoreConfig {
            url: "https://demo.supabase.co".into(),
            api_key: "anon-key".into(),
            table: "coordinates".into(),
        };
        let store = Arc::new(TableStore::new(&config));
        let _router = build_router(Box::new(NetPositionProvider::new()), store);
    }
}
