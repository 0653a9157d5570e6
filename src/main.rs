use std::sync::Arc;

use wishlist_api::database::manager::DatabaseManager;
use wishlist_api::database::postgres::PgPlaceStore;
use wishlist_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = wishlist_api::config::config();
    tracing::info!("Starting Wishlist API in {:?} mode", config.environment);

    let pool = DatabaseManager::pool()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    let state = AppState::new(Arc::new(PgPlaceStore::new(pool)));
    let app = wishlist_api::app(state);

    // Allow tests or deployments to override port via env
    let port = std::env::var("WISHLIST_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Wishlist API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
