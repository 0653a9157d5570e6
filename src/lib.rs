use axum::{http::HeaderValue, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod validation;

#[cfg(test)]
pub mod testing;

use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes())
        // Protected API
        .merge(api_routes(state))
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS layer driven by the security config: disabled entirely, or
/// restricted to the configured origins.
fn cors_layer() -> CorsLayer {
    let security = &config::config().security;
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn auth_public_routes() -> Router {
    use axum::routing::post;

    Router::new().route("/auth/login", post(handlers::auth::login))
}

fn api_routes(state: AppState) -> Router {
    use axum::routing::post;
    use handlers::places;

    Router::new()
        .route("/api/auth/whoami", get(handlers::auth::whoami))
        // Collection-level operations
        .route(
            "/api/places",
            get(places::list_get).post(places::list_post),
        )
        .route("/api/places/visited", get(places::visited_get))
        // Record-level operations (owner-gated)
        .route(
            "/api/places/:id",
            get(places::record_get).delete(places::record_delete),
        )
        .route("/api/places/:id/visit", post(places::record_visit))
        .route("/api/places/:id/review", post(places::record_review))
        .layer(axum::middleware::from_fn(
            middleware::auth::jwt_auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Wishlist API",
            "version": version,
            "description": "Personal travel wishlist API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "login": "/auth/login (public - token acquisition)",
                "whoami": "/api/auth/whoami (protected)",
                "places": "/api/places[/:id] (protected)",
                "visited": "/api/places/visited (protected)",
                "visit": "/api/places/:id/visit (protected)",
                "review": "/api/places/:id/review (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
