use std::sync::Arc;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod store;

use crate::config::Config;
use crate::store::Store;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_api=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        store: Arc::new(RwLock::new(Store::with_seed_data())),
        config: Arc::new(config.clone()),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Product API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Route table. Stage order per route is logger → auth → validate → handler;
/// `MethodRouter::layer` only wraps the methods registered before it, which is
/// what scopes auth to the mutating verbs and validation to create/update.
fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Root ────────────────────────────────────────────────────────────
        .route("/", get(handlers::root))

        // ── Products CRUD ───────────────────────────────────────────────────
        .route(
            "/api/products",
            post(handlers::products::create_product)
                .layer(from_fn(middleware::validate::validate_product))
                .layer(from_fn_with_state(
                    state.clone(),
                    middleware::auth::require_api_key,
                ))
                .get(handlers::products::list_products),
        )
        .route(
            "/api/products/:id",
            put(handlers::products::update_product)
                .layer(from_fn(middleware::validate::validate_product))
                .delete(handlers::products::delete_product)
                .layer(from_fn_with_state(
                    state.clone(),
                    middleware::auth::require_api_key,
                ))
                .get(handlers::products::get_product),
        )

        // ── Search & stats ──────────────────────────────────────────────────
        .route("/api/search", get(handlers::products::search_products))
        .route("/api/stats", get(handlers::products::category_stats))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
