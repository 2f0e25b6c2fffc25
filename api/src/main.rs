//! Webinar API Server
//!
//! Lets organizers schedule webinars and adjust their seat capacity.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    run_migrations, InMemoryWebinarRepository, PostgresWebinarRepository, SystemClock,
    UuidGenerator, WebinarStore,
};
use app::{ChangeSeats, OrganizeWebinar};
use config::{Config, StoreKind};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub organize_webinar: Arc<OrganizeWebinar<WebinarStore, SystemClock, UuidGenerator>>,
    pub change_seats: Arc<ChangeSeats<WebinarStore>>,
    pub webinars: Arc<WebinarStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(webinars: Arc<WebinarStore>, config: Config) -> Self {
        let organize_webinar = Arc::new(OrganizeWebinar::new(
            webinars.clone(),
            Arc::new(SystemClock),
            Arc::new(UuidGenerator),
        ));
        let change_seats = Arc::new(ChangeSeats::new(webinars.clone()));

        Self {
            organize_webinar,
            change_seats,
            webinars,
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over the given state
pub fn router(state: AppState) -> Router {
    let webinar_routes = Router::new()
        .route("/webinars", post(handlers::organize_webinar))
        .route("/webinars/:id", get(handlers::get_webinar))
        .route("/webinars/:id/seats", post(handlers::change_seats))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::principal_middleware,
        ));

    Router::new()
        // Health check (no principal)
        .route("/health", get(health))
        .merge(webinar_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Connect the repository selected by configuration
async fn connect_store(config: &Config) -> anyhow::Result<WebinarStore> {
    match config.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory webinar store, data will not survive a restart");
            Ok(WebinarStore::InMemory(InMemoryWebinarRepository::new()))
        }
        StoreKind::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            if config.run_migrations {
                run_migrations(&db)
                    .await
                    .context("Failed to apply database schema")?;
                tracing::info!("Database schema up to date");
            }

            Ok(WebinarStore::Postgres(PostgresWebinarRepository::new(db)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,webinar_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting webinar API...");

    let config = Config::from_env()?;

    let store = connect_store(&config).await?;
    tracing::info!(backend = store.backend(), "Webinar store ready");

    let state = AppState::new(Arc::new(store), config.clone());
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
