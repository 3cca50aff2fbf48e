use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use server_api::submit_contact;
use storage::Storage;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, normalize_database_url, SETTINGS_FILE};

const MAX_CONTACT_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, file_error) = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    if let Some(error) = file_error {
        warn!(file = SETTINGS_FILE, %error, "ignoring unreadable settings file");
    }

    let database_url = normalize_database_url(&settings.database_url);
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;

    let app = build_router(Arc::new(AppState::new(storage)), &settings.contact_route);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, route = %settings.contact_route, "contact server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

fn build_router(state: Arc<AppState>, contact_route: &str) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(contact_route, any(contact))
        .layer(DefaultBodyLimit::max(MAX_CONTACT_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.storage.health_check().await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(error) => {
            error!(%error, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}

/// Always answers 200 with a single envelope, whatever the method or body.
async fn contact(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> impl IntoResponse {
    let body = body.unwrap_or_else(|rejection| {
        warn!(%rejection, "contact body could not be read");
        Bytes::new()
    });
    let outcome = submit_contact(&state.api, method.as_str(), &body).await;
    Json(outcome.envelope)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
