//! HTTP surface
//!
//! Every request logs in with a fresh session on a blocking worker thread.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::api::ClientSettings;
use crate::credentials::Credentials;
use crate::error::{ApiError, AppError};
use crate::output::to_pretty_json;
use crate::pipeline;

#[derive(Clone)]
pub(crate) struct ServerState {
    settings: Arc<ClientSettings>,
    credentials: Arc<Credentials>,
}

impl ServerState {
    pub(crate) fn new(settings: ClientSettings, credentials: Credentials) -> Self {
        Self {
            settings: Arc::new(settings),
            credentials: Arc::new(credentials),
        }
    }
}

pub(crate) fn router(state: ServerState) -> Router {
    Router::new()
        .route("/workouts.csv", get(export_csv))
        .route("/workouts.json", get(export_json))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) async fn serve(addr: SocketAddr, state: ServerState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::Server)?;
    let local = listener.local_addr().map_err(AppError::Server)?;
    info!(%local, "listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutting down");
}

/// Run a blocking pipeline call off the async runtime.
async fn run_blocking<T, F>(state: ServerState, call: F) -> Result<T, String>
where
    T: Send + 'static,
    F: FnOnce(&ClientSettings, &Credentials) -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&state.settings, &state.credentials))
        .await
        .map_err(|e| format!("worker failed: {e}"))?
        .map_err(|e| {
            if e.is_auth() {
                warn!("upstream login rejected");
            }
            e.to_string()
        })
}

fn failure(message: String) -> Response {
    error!("request failed: {message}");
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

async fn export_csv(State(state): State<ServerState>) -> Response {
    match run_blocking(state, pipeline::fetch_csv).await {
        Ok(csv) => ([(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(message) => failure(message),
    }
}

async fn export_json(State(state): State<ServerState>) -> Response {
    let records = match run_blocking(state, pipeline::fetch_records).await {
        Ok(records) => records,
        Err(message) => return failure(message),
    };
    match to_pretty_json(&records) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => failure(e.to_string()),
    }
}

async fn health() -> &'static str {
    "ok"
}
