use anyhow::Result;
use std::time::Duration;

use crate::recommend::Recommender;
use std::sync::Arc;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::{log_requests, make_recommend_routes, state::ServerState, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub books: usize,
    pub indexed_chunks: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: format!("{}-{}", env!("CARGO_PKG_VERSION"), state.hash),
        books: state.recommender.catalog().len(),
        indexed_chunks: state.recommender.indexed_chunks(),
    };
    Json(stats)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

pub fn make_app(config: ServerConfig, recommender: Arc<Recommender>) -> Router {
    let state = ServerState::new(config, recommender);

    let app: Router = Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .with_state(state.clone())
        .nest("/v1", make_recommend_routes(state.clone()));

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(recommender: Arc<Recommender>, config: ServerConfig) -> Result<()> {
    let port = config.port;
    let app = make_app(config, recommender);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}
