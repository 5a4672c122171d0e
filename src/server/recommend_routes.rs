//! Recommendation API routes

use crate::recommend::Tone;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use super::state::{ServerState, SharedRecommender};

fn default_category() -> String {
    crate::recommend::ALL_CATEGORIES_LABEL.to_string()
}

#[derive(Deserialize)]
struct RecommendBody {
    pub query: String,

    /// Category label to filter on; "All" disables the filter.
    #[serde(default = "default_category")]
    pub category: String,

    /// Emotional tone to re-sort by; "All" keeps retrieval order.
    #[serde(default)]
    pub tone: Tone,
}

async fn recommend(
    State(recommender): State<SharedRecommender>,
    Json(payload): Json<RecommendBody>,
) -> impl IntoResponse {
    match recommender
        .recommend(&payload.query, &payload.category, payload.tone)
        .await
    {
        Ok(items) => Json(items).into_response(),
        Err(err) => {
            error!("Recommendation failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": format!("{}", err)})),
            )
                .into_response()
        }
    }
}

async fn get_categories(State(recommender): State<SharedRecommender>) -> impl IntoResponse {
    Json(recommender.category_labels())
}

async fn get_tones() -> impl IntoResponse {
    Json(Tone::labels())
}

pub fn make_recommend_routes(state: ServerState) -> Router {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/categories", get(get_categories))
        .route("/tones", get(get_tones))
        .with_state(state)
}
