//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all recommender-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Recommendation Endpoints
    // ========================================================================

    /// POST /v1/recommend
    pub async fn recommend(&self, query: &str, category: &str, tone: &str) -> Response {
        self.recommend_body(json!({
            "query": query,
            "category": category,
            "tone": tone,
        }))
        .await
    }

    /// POST /v1/recommend with only a query, relying on server defaults
    pub async fn recommend_query_only(&self, query: &str) -> Response {
        self.recommend_body(json!({ "query": query })).await
    }

    /// POST /v1/recommend with an arbitrary JSON body
    pub async fn recommend_body(&self, body: serde_json::Value) -> Response {
        self.client
            .post(format!("{}/v1/recommend", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/categories
    pub async fn categories(&self) -> Response {
        self.client
            .get(format!("{}/v1/categories", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/tones
    pub async fn tones(&self) -> Response {
        self.client
            .get(format!("{}/v1/tones", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    // ========================================================================
    // Server Endpoints
    // ========================================================================

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /health
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }
}
