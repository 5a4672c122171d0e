use axum::extract::FromRef;

use crate::recommend::Recommender;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type SharedRecommender = Arc<Recommender>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub recommender: SharedRecommender,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, recommender: SharedRecommender) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            recommender,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for SharedRecommender {
    fn from_ref(input: &ServerState) -> Self {
        input.recommender.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
