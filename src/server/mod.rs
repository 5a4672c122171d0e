mod config;
mod http_layers;
mod recommend_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::{log_requests, RequestsLoggingLevel};
pub(self) use recommend_routes::make_recommend_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::run_server;
