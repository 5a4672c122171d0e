use super::RequestsLoggingLevel;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub requests_logging_level: RequestsLoggingLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            requests_logging_level: RequestsLoggingLevel::default(),
        }
    }
}
