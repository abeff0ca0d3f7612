//! Service settings

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// HTTP server settings, read from `PRODUCTS_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface to bind (`PRODUCTS_HOST`, default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (`PRODUCTS_PORT`, default: 3001)
    pub port: u16,
    /// Deployment environment (`PRODUCTS_ENVIRONMENT`, default: development)
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3001_i64)?
            .set_default("environment", "development")?
            .add_source(Environment::with_prefix("PRODUCTS").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The OpenAPI document is only served in development
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }
}
