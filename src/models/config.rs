//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings required to start the HTTP server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound of pooled database connections; r2d2 default when absent.
    #[serde(default)]
    pub database_pool_size: Option<u32>,
}
