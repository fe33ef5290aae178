use serde::Deserialize;

/// Configuration options for the CRUD API server (`server` section).
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database holding users, items and price history.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_database_url() -> String {
    "app.db".to_string()
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}
