//! Layered configuration loading shared by both binaries.
//!
//! Sources, lowest precedence first: `config/default.yaml` (optional), then
//! environment variables such as `PRICEWATCH__SERVER__PORT=9000`. A `.env`
//! file is read into the environment beforehand.

use config::{Config, ConfigError, Environment, File};
use serde::de::DeserializeOwned;

/// Default location of the YAML configuration file, without extension.
pub const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Load one top-level section (`server`, `scraper`) of the configuration.
///
/// A missing section deserializes from an empty table, so every field falls
/// back to its serde default.
pub fn load_section<T: DeserializeOwned>(section: &str) -> Result<T, ConfigError> {
    dotenvy::dotenv().ok();

    let settings = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
        .add_source(Environment::with_prefix("PRICEWATCH").separator("__"))
        .build()?;

    match settings.get::<T>(section) {
        Err(ConfigError::NotFound(_)) => {
            Config::builder().build()?.try_deserialize::<T>()
        }
        other => other,
    }
}
