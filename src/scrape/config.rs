use serde::Deserialize;

use crate::scrape::fetch::RequestHeaders;
use crate::scrape::user_agent::resolve_user_agent;

/// Scraper settings (`scraper` section of the configuration).
#[derive(Clone, Debug, Deserialize)]
pub struct ScraperConfig {
    /// SQLite file receiving `products` and `product_prices` rows.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Site root used to build search urls and to absolutize result links.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Fixed user agent. Unset means a random browser agent per process.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ScraperConfig {
    /// Resolve the header set sent with every request.
    ///
    /// Call once at start-up; each call may pick a different random agent.
    pub fn headers(&self) -> RequestHeaders {
        RequestHeaders {
            user_agent: resolve_user_agent(self.user_agent.as_deref()),
            referer: self.referer.clone(),
        }
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            base_url: default_base_url(),
            referer: default_referer(),
            user_agent: None,
        }
    }
}

fn default_database_path() -> String {
    "products.db".to_string()
}

fn default_base_url() -> String {
    "https://www.amazon.com".to_string()
}

fn default_referer() -> String {
    "https://www.amazon.com/".to_string()
}
