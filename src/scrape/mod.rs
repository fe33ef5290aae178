//! Product scraper: fetch a page, parse it into a [`ScrapedProduct`] and
//! append a price observation to the local store.
//!
//! This side shares nothing with the users/items API store.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod fetch;
pub mod parse;
pub mod store;
pub mod user_agent;

use fetch::PageFetcher;

/// Errors raised while scraping or persisting products.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The server answered with anything other than HTTP 200.
    #[error("Failed to load page: {url} (status {status})")]
    Fetch { url: String, status: u16 },
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The search url could not be built from the base url.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    /// A CSS selector failed to parse.
    #[error("invalid selector {0}")]
    Selector(String),
    /// No `products` row exists for the url whose price is being saved.
    #[error("no stored product with url {url}")]
    Lookup { url: String },
    /// The SQLite file could not be opened.
    #[error("failed to open product store: {0}")]
    Connection(#[from] diesel::ConnectionError),
    /// A statement against the product store failed.
    #[error("product store error: {0}")]
    Store(#[from] diesel::result::Error),
}

/// Convenient alias for scraper results.
pub type ScrapeResult<T> = Result<T, ScrapeError>;

/// A product as read from a page. Values are kept as the page shows them;
/// a field the page lacks is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedProduct {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub url: String,
    pub image: String,
}

/// Fetch-and-parse entry points over any [`PageFetcher`].
pub struct ProductScraper<F> {
    fetcher: F,
    base_url: String,
}

impl<F: PageFetcher> ProductScraper<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Run a site search and return every result on the first page.
    pub fn products_from_search(&self, query: &str) -> ScrapeResult<Vec<ScrapedProduct>> {
        let url = parse::search_url(&self.base_url, query)?;
        let page = self.fetcher.get_page(&url)?;
        let products = parse::parse_search_results(&page, &self.base_url)?;
        log::debug!("Search {query:?} returned {} products", products.len());
        Ok(products)
    }

    /// Read a single product page.
    pub fn product_from_url(&self, url: &str) -> ScrapeResult<ScrapedProduct> {
        let page = self.fetcher.get_page(url)?;
        parse::parse_product_page(&page, url)
    }
}
