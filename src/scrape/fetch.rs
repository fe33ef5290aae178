//! Page fetching over HTTP.

use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{REFERER, USER_AGENT};
use scraper::Html;

use crate::scrape::{ScrapeError, ScrapeResult};

/// Headers sent with every page request. Resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    pub user_agent: String,
    pub referer: String,
}

/// Source of HTML pages.
pub trait PageFetcher {
    /// Return the body of `url`. Anything but HTTP 200 is a [`ScrapeError::Fetch`].
    fn fetch_html(&self, url: &str) -> ScrapeResult<String>;

    /// Fetch `url` and parse it into a document tree.
    fn get_page(&self, url: &str) -> ScrapeResult<Html> {
        let body = self.fetch_html(url)?;
        Ok(Html::parse_document(&body))
    }
}

/// Blocking HTTP fetcher. No retries; timeouts and redirects are reqwest defaults.
pub struct HttpFetcher {
    client: Client,
    headers: RequestHeaders,
}

impl HttpFetcher {
    pub fn new(headers: RequestHeaders) -> ScrapeResult<Self> {
        let client = Client::builder().gzip(true).brotli(true).build()?;
        Ok(Self { client, headers })
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_html(&self, url: &str) -> ScrapeResult<String> {
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.headers.user_agent)
            .header(REFERER, &self.headers.referer)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}
