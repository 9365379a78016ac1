use indexmap::IndexMap;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;
use url::Url;

use crate::errors::Result;
use crate::utils::http_logging;

pub mod fetcher;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct Http {
    url: String,
    params: Option<IndexMap<String, String>>,
    headers: Option<IndexMap<String, String>>,
    timeout: Option<Duration>,
}

impl Http {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: None,
            headers: None,
            timeout: None,
        }
    }
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let map = self.params.get_or_insert_with(IndexMap::new);
        map.insert(key.into(), value.into());
        self
    }
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let map = self.headers.get_or_insert_with(IndexMap::new);
        map.insert(key.into(), value.into());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Client with the configured default headers and request logging.
    ///
    /// Header names and values are validated here, so a bad token fails before any request is sent.
    pub fn build_client(&self) -> Result<ClientWithMiddleware> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        if let Some(header_map) = &self.headers {
            for (key, value) in header_map {
                let name = HeaderName::from_bytes(key.as_bytes())?;
                let mut val = HeaderValue::from_str(value)?;
                if name != USER_AGENT {
                    val.set_sensitive(true);
                }
                headers.insert(name, val);
            }
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(http_logging::build_client_with_logging(builder.build()?))
    }

    /// Base URL with the fixed query parameters applied.
    pub fn get_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.url)?;
        if let Some(params) = &self.params {
            if !params.is_empty() {
                url.query_pairs_mut()
                    .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
        }
        Ok(url)
    }
}
