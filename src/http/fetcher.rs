use crate::errors::{Result, SalarytapError};
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span};
use url::Url;

// =============================== Page Source =================================

/// One page of search results for a keyword, as raw JSON.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<Value>;
}

/// Plain GET against a base URL that already carries the fixed parameters.
pub struct HttpPageSource {
    client: ClientWithMiddleware,
    url: Url,
    keyword_param: String,
    page_param: String,
}

impl HttpPageSource {
    pub fn new(
        client: ClientWithMiddleware,
        url: Url,
        keyword_param: impl Into<String>,
        page_param: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url,
            keyword_param: keyword_param.into(),
            page_param: page_param.into(),
        }
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, keyword: &str, page: u64) -> Result<Value> {
        let body = self
            .client
            .get(self.url.clone())
            .query(&[
                (self.keyword_param.as_str(), keyword.to_string()),
                (self.page_param.as_str(), page.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body)
    }
}

// =========================== Pagination types ================================

/// How a source tells that another page exists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pagination {
    /// Boolean at `more_path` in every page.
    MoreFlag { more_path: String },
    /// Total page count at `pages_path`; stop once that many pages were fetched.
    PageCount { pages_path: String },
}

impl Pagination {
    /// A missing flag or page count ends the loop.
    pub fn has_more(&self, body: &Value, pages_fetched: u64) -> bool {
        match self {
            Pagination::MoreFlag { more_path } => body
                .pointer(more_path)
                .and_then(Value::as_bool)
                .unwrap_or(false),
            Pagination::PageCount { pages_path } => body
                .pointer(pages_path)
                .and_then(Value::as_u64)
                .is_some_and(|pages| pages_fetched < pages),
        }
    }
}

// =========================== Fetcher =========================================

pub struct PaginatedFetcher {
    source: Arc<dyn PageSource>,
    pagination: Pagination,
    items_path: String,
    total_path: Option<String>,
}

impl PaginatedFetcher {
    pub fn new(
        source: Arc<dyn PageSource>,
        pagination: Pagination,
        items_path: impl Into<String>,
    ) -> Self {
        Self {
            source,
            pagination,
            items_path: items_path.into(),
            total_path: None,
        }
    }

    pub fn with_total_path(mut self, total_path: impl Into<String>) -> Self {
        self.total_path = Some(total_path.into());
        self
    }

    /// Walk pages 0, 1, 2, ... for `keyword` until the pagination strategy says stop.
    ///
    /// Any failed request aborts the whole fetch.
    pub async fn fetch_all(&self, keyword: &str) -> Result<FetchOutcome> {
        let span = info_span!("fetch.pages", keyword = %keyword, items_path = %self.items_path);
        self.walk_pages(keyword).instrument(span).await
    }

    async fn walk_pages(&self, keyword: &str) -> Result<FetchOutcome> {
        let mut items = Vec::new();
        let mut stats = FetchStats::new();
        let mut page = 0u64;

        let last = loop {
            let body = self.source.fetch_page(keyword, page).await?;
            let page_items = self.page_items(&body, page)?;
            let n = page_items.len();
            items.extend(page_items);
            stats.add_page(n);
            debug!(page, items = n, total_items = stats.total_items, "fetched page");

            page += 1;
            if !self.pagination.has_more(&body, page) {
                break body;
            }
        };

        let reported_total = self
            .total_path
            .as_deref()
            .and_then(|p| last.pointer(p))
            .and_then(Value::as_u64);

        info!(
            pages = stats.pages,
            items = stats.total_items,
            reported_total = ?reported_total,
            "pagination finished"
        );

        Ok(FetchOutcome {
            items,
            reported_total,
            stats,
        })
    }

    fn page_items(&self, body: &Value, page: u64) -> Result<Vec<Value>> {
        body.pointer(&self.items_path)
            .and_then(Value::as_array)
            .cloned()
            .ok_or_else(|| {
                SalarytapError::PaginationError(format!(
                    "page {page} has no array at {}",
                    self.items_path
                ))
            })
    }
}

// ============================== Results ======================================

#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub items: Vec<Value>,
    pub reported_total: Option<u64>,
    pub stats: FetchStats,
}

impl FetchOutcome {
    /// Source-reported total when present, else the number of collected items.
    pub fn found(&self) -> u64 {
        self.reported_total.unwrap_or(self.items.len() as u64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub pages: u64,
    pub total_items: usize,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }
    fn add_page(&mut self, items: usize) {
        self.pages += 1;
        self.total_items += items;
    }
}
