use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{Result as CustomResult, SalarytapError};
use crate::http::Http;
use crate::http::fetcher::{HttpPageSource, Pagination};
use crate::salary::SalaryFields;

// ================== Public types ==================

#[derive(Debug, Clone)]
pub struct Config {
    pub sources: Vec<Source>,

    // name -> index (built on deserialize)
    source_ix: HashMap<String, usize>,
}

/// One job-listing API.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub name: String,
    /// Table title in the report; defaults to `name`.
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    /// Query parameter that carries the language name.
    pub keyword_param: String,
    #[serde(default = "default_page_param")]
    pub page_param: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    #[serde(default)]
    pub auth: Option<AuthHeader>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    pub pagination: Pagination,
    /// JSON pointer to the vacancy array of a page.
    pub items_path: String,
    /// JSON pointer to the total vacancy count.
    #[serde(default)]
    pub total_path: Option<String>,
    pub salary: SalaryFields,
}

/// Header whose value is read from an environment variable when the client is built.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthHeader {
    pub header: String,
    pub env: String,
}

fn default_page_param() -> String {
    "page".to_string()
}

impl Source {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn http(&self) -> CustomResult<Http> {
        let mut http = Http::new(self.url.clone());
        for (k, v) in &self.params {
            http = http.param(k, v);
        }
        for (k, v) in &self.headers {
            http = http.header(k, v);
        }
        if let Some(auth) = &self.auth {
            let token = std::env::var(&auth.env).map_err(|_| {
                SalarytapError::ConfigError(format!(
                    "environment variable {} is required by source {}",
                    auth.env, self.name
                ))
            })?;
            http = http.header(&auth.header, token);
        }
        if let Some(secs) = self.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        Ok(http)
    }

    pub fn page_source(&self) -> CustomResult<Arc<HttpPageSource>> {
        let http = self.http()?;
        let client = http.build_client()?;
        let url = http.get_url()?;
        Ok(Arc::new(HttpPageSource::new(
            client,
            url,
            &self.keyword_param,
            &self.page_param,
        )))
    }
}

// ================== Deserialize with indexes ==================

#[derive(Deserialize)]
struct ConfigWire {
    sources: Vec<Source>,
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = ConfigWire::deserialize(deserializer)?;
        let mut cfg = Config {
            sources: wire.sources,
            source_ix: HashMap::new(),
        };
        cfg.build_indexes().map_err(de::Error::custom)?;
        Ok(cfg)
    }
}

// ================== Indexing & getters ==================

impl Config {
    fn build_indexes(&mut self) -> Result<(), String> {
        self.source_ix.clear();
        for (i, s) in self.sources.iter().enumerate() {
            if self.source_ix.insert(s.name.clone(), i).is_some() {
                return Err(format!("Duplicate source name: {}", s.name));
            }
        }
        Ok(())
    }

    pub fn source(&self, name: &str) -> Option<&Source> {
        self.source_ix.get(name).and_then(|&i| self.sources.get(i))
    }

    /// Sources named in `names`, in the given order; all sources when `names` is empty.
    pub fn select(&self, names: &[String]) -> CustomResult<Vec<&Source>> {
        if names.is_empty() {
            return Ok(self.sources.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.source(name).ok_or_else(|| {
                    SalarytapError::ConfigError(format!("source not found in config: {name}"))
                })
            })
            .collect()
    }
}

pub mod run;
