use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

use crate::{
    errors::Result,
    http::fetcher::{PageSource, PaginatedFetcher},
    pipeline::Source,
    salary::{LanguageStats, SalaryFields},
};

/// A source definition bound to a page source, ready to be queried per language.
pub struct SourceRun {
    name: String,
    title: String,
    fetcher: PaginatedFetcher,
    salary: SalaryFields,
}

impl SourceRun {
    /// Bind `source` to its HTTP endpoint. Environment-backed headers are resolved here.
    pub fn from_source(source: &Source) -> Result<Self> {
        let page_source = source.page_source()?;
        Ok(Self::with_page_source(source, page_source))
    }

    pub fn with_page_source(source: &Source, page_source: Arc<dyn PageSource>) -> Self {
        let mut fetcher =
            PaginatedFetcher::new(page_source, source.pagination.clone(), &source.items_path);
        if let Some(total_path) = &source.total_path {
            fetcher = fetcher.with_total_path(total_path);
        }

        Self {
            name: source.name.clone(),
            title: source.title().to_string(),
            fetcher,
            salary: source.salary.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn language_stats(&self, language: &str) -> Result<LanguageStats> {
        let outcome = self.fetcher.fetch_all(language).await?;
        let estimates = self.salary.estimate_all(&outcome.items);
        let stats = LanguageStats::from_estimates(outcome.found(), &estimates);

        info!(
            source = %self.name,
            language,
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average = stats.average_salary,
            "language done"
        );
        Ok(stats)
    }
}

/// Per-source results, languages in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceReport {
    pub name: String,
    pub title: String,
    pub stats: IndexMap<String, LanguageStats>,
}

/// Query every source for every language, one request at a time.
///
/// The first failure aborts the whole run; nothing partial is returned.
pub async fn run_report(runs: &[SourceRun], languages: &[String]) -> Result<Vec<SourceReport>> {
    let mut reports: Vec<SourceReport> = runs
        .iter()
        .map(|run| SourceReport {
            name: run.name.clone(),
            title: run.title.clone(),
            stats: IndexMap::with_capacity(languages.len()),
        })
        .collect();

    for language in languages {
        for (run, report) in runs.iter().zip(reports.iter_mut()) {
            let span = info_span!("source", name = %run.name, language = %language);
            let stats = run.language_stats(language).instrument(span).await?;
            report.stats.insert(language.clone(), stats);
        }
    }

    Ok(reports)
}
