use std::time::Instant;

use crate::config::{load_config_from_path, load_default_config};
use crate::errors::Result;
use crate::pipeline::run::{SourceRun, run_report};
use crate::writer::{ReportWriter, TableWriter};
use clap::Parser;
use tracing::{debug, info, instrument};

/// CLI
#[derive(Parser, Debug)]
#[command(
    name = "salarytap",
    version,
    about = "Average salaries per programming language from SuperJob and HeadHunter.",
    long_about = "Average salaries per programming language from SuperJob and HeadHunter.\n\n\
Every vacancy matching a language is fetched page by page, its salary is estimated\n\
from the advertised bounds (rubles only), and one table per job site is printed.\n\n\
Example:\n  salarytap -l Python Java Go\n\n\
SuperJob needs an API key in SUPERJOB_TOKEN (a .env file is read if present)."
)]
pub struct Cli {
    /// Programming languages to search for
    #[arg(
        long = "list",
        short = 'l',
        value_name = "LANG",
        num_args = 1..,
        default_value = "Python"
    )]
    pub languages: Vec<String>,

    /// YAML file with source definitions (defaults to the built-in SuperJob/HeadHunter set)
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<String>,

    /// Only query the named sources (repeatable)
    #[arg(long = "source", short = 's', value_name = "NAME")]
    pub sources: Vec<String>,
}

#[instrument(skip_all, fields(languages = cli.languages.len()))]
pub async fn run_pipeline(cli: &Cli) -> Result<()> {
    info!("starting salarytap run");
    let t0 = Instant::now();

    let cfg = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_default_config()?,
    };
    info!(sources = cfg.sources.len(), "loaded source definitions");

    // Resolve every client up front so a missing token fails before any request.
    let runs = cfg
        .select(&cli.sources)?
        .into_iter()
        .map(SourceRun::from_source)
        .collect::<Result<Vec<_>>>()?;
    debug!(sources = ?runs.iter().map(SourceRun::name).collect::<Vec<_>>(), "selected sources");

    let reports = run_report(&runs, &cli.languages).await?;
    TableWriter::stdout().write_all(&reports)?;

    info!(total_ms = t0.elapsed().as_millis() as u64, "all sources finished");
    Ok(())
}
