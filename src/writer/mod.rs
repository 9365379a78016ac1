use std::io::Write;

use crate::{errors::Result, pipeline::run::SourceReport};

pub mod ascii_table;

pub use ascii_table::AsciiTable;

pub const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

pub trait ReportWriter {
    /// Write one source's report.
    fn write_report(&mut self, report: &SourceReport) -> Result<()>;

    fn write_all(&mut self, reports: &[SourceReport]) -> Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }
}

/// Renders each report as an [`AsciiTable`] titled after its source.
pub struct TableWriter<W: Write> {
    out: W,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TableWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

pub fn report_table(report: &SourceReport) -> AsciiTable {
    let mut rows = Vec::with_capacity(report.stats.len() + 1);
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());
    for (language, stats) in &report.stats {
        rows.push(vec![
            language.clone(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats.average_salary.to_string(),
        ]);
    }
    AsciiTable::new(rows).with_title(report.title.clone())
}

impl<W: Write> ReportWriter for TableWriter<W> {
    fn write_report(&mut self, report: &SourceReport) -> Result<()> {
        writeln!(self.out, "{}", report_table(report).render())?;
        self.out.flush()?;
        Ok(())
    }
}
