#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl LanguageStats {
    /// Reduce the known estimates of one language.
    ///
    /// `vacancies_found` is the source-reported total, not the number of estimates. The average is
    /// truncated to whole currency units and is 0 when nothing could be estimated.
    pub fn from_estimates(vacancies_found: u64, estimates: &[f64]) -> Self {
        let processed = estimates.len();
        let average_salary = if processed == 0 {
            0
        } else {
            (estimates.iter().sum::<f64>() / processed as f64) as u64
        };

        Self {
            vacancies_found,
            vacancies_processed: processed as u64,
            average_salary,
        }
    }
}
