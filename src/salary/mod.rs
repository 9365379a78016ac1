use serde::Deserialize;
use serde_json::Value;

pub mod stats;

pub use stats::LanguageStats;

const UPPER_ONLY_FACTOR: f64 = 0.8;
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Expected salary from a pair of optional bounds.
///
/// - both bounds → their mean
/// - only the upper bound → 80% of it
/// - only the lower bound → 120% of it
/// - neither → `None`
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(to)) => Some(to * UPPER_ONLY_FACTOR),
        (Some(from), None) => Some(from * LOWER_ONLY_FACTOR),
        (None, None) => None,
    }
}

/// Where a source keeps the salary of one vacancy, as JSON pointers into the item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SalaryFields {
    pub from: String,
    pub to: String,
    pub currency: String,
    pub local_currency: String,
}

impl SalaryFields {
    /// Estimate the salary of one vacancy in local currency.
    ///
    /// Vacancies without a currency, in a foreign currency, or without any bound yield `None`.
    pub fn estimate(&self, vacancy: &Value) -> Option<f64> {
        let currency = vacancy.pointer(&self.currency).and_then(Value::as_str)?;
        if currency != self.local_currency {
            return None;
        }
        predict_salary(bound(vacancy, &self.from), bound(vacancy, &self.to))
    }

    /// All known estimates across `vacancies`, unknowns dropped.
    pub fn estimate_all<'a, I>(&self, vacancies: I) -> Vec<f64>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        vacancies
            .into_iter()
            .filter_map(|vacancy| self.estimate(vacancy))
            .collect()
    }
}

// Zero counts as "not given": SuperJob reports an unknown bound as 0.
fn bound(vacancy: &Value, pointer: &str) -> Option<f64> {
    vacancy
        .pointer(pointer)
        .and_then(Value::as_f64)
        .filter(|v| *v > 0.0)
}
