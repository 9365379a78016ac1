// End-to-end: scripted pages → SourceRun → run_report → table text

use crate::common::ScriptedPages;
use salarytap::config::load_default_config;
use salarytap::pipeline::run::{SourceRun, run_report};
use salarytap::salary::LanguageStats;
use salarytap::writer::{ReportWriter, TableWriter};
use serde_json::json;
use std::sync::Arc;

fn superjob_pages() -> ScriptedPages {
    ScriptedPages::new()
        .keyword(
            "Python",
            vec![
                json!({
                    "objects": [
                        {"payment_from": 50000, "payment_to": 100000, "currency": "rub"},
                        {"payment_from": 0, "payment_to": 100000, "currency": "rub"},
                    ],
                    "more": true,
                    "total": 4
                }),
                json!({
                    "objects": [
                        {"payment_from": 0, "payment_to": 0, "currency": "rub"},
                        {"payment_from": 1000, "payment_to": 0, "currency": "usd"},
                    ],
                    "more": false,
                    "total": 4
                }),
            ],
        )
        .keyword(
            "Haskell",
            vec![json!({"objects": [], "more": false, "total": 0})],
        )
}

fn headhunter_pages() -> ScriptedPages {
    ScriptedPages::new()
        .keyword(
            "Python",
            vec![
                json!({
                    "items": [
                        {"salary": {"from": 50000, "to": null, "currency": "RUR"}},
                        {"salary": null},
                    ],
                    "pages": 2,
                    "found": 250
                }),
                json!({
                    "items": [
                        {"salary": {"from": null, "to": 100000, "currency": "RUR"}},
                        {"salary": {"from": 4000, "to": 5000, "currency": "EUR"}},
                    ],
                    "pages": 2,
                    "found": 250
                }),
            ],
        )
        .keyword(
            "Haskell",
            vec![json!({
                "items": [{"salary": null}],
                "pages": 1,
                "found": 1
            })],
        )
}

fn runs(sj: Arc<ScriptedPages>, hh: Arc<ScriptedPages>) -> Vec<SourceRun> {
    let cfg = load_default_config().unwrap();
    vec![
        SourceRun::with_page_source(cfg.source("superjob").unwrap(), sj),
        SourceRun::with_page_source(cfg.source("headhunter").unwrap(), hh),
    ]
}

#[tokio::test]
async fn test_report_per_source_and_language() {
    let runs = runs(Arc::new(superjob_pages()), Arc::new(headhunter_pages()));
    let languages = vec!["Python".to_string(), "Haskell".to_string()];

    let reports = run_report(&runs, &languages).await.unwrap();
    assert_eq!(reports.len(), 2);

    let sj = &reports[0];
    assert_eq!(sj.title, "SuperJob Moscow");
    assert_eq!(
        sj.stats["Python"],
        LanguageStats {
            vacancies_found: 4,
            vacancies_processed: 2,
            // (75000 + 80000) / 2
            average_salary: 77500,
        }
    );
    assert_eq!(sj.stats["Haskell"], LanguageStats::default());

    let hh = &reports[1];
    assert_eq!(hh.title, "HH Moscow");
    assert_eq!(
        hh.stats["Python"],
        LanguageStats {
            vacancies_found: 250,
            vacancies_processed: 2,
            // (60000 + 80000) / 2
            average_salary: 70000,
        }
    );
    assert_eq!(
        hh.stats["Haskell"],
        LanguageStats {
            vacancies_found: 1,
            vacancies_processed: 0,
            average_salary: 0,
        }
    );

    let order: Vec<&str> = hh.stats.keys().map(String::as_str).collect();
    assert_eq!(order, ["Python", "Haskell"]);
}

#[tokio::test]
async fn test_languages_are_queried_sequentially() {
    let sj = Arc::new(superjob_pages());
    let hh = Arc::new(headhunter_pages());
    let runs = runs(sj.clone(), hh.clone());

    run_report(&runs, &["Haskell".to_string(), "Python".to_string()])
        .await
        .unwrap();

    let sj_log: Vec<(String, u64)> = sj.request_log();
    assert_eq!(
        sj_log,
        vec![
            ("Haskell".to_string(), 0),
            ("Python".to_string(), 0),
            ("Python".to_string(), 1),
        ]
    );
    assert_eq!(hh.request_log().len(), 3);
}

#[tokio::test]
async fn test_one_failing_source_aborts_the_run() {
    // HeadHunter knows nothing about Rust, so its page source errors.
    let runs = runs(
        Arc::new(ScriptedPages::new().keyword(
            "Rust",
            vec![json!({"objects": [], "more": false, "total": 0})],
        )),
        Arc::new(headhunter_pages()),
    );

    assert!(run_report(&runs, &["Rust".to_string()]).await.is_err());
}

#[tokio::test]
async fn test_reports_render_as_tables() {
    let runs = runs(Arc::new(superjob_pages()), Arc::new(headhunter_pages()));
    let reports = run_report(&runs, &["Python".to_string()]).await.unwrap();

    let mut writer = TableWriter::new(Vec::new());
    writer.write_all(&reports).unwrap();
    let text = String::from_utf8(writer.into_inner()).unwrap();

    let expected = "\
+SuperJob Moscow-------+-----------------+---------------------+----------------+
| Programming language | Vacancies found | Vacancies processed | Average salary |
+----------------------+-----------------+---------------------+----------------+
| Python               | 4               | 2                   | 77500          |
+----------------------+-----------------+---------------------+----------------+
+HH Moscow-------------+-----------------+---------------------+----------------+
| Programming language | Vacancies found | Vacancies processed | Average salary |
+----------------------+-----------------+---------------------+----------------+
| Python               | 250             | 2                   | 70000          |
+----------------------+-----------------+---------------------+----------------+
";
    assert_eq!(text, expected);
}
