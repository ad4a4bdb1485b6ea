//! End-to-end tests for the summary-to-CSV conversion.

use k6_cid_report::{generate, ReportConfig, ReportError};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn trend(avg: f64) -> Value {
    json!({ "type": "trend", "values": {
        "avg": avg, "min": 1, "med": avg, "max": 100, "p(90)": 90, "p(95)": 95
    }})
}

fn rate(rate: f64) -> Value {
    json!({ "type": "rate", "values": { "rate": rate, "passes": 3, "fails": 1 } })
}

fn fetch_summary(lassie_ttfb: f64) -> Value {
    json!({ "metrics": {
        "ttfb_kubo": trend(50.0),
        "megabytes_per_second_kubo": trend(5.0),
        "success_kubo": rate(0.75),
        "ttfb_lassie": trend(lassie_ttfb),
        "megabytes_per_second_lassie": trend(2.0),
        "success_lassie": rate(1.0),
    }})
}

fn find_provs_summary(indexer_avg: f64) -> Value {
    json!({ "metrics": {
        "provider_rate_kubo": trend(4.0),
        "success_kubo": rate(0.5),
        "provider_rate_indexer": trend(indexer_avg),
        "success_indexer": rate(1.0),
    }})
}

fn write_run(out: &Path, test: &str, file: &str, summary: &Value) {
    let dir = out.join(test);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), serde_json::to_string_pretty(summary).unwrap()).unwrap();
}

fn config_for(root: &TempDir) -> ReportConfig {
    ReportConfig {
        out_dir: root.path().join("out"),
        find_provs_csv: root.path().join("results/results_find_provs.csv"),
        fetch_csv: root.path().join("results/results_fetch.csv"),
        ..ReportConfig::default()
    }
}

fn first_fields(csv: &str, column: usize) -> Vec<String> {
    csv.lines()
        .skip(1)
        .map(|line| line.split(',').nth(column).unwrap().to_string())
        .collect()
}

#[test]
fn test_generate_both_tables() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);
    let out = &config.out_dir;

    write_run(out, "find provs", "20vu_2024-01-01T00:00:00.000Z.json", &find_provs_summary(20.0));
    write_run(out, "find provs", "5vu_2024-01-01T00:00:00.000Z.json", &find_provs_summary(5.0));
    write_run(out, "fetch", "10vu_2024-01-01T00:00:00.000Z.json", &fetch_summary(10.0));
    fs::write(out.join("README.txt"), "not a test directory").unwrap();

    let written = generate(&config).unwrap();
    assert_eq!(written.len(), 2);
    assert!(written.contains(&config.find_provs_csv));
    assert!(written.contains(&config.fetch_csv));

    let find_provs = fs::read_to_string(&config.find_provs_csv).unwrap();
    assert!(find_provs.starts_with("Service,Providers Found Avg,"));
    assert_eq!(first_fields(&find_provs, 0), vec!["Indexer Query", "Indexer Query"]);
    // ordered by VU count, not by file name
    assert_eq!(first_fields(&find_provs, 1), vec!["5.0", "20.0"]);

    let fetch = fs::read_to_string(&config.fetch_csv).unwrap();
    assert!(fetch.starts_with("Service,Latency Avg (ms),"));
    assert_eq!(
        fetch.lines().nth(1).unwrap(),
        "Lassie Fetch,10.0,1,10.0,100,90,95,2.0,1,2.0,100,90,95,1.0"
    );
}

#[test]
fn test_generate_with_kubo_rows() {
    let root = TempDir::new().unwrap();
    let mut config = config_for(&root);
    config.include_kubo_fetch = true;
    config.include_kubo_find_provs = true;

    write_run(&config.out_dir, "find provs", "1vu_t.json", &find_provs_summary(3.0));
    write_run(&config.out_dir, "fetch", "1vu_t.json", &fetch_summary(7.0));

    generate(&config).unwrap();

    let find_provs = fs::read_to_string(&config.find_provs_csv).unwrap();
    assert_eq!(
        first_fields(&find_provs, 0),
        vec!["Kubo Find Provs", "Indexer Query"]
    );

    let fetch = fs::read_to_string(&config.fetch_csv).unwrap();
    assert_eq!(first_fields(&fetch, 0), vec!["Kubo get", "Lassie Fetch"]);
    assert_eq!(first_fields(&fetch, 13), vec!["0.75", "1.0"]);
}

#[test]
fn test_range_runs_sorted_by_size() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);

    write_run(&config.out_dir, "range-requests", "4vu_2048B_t.json", &fetch_summary(3.0));
    write_run(&config.out_dir, "range-requests", "4vu_1024B_t.json", &fetch_summary(2.0));
    write_run(&config.out_dir, "range-requests", "2vu_4096B_t.json", &fetch_summary(1.0));

    generate(&config).unwrap();

    let fetch = fs::read_to_string(&config.fetch_csv).unwrap();
    assert_eq!(first_fields(&fetch, 1), vec!["1.0", "2.0", "3.0"]);
    assert!(!config.find_provs_csv.exists());
}

#[test]
fn test_fetch_directories_share_one_table() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);

    write_run(&config.out_dir, "b-fetch", "1vu_t.json", &fetch_summary(2.0));
    write_run(&config.out_dir, "a-fetch", "1vu_t.json", &fetch_summary(1.0));

    generate(&config).unwrap();

    let fetch = fs::read_to_string(&config.fetch_csv).unwrap();
    assert_eq!(fetch.lines().filter(|l| l.starts_with("Service")).count(), 1);
    assert_eq!(first_fields(&fetch, 1), vec!["1.0", "2.0"]);
}

#[test]
fn test_unrecognised_files_are_skipped() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);

    write_run(&config.out_dir, "fetch", "1vu_t.json", &fetch_summary(1.0));
    fs::write(config.out_dir.join("fetch").join("notes.json"), "{ not json").unwrap();

    generate(&config).unwrap();

    let fetch = fs::read_to_string(&config.fetch_csv).unwrap();
    assert_eq!(fetch.lines().count(), 2);
}

#[test]
fn test_invalid_json_is_reported() {
    let root = TempDir::new().unwrap();
    let config = config_for(&root);

    let dir = config.out_dir.join("fetch");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("1vu_t.json"), "{ truncated").unwrap();

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, ReportError::Json { .. }));
    assert!(err.to_string().contains("1vu_t.json"));
}

#[test]
fn test_missing_metric_is_reported() {
    let root = TempDir::new().unwrap();
    let mut config = config_for(&root);
    config.include_kubo_find_provs = true;

    let summary = json!({ "metrics": {
        "provider_rate_indexer": trend(1.0),
        "success_indexer": rate(1.0),
    }});
    write_run(&config.out_dir, "find provs", "1vu_t.json", &summary);

    let err = generate(&config).unwrap_err();
    match err {
        ReportError::MissingMetric { metric, .. } => assert_eq!(metric, "provider_rate_kubo"),
        other => panic!("unexpected error: {other}"),
    }
}
