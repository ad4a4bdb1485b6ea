use serde_json::Value;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Trend statistics copied from each trend metric, in column order.
const TREND_STATS: [&str; 6] = ["avg", "min", "med", "max", "p(90)", "p(95)"];

const FETCH_HEADER: &[&str] = &[
    "Service",
    "Latency Avg (ms)",
    "Latency Min (ms)",
    "Latency Med (ms)",
    "Latency Max (ms)",
    "Latency P(90) (ms)",
    "Latency P(95) (ms)",
    "Bandwidth (MB/s) Avg",
    "Bandwidth (MB/s) Min",
    "Bandwidth (MB/s) Med",
    "Bandwidth (MB/s) Max",
    "Bandwidth (MB/s) P(90)",
    "Bandwidth (MB/s) P(95)",
    "Success Rate",
];

const FIND_PROVS_HEADER: &[&str] = &[
    "Service",
    "Providers Found Avg",
    "Providers Found Min",
    "Providers Found Med",
    "Providers Found Max",
    "Providers Found P(90)",
    "Providers Found P(95)",
    "Success Rate",
];

/// One row of a table: a service label, its trend metrics and its success rate metric.
struct ServiceRow {
    label: &'static str,
    trends: &'static [&'static str],
    success: &'static str,
}

const KUBO_FETCH: ServiceRow = ServiceRow {
    label: "Kubo get",
    trends: &["ttfb_kubo", "megabytes_per_second_kubo"],
    success: "success_kubo",
};

const LASSIE_FETCH: ServiceRow = ServiceRow {
    label: "Lassie Fetch",
    trends: &["ttfb_lassie", "megabytes_per_second_lassie"],
    success: "success_lassie",
};

const KUBO_FIND_PROVS: ServiceRow = ServiceRow {
    label: "Kubo Find Provs",
    trends: &["provider_rate_kubo"],
    success: "success_kubo",
};

const INDEXER_FIND_PROVS: ServiceRow = ServiceRow {
    label: "Indexer Query",
    trends: &["provider_rate_indexer"],
    success: "success_indexer",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TestKind {
    FindProvs,
    Fetch,
}

impl TestKind {
    pub fn header(self) -> &'static [&'static str] {
        match self {
            TestKind::FindProvs => FIND_PROVS_HEADER,
            TestKind::Fetch => FETCH_HEADER,
        }
    }

    fn services(self, include_kubo: bool) -> Vec<&'static ServiceRow> {
        let (kubo, always) = match self {
            TestKind::FindProvs => (&KUBO_FIND_PROVS, &INDEXER_FIND_PROVS),
            TestKind::Fetch => (&KUBO_FETCH, &LASSIE_FETCH),
        };
        if include_kubo {
            vec![kubo, always]
        } else {
            vec![always]
        }
    }

    /// Rows contributed by one run's summary. `source` only labels errors.
    pub fn rows(self, summary: &Value, include_kubo: bool, source: &Path) -> Result<Vec<Vec<String>>> {
        self.services(include_kubo)
            .into_iter()
            .map(|service| service_row(service, summary, source))
            .collect()
    }
}

fn service_row(service: &ServiceRow, summary: &Value, source: &Path) -> Result<Vec<String>> {
    let mut row = Vec::with_capacity(1 + service.trends.len() * TREND_STATS.len() + 1);
    row.push(service.label.to_string());
    for metric in service.trends {
        for stat in TREND_STATS {
            row.push(metric_value(summary, metric, stat, source)?);
        }
    }
    row.push(metric_value(summary, service.success, "rate", source)?);
    Ok(row)
}

fn metric_value(summary: &Value, metric: &str, key: &str, source: &Path) -> Result<String> {
    summary
        .get("metrics")
        .and_then(|metrics| metrics.get(metric))
        .and_then(|m| m.get("values"))
        .and_then(|values| values.get(key))
        .and_then(|value| match value {
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .ok_or_else(|| ReportError::MissingMetric {
            path: source.to_path_buf(),
            metric: metric.to_string(),
            key: key.to_string(),
        })
}
