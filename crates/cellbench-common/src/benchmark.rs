//! Benchmark result records.
//!
//! A result row holds every metric recorded for one (dataset, model) pair.
//! A metric may be missing from the row or recorded as `null`; both read back
//! as absent and are never treated as zero.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub dataset_id: String,
    pub model_id: String,
    pub metrics: BTreeMap<String, Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BenchmarkResult {
    /// Recorded value for `metric_id`, or `None` when missing or null.
    pub fn value(&self, metric_id: &str) -> Option<f64> {
        self.metrics.get(metric_id).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSuite {
    pub id: String,
    pub name: String,
    pub benchmark_date: NaiveDate,
    pub results: Vec<BenchmarkResult>,
}

/// One benchmark cell: `(dataset, model, metric) -> value | absent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue<'a> {
    pub dataset_id: &'a str,
    pub model_id: &'a str,
    pub metric_id: &'a str,
    pub value: Option<f64>,
}

impl MetricValue<'_> {
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}
