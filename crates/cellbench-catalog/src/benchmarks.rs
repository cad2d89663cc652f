//! Indexed benchmark results table.

use std::collections::HashMap;

use chrono::NaiveDate;

use cellbench_common::{BenchmarkResult, BenchmarkSuite, CellbenchError, MetricValue, Result};

/// Benchmark results indexed by `(dataset, model)`.
///
/// At most one row exists per pair. Lookups for unknown pairs or metrics
/// return absent values rather than errors.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    suite: BenchmarkSuite,
    // dataset_id -> model_id -> row index
    index: HashMap<String, HashMap<String, usize>>,
}

impl BenchmarkTable {
    pub fn new(suite: BenchmarkSuite) -> Result<Self> {
        let mut index: HashMap<String, HashMap<String, usize>> = HashMap::new();
        for (idx, row) in suite.results.iter().enumerate() {
            let models = index.entry(row.dataset_id.clone()).or_default();
            if models.insert(row.model_id.clone(), idx).is_some() {
                return Err(CellbenchError::DuplicateId {
                    kind: "benchmark result",
                    id: format!("{}/{}", row.dataset_id, row.model_id),
                });
            }
        }
        Ok(Self { suite, index })
    }

    pub fn suite_id(&self) -> &str {
        &self.suite.id
    }

    pub fn suite_name(&self) -> &str {
        &self.suite.name
    }

    pub fn benchmark_date(&self) -> NaiveDate {
        self.suite.benchmark_date
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.suite.results
    }

    pub fn len(&self) -> usize {
        self.suite.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suite.results.is_empty()
    }

    pub fn result(&self, dataset_id: &str, model_id: &str) -> Option<&BenchmarkResult> {
        self.index
            .get(dataset_id)
            .and_then(|models| models.get(model_id))
            .map(|&idx| &self.suite.results[idx])
    }

    /// Raw value of one cell, `None` when the row or the metric is absent.
    pub fn value(&self, dataset_id: &str, model_id: &str, metric_id: &str) -> Option<f64> {
        self.result(dataset_id, model_id)
            .and_then(|row| row.value(metric_id))
    }

    pub fn cell<'a>(
        &self,
        dataset_id: &'a str,
        model_id: &'a str,
        metric_id: &'a str,
    ) -> MetricValue<'a> {
        MetricValue {
            dataset_id,
            model_id,
            metric_id,
            value: self.value(dataset_id, model_id, metric_id),
        }
    }

    /// Rows for one dataset, in recorded order.
    pub fn results_for_dataset(&self, dataset_id: &str) -> Vec<&BenchmarkResult> {
        self.suite
            .results
            .iter()
            .filter(|row| row.dataset_id == dataset_id)
            .collect()
    }

    /// One cell per row of `dataset_id` for `metric_id`, absent cells included.
    pub fn metric_values<'a>(&'a self, dataset_id: &str, metric_id: &'a str) -> Vec<MetricValue<'a>> {
        self.results_for_dataset(dataset_id)
            .into_iter()
            .map(|row| MetricValue {
                dataset_id: &row.dataset_id,
                model_id: &row.model_id,
                metric_id,
                value: row.value(metric_id),
            })
            .collect()
    }

    /// Distinct model ids with a row for `dataset_id`, in recorded order.
    pub fn models_for_dataset(&self, dataset_id: &str) -> Vec<&str> {
        self.results_for_dataset(dataset_id)
            .into_iter()
            .map(|row| row.model_id.as_str())
            .collect()
    }
}
