//! Cross-catalog search.

use serde::Serialize;

use cellbench_catalog::Catalog;
use cellbench_common::{Dataset, Metric, Model};

use crate::facets::{DatasetFacets, MetricFacets, ModelFacets};
use crate::filter::filter;

/// Matches for one query in each catalog, each in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub query: String,
    pub models: Vec<&'a Model>,
    pub datasets: Vec<&'a Dataset>,
    pub metrics: Vec<&'a Metric>,
}

impl SearchResults<'_> {
    pub fn total(&self) -> usize {
        self.models.len() + self.datasets.len() + self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

pub fn search_all<'a>(catalog: &'a Catalog, query: &str) -> SearchResults<'a> {
    SearchResults {
        query: query.to_string(),
        models: filter(catalog.models().all(), query, &ModelFacets::default()),
        datasets: filter(catalog.datasets().all(), query, &DatasetFacets::default()),
        metrics: filter(catalog.metrics().all(), query, &MetricFacets::default()),
    }
}
