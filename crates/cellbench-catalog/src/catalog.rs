//! The loaded catalog: models, datasets, metrics and benchmark results.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use cellbench_common::{
    BenchmarkSuite, CellbenchError, DataType, Dataset, Metric, MetricValue, Modality, Model,
    Result,
};

use crate::benchmarks::BenchmarkTable;
use crate::store::CatalogStore;

const MODELS_JSON: &str = include_str!("../data/models.json");
const DATASETS_JSON: &str = include_str!("../data/datasets.json");
const METRICS_JSON: &str = include_str!("../data/metrics.json");
const BENCHMARKS_JSON: &str = include_str!("../data/benchmarks.json");

pub const MODELS_FILE: &str = "models.json";
pub const DATASETS_FILE: &str = "datasets.json";
pub const METRICS_FILE: &str = "metrics.json";
pub const BENCHMARKS_FILE: &str = "benchmarks.json";

/// All three catalogs plus the benchmark table, validated together.
#[derive(Debug, Clone)]
pub struct Catalog {
    models: CatalogStore<Model>,
    datasets: CatalogStore<Dataset>,
    metrics: CatalogStore<Metric>,
    benchmarks: BenchmarkTable,
}

impl Catalog {
    /// Build a catalog and check every cross reference.
    ///
    /// Fails on duplicate ids, on a dataset listing an unknown benchmarked
    /// model, and on a benchmark row naming an unknown dataset, model or metric.
    pub fn new(
        models: Vec<Model>,
        datasets: Vec<Dataset>,
        metrics: Vec<Metric>,
        suite: BenchmarkSuite,
    ) -> Result<Self> {
        let catalog = Self {
            models: CatalogStore::new(models)?,
            datasets: CatalogStore::new(datasets)?,
            metrics: CatalogStore::new(metrics)?,
            benchmarks: BenchmarkTable::new(suite)?,
        };
        catalog.check_references()?;

        info!(
            models = catalog.models.len(),
            datasets = catalog.datasets.len(),
            metrics = catalog.metrics.len(),
            results = catalog.benchmarks.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        debug!("Loading embedded catalog data");
        Self::new(
            serde_json::from_str(MODELS_JSON)?,
            serde_json::from_str(DATASETS_JSON)?,
            serde_json::from_str(METRICS_JSON)?,
            serde_json::from_str(BENCHMARKS_JSON)?,
        )
    }

    /// Load the four data files from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        info!("Loading catalog from {}", dir.display());
        Self::new(
            read_json(&dir.join(MODELS_FILE))?,
            read_json(&dir.join(DATASETS_FILE))?,
            read_json(&dir.join(METRICS_FILE))?,
            read_json(&dir.join(BENCHMARKS_FILE))?,
        )
    }

    /// Load from `dir` when given, the embedded data otherwise.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    fn check_references(&self) -> Result<()> {
        for dataset in self.datasets.all() {
            for model_id in &dataset.benchmarked_models {
                if !self.models.contains(model_id) {
                    return Err(unknown(&dataset.id, "model", model_id));
                }
            }
        }

        for row in self.benchmarks.results() {
            let owner = format!("benchmark result {}/{}", row.dataset_id, row.model_id);
            if !self.datasets.contains(&row.dataset_id) {
                return Err(unknown(&owner, "dataset", &row.dataset_id));
            }
            if !self.models.contains(&row.model_id) {
                return Err(unknown(&owner, "model", &row.model_id));
            }
            if let Some(metric_id) = row.metrics.keys().find(|id| !self.metrics.contains(id)) {
                return Err(unknown(&owner, "metric", metric_id));
            }
        }
        Ok(())
    }

    pub fn models(&self) -> &CatalogStore<Model> {
        &self.models
    }

    pub fn datasets(&self) -> &CatalogStore<Dataset> {
        &self.datasets
    }

    pub fn metrics(&self) -> &CatalogStore<Metric> {
        &self.metrics
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    // ---------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------

    pub fn models_by_modality(&self, modality: Modality) -> Vec<&Model> {
        self.models.all().iter().filter(|m| m.supports(modality)).collect()
    }

    pub fn datasets_by_type(&self, data_type: DataType) -> Vec<&Dataset> {
        self.datasets
            .all()
            .iter()
            .filter(|d| d.data_type == data_type)
            .collect()
    }

    pub fn datasets_by_species(&self, species: &str) -> Vec<&Dataset> {
        self.datasets
            .all()
            .iter()
            .filter(|d| d.species == species)
            .collect()
    }

    /// Models listed as benchmarked on `dataset_id`, in the dataset's order.
    pub fn benchmarked_models(&self, dataset_id: &str) -> Vec<&Model> {
        self.datasets
            .get_by_id(dataset_id)
            .map(|d| {
                d.benchmarked_models
                    .iter()
                    .filter_map(|id| self.models.get_by_id(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn metric_value<'a>(
        &self,
        dataset_id: &'a str,
        model_id: &'a str,
        metric_id: &'a str,
    ) -> MetricValue<'a> {
        self.benchmarks.cell(dataset_id, model_id, metric_id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CellbenchError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn unknown(owner: &str, kind: &'static str, id: &str) -> CellbenchError {
    CellbenchError::UnknownReference {
        owner: owner.to_string(),
        kind,
        id: id.to_string(),
    }
}
