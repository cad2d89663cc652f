//! Fixture builders shared by cellbench tests.
//!
//! Every builder returns a complete, valid record with neutral filler text so
//! tests only spell out the fields they care about and mutate the rest.

use std::collections::BTreeMap;

use cellbench_common::{
    BenchmarkResult, BetterDirection, Complexity, DataType, Dataset, DatasetCategory,
    DatasetStats, InputType, Interpretability, Metric, MetricCategory, MetricRange, Modality,
    Model, ModelArchitecture, ModelCategory, ModelLogic, OutputType, Preprocessing,
};

pub fn model(id: &str, category: ModelCategory) -> Model {
    Model {
        id: id.to_string(),
        name: id.to_string(),
        display_name: format!("{id} model"),
        category,
        description: String::new(),
        logic: ModelLogic {
            title: String::new(),
            description: String::new(),
            main_idea: String::new(),
            key_components: vec![],
            mathematical_formulation: None,
            loss: vec![],
            data_flow: String::new(),
        },
        architecture: ModelArchitecture {
            name: "VAE".to_string(),
            input_type: InputType::SingleCell,
            output_type: OutputType::Latent,
            architecture_type: "Variational Autoencoder".to_string(),
            key_layers: vec![],
            latent_dim: Some(10),
        },
        frameworks: vec!["PyTorch".to_string()],
        publications: vec![],
        tags: vec![],
        complexity: Complexity::Moderate,
        interpretability: Interpretability::Medium,
        uses_in_liora: false,
        modality_support: vec![Modality::Rna],
    }
}

pub fn dataset(id: &str, data_type: DataType, category: DatasetCategory) -> Dataset {
    Dataset {
        id: id.to_string(),
        name: id.to_uppercase(),
        display_name: format!("{id} dataset"),
        accession: id.to_uppercase(),
        data_type,
        category,
        species: "homo_sapiens".to_string(),
        tissues: vec![],
        description: String::new(),
        stats: DatasetStats {
            cell_count: 10_000,
            gene_count: 18_000,
            hvg_count: 3_000,
            benchmark_cell_count: 3_000,
            platforms: vec!["Illumina NovaSeq".to_string()],
        },
        preprocessing: Preprocessing {
            hvg_selection: true,
            cell_sampling: true,
            normalization: "Log normalization (10^4 target sum)".to_string(),
        },
        benchmarked_models: vec![],
    }
}

pub fn metric(id: &str, range: MetricRange, better_direction: BetterDirection) -> Metric {
    Metric {
        id: id.to_string(),
        name: id.to_uppercase(),
        short_name: id.to_uppercase(),
        category: MetricCategory::Clustering,
        description: String::new(),
        formula: None,
        range,
        better_direction,
        unit: None,
        interpretation: String::new(),
    }
}

/// A benchmark row for `(dataset_id, model_id)` with the given cells.
pub fn bench_row(dataset_id: &str, model_id: &str, cells: &[(&str, Option<f64>)]) -> BenchmarkResult {
    BenchmarkResult {
        dataset_id: dataset_id.to_string(),
        model_id: model_id.to_string(),
        metrics: cells
            .iter()
            .map(|(metric_id, value)| (metric_id.to_string(), *value))
            .collect::<BTreeMap<_, _>>(),
        timestamp: None,
        notes: None,
    }
}

/// Compare floats with a fixed tolerance, reporting both values on failure.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
