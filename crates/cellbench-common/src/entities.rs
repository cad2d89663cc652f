//! Core record types for the three catalogs (models, datasets, metrics).
//! Field names follow the camelCase keys of the catalog data files.

use serde::{Deserialize, Serialize};

use crate::codes::{coded_enum, CodedEnum};

// ---------------------------------------------------------------------------
// Codes
// ---------------------------------------------------------------------------

coded_enum! {
    /// Model catalog category.
    pub enum ModelCategory {
        Predictive => "predictive",
        Generative => "generative",
        AtacSpecific => "atac-specific",
        GaussianGeometric => "gaussian-geometric",
        Disentanglement => "disentanglement",
        Trajectory => "trajectory",
    }
}

coded_enum! {
    /// Sequencing modality a model can consume.
    pub enum Modality {
        Rna => "rna",
        Atac => "atac",
    }
}

coded_enum! {
    pub enum Complexity {
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
    }
}

coded_enum! {
    pub enum Interpretability {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

coded_enum! {
    pub enum InputType {
        SingleCell => "single-cell",
        Peak => "peak",
        Count => "count",
        Mixed => "mixed",
    }
}

coded_enum! {
    pub enum OutputType {
        Latent => "latent",
        Clustering => "clustering",
        Reconstruction => "reconstruction",
        Factors => "factors",
        Trajectory => "trajectory",
    }
}

coded_enum! {
    /// Assay type of a dataset.
    pub enum DataType {
        Rna => "RNA",
        Atac => "ATAC",
        Multimodal => "multimodal",
    }
}

coded_enum! {
    /// Biological context of a dataset.
    pub enum DatasetCategory {
        Cancer => "cancer",
        Development => "development",
        Disease => "disease",
        Homeostatic => "homeostatic",
    }
}

coded_enum! {
    pub enum MetricCategory {
        Clustering => "clustering",
        Embedding => "embedding",
        Intrinsic => "intrinsic",
        Runtime => "runtime",
    }
}

coded_enum! {
    /// Whether higher or lower raw values are preferable for a metric.
    pub enum BetterDirection {
        Higher => "higher",
        Lower => "lower",
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyComponent {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossTerm {
    pub name: String,
    pub formula: String,
}

/// Narrative description of how a model works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelLogic {
    pub title: String,
    pub description: String,
    pub main_idea: String,
    pub key_components: Vec<KeyComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mathematical_formulation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loss: Vec<LossTerm>,
    pub data_flow: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelArchitecture {
    pub name: String,
    pub input_type: InputType,
    pub output_type: OutputType,
    pub architecture_type: String,
    pub key_layers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latent_dim: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub category: ModelCategory,
    pub description: String,
    pub logic: ModelLogic,
    pub architecture: ModelArchitecture,
    pub frameworks: Vec<String>,
    pub publications: Vec<Publication>,
    pub tags: Vec<String>,
    pub complexity: Complexity,
    pub interpretability: Interpretability,
    #[serde(default)]
    pub uses_in_liora: bool,
    pub modality_support: Vec<Modality>,
}

impl Model {
    pub fn supports(&self, modality: Modality) -> bool {
        self.modality_support.contains(&modality)
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub cell_count: u64,
    /// Genes for RNA data, peaks for ATAC data.
    pub gene_count: u64,
    pub hvg_count: u64,
    pub benchmark_cell_count: u64,
    pub platforms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preprocessing {
    pub hvg_selection: bool,
    pub cell_sampling: bool,
    pub normalization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub accession: String,
    pub data_type: DataType,
    pub category: DatasetCategory,
    /// Species code, e.g. `homo_sapiens`. Kept open: new organisms only need a label.
    pub species: String,
    pub tissues: Vec<String>,
    pub description: String,
    pub stats: DatasetStats,
    pub preprocessing: Preprocessing,
    #[serde(default)]
    pub benchmarked_models: Vec<String>,
}

// ---------------------------------------------------------------------------
// Metric
// ---------------------------------------------------------------------------

/// Declared value range of a metric. `max == None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl MetricRange {
    pub fn bounded(min: f64, max: f64) -> Self {
        Self { min, max: Some(max) }
    }

    pub fn unbounded(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn is_bounded(&self) -> bool {
        self.max.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub category: MetricCategory,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    pub range: MetricRange,
    pub better_direction: BetterDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub interpretation: String,
}

// ---------------------------------------------------------------------------
// Catalog entry trait
// ---------------------------------------------------------------------------

/// Behaviour shared by every record kept in a catalog.
pub trait CatalogEntry {
    type Category: CodedEnum;

    /// Singular noun used in log lines and errors ("model", "dataset", "metric").
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn category(&self) -> Self::Category;

    fn display_name(&self) -> &str;

    /// Fields matched by free-text search, in a fixed order.
    fn search_fields(&self) -> Vec<&str>;
}

impl CatalogEntry for Model {
    type Category = ModelCategory;
    const KIND: &'static str = "model";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ModelCategory {
        self.category
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.display_name.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl CatalogEntry for Dataset {
    type Category = DatasetCategory;
    const KIND: &'static str = "dataset";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> DatasetCategory {
        self.category
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.display_name.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.tissues.iter().map(String::as_str));
        fields
    }
}

impl CatalogEntry for Metric {
    type Category = MetricCategory;
    const KIND: &'static str = "metric";

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> MetricCategory {
        self.category
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.short_name.as_str(),
            self.description.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DAV_JSON: &str = r#"{
        "id": "dav",
        "name": "Davies-Bouldin Index",
        "shortName": "DAV",
        "category": "clustering",
        "description": "Average similarity between each cluster and its most similar neighboring cluster",
        "range": { "min": 0, "max": null },
        "betterDirection": "lower",
        "unit": "arbitrary",
        "interpretation": "Lower is better."
    }"#;

    #[test]
    fn test_metric_with_null_max_is_unbounded() {
        let metric: Metric = serde_json::from_str(DAV_JSON).unwrap();
        assert_eq!(metric.range, MetricRange::unbounded(0.0));
        assert!(!metric.range.is_bounded());
        assert_eq!(metric.better_direction, BetterDirection::Lower);
        assert_eq!(metric.formula, None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let bad = DAV_JSON.replace("\"clustering\"", "\"visualisation\"");
        assert!(serde_json::from_str::<Metric>(&bad).is_err());
    }

    #[test]
    fn test_metric_search_fields_order() {
        let metric: Metric = serde_json::from_str(DAV_JSON).unwrap();
        assert_eq!(
            metric.search_fields(),
            vec![
                "Davies-Bouldin Index",
                "DAV",
                "Average similarity between each cluster and its most similar neighboring cluster",
            ]
        );
    }

    #[test]
    fn test_category_serializes_as_code() {
        let json = serde_json::to_string(&ModelCategory::GaussianGeometric).unwrap();
        assert_eq!(json, "\"gaussian-geometric\"");
    }
}
