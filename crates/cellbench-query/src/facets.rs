//! Facet selections per entity type.
//!
//! A facet left at `None` imposes no constraint. All selected facets must hold.

use serde::{Deserialize, Serialize};

use cellbench_common::{
    BetterDirection, Complexity, DataType, Dataset, DatasetCategory, Interpretability, Metric,
    MetricCategory, Modality, Model, ModelCategory,
};

/// A set of facet selections that admits or rejects an entity.
pub trait Facets<E> {
    fn admits(&self, entity: &E) -> bool;

    /// Number of facets with a selection.
    fn active(&self) -> usize;
}

fn holds<T: PartialEq>(selected: &Option<T>, actual: &T) -> bool {
    selected.as_ref().map_or(true, |s| s == actual)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFacets {
    pub category: Option<ModelCategory>,
    /// Admits models whose modality support includes the selection.
    pub modality: Option<Modality>,
    pub complexity: Option<Complexity>,
    pub interpretability: Option<Interpretability>,
}

impl Facets<Model> for ModelFacets {
    fn admits(&self, model: &Model) -> bool {
        holds(&self.category, &model.category)
            && self.modality.map_or(true, |m| model.supports(m))
            && holds(&self.complexity, &model.complexity)
            && holds(&self.interpretability, &model.interpretability)
    }

    fn active(&self) -> usize {
        [
            self.category.is_some(),
            self.modality.is_some(),
            self.complexity.is_some(),
            self.interpretability.is_some(),
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFacets {
    pub data_type: Option<DataType>,
    pub category: Option<DatasetCategory>,
    /// Species code, compared exactly (`homo_sapiens`).
    pub species: Option<String>,
}

impl Facets<Dataset> for DatasetFacets {
    fn admits(&self, dataset: &Dataset) -> bool {
        holds(&self.data_type, &dataset.data_type)
            && holds(&self.category, &dataset.category)
            && holds(&self.species, &dataset.species)
    }

    fn active(&self) -> usize {
        [
            self.data_type.is_some(),
            self.category.is_some(),
            self.species.is_some(),
        ]
        .iter()
        .filter(|&&on| on)
        .count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFacets {
    pub category: Option<MetricCategory>,
    pub better_direction: Option<BetterDirection>,
}

impl Facets<Metric> for MetricFacets {
    fn admits(&self, metric: &Metric) -> bool {
        holds(&self.category, &metric.category)
            && holds(&self.better_direction, &metric.better_direction)
    }

    fn active(&self) -> usize {
        usize::from(self.category.is_some()) + usize::from(self.better_direction.is_some())
    }
}
