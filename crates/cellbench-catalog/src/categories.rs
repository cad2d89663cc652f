//! Category metadata side tables.
//!
//! Label, description, icon and colour are fixed per category code. The
//! entry count is never stored: [`CategoryInfo`] is only built from a store,
//! which counts its own entries.

use serde::Serialize;

use cellbench_common::{CodedEnum, DatasetCategory, MetricCategory, ModelCategory};

/// Static, cosmetic description of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A category enum with a descriptor for every variant.
pub trait DescribedCategory: CodedEnum {
    fn descriptor(&self) -> CategoryDescriptor;
}

/// One row of a category metadata table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInfo<C> {
    pub category: C,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub count: usize,
}

impl<C: DescribedCategory> CategoryInfo<C> {
    pub(crate) fn new(category: C, count: usize) -> Self {
        let d = category.descriptor();
        Self {
            category,
            label: d.label,
            description: d.description,
            icon: d.icon,
            color: d.color,
            count,
        }
    }
}

const fn descriptor(
    label: &'static str,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
) -> CategoryDescriptor {
    CategoryDescriptor { label, description, icon, color }
}

impl DescribedCategory for ModelCategory {
    fn descriptor(&self) -> CategoryDescriptor {
        match self {
            ModelCategory::Predictive => descriptor(
                "Predictive Models",
                "Models focused on prediction tasks: clustering, classification, imputation",
                "🎯",
                "#3b82f6",
            ),
            ModelCategory::Generative => descriptor(
                "Generative Models",
                "Models focused on data generation: synthesis, augmentation, sampling",
                "✨",
                "#8b5cf6",
            ),
            ModelCategory::AtacSpecific => descriptor(
                "scATAC-Specific Models",
                "Models specifically designed for chromatin accessibility data",
                "🧬",
                "#ec4899",
            ),
            ModelCategory::GaussianGeometric => descriptor(
                "Gaussian Geometric Models",
                "Models using geometric structures: hyperbolic, spherical, mixture models",
                "📐",
                "#14b8a6",
            ),
            ModelCategory::Disentanglement => descriptor(
                "Disentanglement Models",
                "Models focused on learning disentangled factor representations",
                "🔍",
                "#f43f5e",
            ),
            ModelCategory::Trajectory => descriptor(
                "Trajectory Models",
                "Models inferring developmental trajectories and pseudo-time",
                "🧭",
                "#f59e0b",
            ),
        }
    }
}

impl DescribedCategory for DatasetCategory {
    fn descriptor(&self) -> CategoryDescriptor {
        match self {
            DatasetCategory::Cancer => descriptor(
                "Cancer",
                "Tumour samples and tumour microenvironments",
                "🎗️",
                "#dc2626",
            ),
            DatasetCategory::Development => descriptor(
                "Development",
                "Developmental and differentiation time courses",
                "🌱",
                "#16a34a",
            ),
            DatasetCategory::Disease => descriptor(
                "Disease",
                "Non-cancer disease states",
                "🩺",
                "#ea580c",
            ),
            DatasetCategory::Homeostatic => descriptor(
                "Homeostatic",
                "Healthy steady-state tissues",
                "⚖️",
                "#0284c7",
            ),
        }
    }
}

impl DescribedCategory for MetricCategory {
    fn descriptor(&self) -> CategoryDescriptor {
        match self {
            MetricCategory::Clustering => descriptor(
                "Clustering & Cell Type Discovery",
                "Supervised metrics comparing predicted clusters to ground truth labels",
                "🧩",
                "#3b82f6",
            ),
            MetricCategory::Embedding => descriptor(
                "Embedding Quality (UMAP & t-SNE)",
                "Visualization quality via coranking analysis (4 metrics × 2 methods)",
                "🗺️",
                "#8b5cf6",
            ),
            MetricCategory::Intrinsic => descriptor(
                "Intrinsic Latent Space (LSE)",
                "Unsupervised geometric, spectral, and topological properties",
                "📐",
                "#14b8a6",
            ),
            MetricCategory::Runtime => descriptor(
                "Computational Efficiency",
                "Training and inference performance",
                "⏱️",
                "#f59e0b",
            ),
        }
    }
}
