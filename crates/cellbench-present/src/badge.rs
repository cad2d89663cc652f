//! `{label, color}` badges for enum codes.

use serde::Serialize;

use cellbench_catalog::DescribedCategory;
use cellbench_common::{
    CodedEnum, Complexity, DataType, DatasetCategory, Interpretability, MetricCategory, Modality,
    ModelCategory,
};

/// Colour used for any code without a known presentation.
pub const NEUTRAL_GRAY: &str = "#6b7280";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: &'static str,
}

impl Badge {
    pub fn new(label: impl Into<String>, color: &'static str) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// The code itself, in neutral gray.
    pub fn fallback(code: &str) -> Self {
        Self::new(code, NEUTRAL_GRAY)
    }
}

/// A code with a fixed display badge.
pub trait Badged {
    fn badge(&self) -> Badge;
}

/// Badge for a raw string code of `E`, falling back to the code itself.
pub fn badge_for_code<E: Badged + CodedEnum>(code: &str) -> Badge {
    E::from_code(code)
        .map(|e| e.badge())
        .unwrap_or_else(|| Badge::fallback(code))
}

fn category_badge<C: DescribedCategory>(category: &C) -> Badge {
    let d = category.descriptor();
    Badge::new(d.label, d.color)
}

impl Badged for ModelCategory {
    fn badge(&self) -> Badge {
        category_badge(self)
    }
}

impl Badged for DatasetCategory {
    fn badge(&self) -> Badge {
        category_badge(self)
    }
}

impl Badged for MetricCategory {
    fn badge(&self) -> Badge {
        category_badge(self)
    }
}

impl Badged for DataType {
    fn badge(&self) -> Badge {
        match self {
            DataType::Rna => Badge::new("scRNA-seq", "#16a34a"),
            DataType::Atac => Badge::new("scATAC-seq", "#f59e0b"),
            DataType::Multimodal => Badge::new("Multimodal", "#06b6d4"),
        }
    }
}

impl Badged for Modality {
    fn badge(&self) -> Badge {
        match self {
            Modality::Rna => Badge::new("RNA", "#16a34a"),
            Modality::Atac => Badge::new("ATAC", "#22c55e"),
        }
    }
}

impl Badged for Complexity {
    fn badge(&self) -> Badge {
        match self {
            Complexity::Simple => Badge::new("Simple", "#15803d"),
            Complexity::Moderate => Badge::new("Moderate", "#ea580c"),
            Complexity::Complex => Badge::new("Complex", "#dc2626"),
        }
    }
}

impl Badged for Interpretability {
    fn badge(&self) -> Badge {
        match self {
            Interpretability::Low => Badge::new("Low", "#dc2626"),
            Interpretability::Medium => Badge::new("Medium", "#ea580c"),
            Interpretability::High => Badge::new("High", "#15803d"),
        }
    }
}
