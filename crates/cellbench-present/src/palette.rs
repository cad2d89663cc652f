//! Five-colour palettes for model category cards.

use serde::Serialize;

use cellbench_common::{CodedEnum, ModelCategory};

use crate::badge::NEUTRAL_GRAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryPalette {
    pub primary: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub dark_background: &'static str,
}

impl CategoryPalette {
    pub const NEUTRAL: CategoryPalette = CategoryPalette {
        primary: NEUTRAL_GRAY,
        background: "#f8fafc",
        border: "#cbd5e1",
        text: "#475569",
        dark_background: "rgb(55 65 81 / 0.2)",
    };

    pub fn of(category: ModelCategory) -> Self {
        match category {
            ModelCategory::Predictive => CategoryPalette {
                primary: "#3b82f6",
                background: "#eff6ff",
                border: "#3b82f6",
                text: "#1e40af",
                dark_background: "rgb(30 58 138 / 0.2)",
            },
            ModelCategory::Generative => CategoryPalette {
                primary: "#8b5cf6",
                background: "#f5f3ff",
                border: "#8b5cf6",
                text: "#5b21b6",
                dark_background: "rgb(88 28 135 / 0.2)",
            },
            ModelCategory::AtacSpecific => CategoryPalette {
                primary: "#ec4899",
                background: "#fdf2f8",
                border: "#ec4899",
                text: "#9d174d",
                dark_background: "rgb(157 23 77 / 0.2)",
            },
            ModelCategory::GaussianGeometric => CategoryPalette {
                primary: "#14b8a6",
                background: "#f0fdfa",
                border: "#14b8a6",
                text: "#115e59",
                dark_background: "rgb(19 78 74 / 0.2)",
            },
            ModelCategory::Disentanglement => CategoryPalette {
                primary: "#f43f5e",
                background: "#fff1f2",
                border: "#f43f5e",
                text: "#9f1239",
                dark_background: "rgb(159 18 57 / 0.2)",
            },
            ModelCategory::Trajectory => CategoryPalette {
                primary: "#f59e0b",
                background: "#fffbeb",
                border: "#f59e0b",
                text: "#92400e",
                dark_background: "rgb(120 53 15 / 0.2)",
            },
        }
    }
}

/// Palette for a model category code; unknown codes get [`CategoryPalette::NEUTRAL`].
pub fn category_palette(code: &str) -> CategoryPalette {
    ModelCategory::from_code(code)
        .map(CategoryPalette::of)
        .unwrap_or(CategoryPalette::NEUTRAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbench_catalog::DescribedCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_matches_category_color() {
        for category in ModelCategory::ALL {
            assert_eq!(CategoryPalette::of(*category).primary, category.descriptor().color);
        }
    }

    #[test]
    fn test_unknown_code_is_neutral() {
        assert_eq!(category_palette("spatial"), CategoryPalette::NEUTRAL);
        assert_eq!(category_palette("generative").background, "#f5f3ff");
    }
}
