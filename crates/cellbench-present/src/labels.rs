//! Free-form labels: species, frameworks and metric direction.

use cellbench_common::BetterDirection;

use crate::badge::NEUTRAL_GRAY;

// (code, scientific name, short name)
const SPECIES: &[(&str, &str, &str)] = &[
    ("homo_sapiens", "Homo sapiens", "Human"),
    ("mus_musculus", "Mus musculus", "Mouse"),
    ("danio_rerio", "Danio rerio", "Zebrafish"),
];

fn species_entry(species: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    SPECIES
        .iter()
        .find(|(code, full, _)| *code == species || *full == species)
}

/// Scientific name for a species code or name; unknown species pass through.
pub fn species_label(species: &str) -> &str {
    species_entry(species).map_or(species, |&(_, full, _)| full)
}

/// Common name ("Human", "Mouse") for a species code or name.
pub fn species_short_label(species: &str) -> &str {
    species_entry(species).map_or(species, |&(_, _, short)| short)
}

/// Brand colour for a deep-learning framework, matched case-insensitively.
pub fn framework_color(framework: &str) -> &'static str {
    match framework.to_lowercase().as_str() {
        "pytorch" => "#ee4c2c",
        "jax" => "#0066cc",
        "tensorflow" => "#ff6f00",
        "pytorch geometric" => "#a855f7",
        "scikit-learn" => "#f89939",
        _ => NEUTRAL_GRAY,
    }
}

pub fn direction_icon(direction: BetterDirection) -> &'static str {
    match direction {
        BetterDirection::Higher => "↑",
        BetterDirection::Lower => "↓",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_species_accepts_code_or_name() {
        assert_eq!(species_label("homo_sapiens"), "Homo sapiens");
        assert_eq!(species_label("Mus musculus"), "Mus musculus");
        assert_eq!(species_short_label("mus_musculus"), "Mouse");
        assert_eq!(species_short_label("Danio rerio"), "Zebrafish");
    }

    #[test]
    fn test_unknown_species_passes_through() {
        assert_eq!(species_label("gallus_gallus"), "gallus_gallus");
        assert_eq!(species_short_label("gallus_gallus"), "gallus_gallus");
    }

    #[test]
    fn test_framework_colors() {
        assert_eq!(framework_color("PyTorch"), "#ee4c2c");
        assert_eq!(framework_color("PyTorch Geometric"), "#a855f7");
        assert_eq!(framework_color("Theano"), NEUTRAL_GRAY);
    }

    #[test]
    fn test_direction_icons() {
        assert_eq!(direction_icon(BetterDirection::Higher), "↑");
        assert_eq!(direction_icon(BetterDirection::Lower), "↓");
    }
}
