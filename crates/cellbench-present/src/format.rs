//! Number and value formatting for rendered output.

use cellbench_common::Dataset;

/// Render a benchmark value. Absent values render as `N/A`, never as zero.
///
/// With a unit: two decimals and the unit. Without: no decimals above 100,
/// three decimals otherwise.
pub fn format_metric_value(value: Option<f64>, unit: Option<&str>) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };
    match unit {
        Some(unit) => format!("{value:.2} {unit}"),
        None if value > 100.0 => format!("{value:.0}"),
        None => format!("{value:.3}"),
    }
}

/// Compact count: `12.5K`, `1.2M`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// A normalised score as a whole percentage.
pub fn format_score_percent(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

pub fn dataset_display_id(dataset: &Dataset) -> String {
    format!("{}-{}", dataset.data_type, dataset.id)
}

/// `"<platforms> • <tissues>"`, each list comma-joined.
pub fn dataset_stats_line(dataset: &Dataset) -> String {
    format!(
        "{} • {}",
        dataset.stats.platforms.join(", "),
        dataset.tissues.join(", ")
    )
}
