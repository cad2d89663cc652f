//! Plain-text rendering of pipeline results.

use cellbench_catalog::{Catalog, CategoryInfo, DescribedCategory};
use cellbench_common::{CodedEnum, Dataset, Metric, Model};
use cellbench_present::{
    dataset_display_id, dataset_stats_line, direction_icon, format_count, format_metric_value,
    format_score_percent, species_label, species_short_label, Badged,
};
use cellbench_query::{highlight, SearchResults};
use cellbench_ranker::{Heatmap, Ranking};

macro_rules! push {
    ($out:expr, $($arg:tt)*) => {
        $out.push_str(&format!($($arg)*))
    };
}

macro_rules! push_line {
    ($out:expr) => {
        $out.push('\n')
    };
    ($out:expr, $($arg:tt)*) => {{
        push!($out, $($arg)*);
        $out.push('\n');
    }};
}

pub const NO_RESULTS: &str = "No benchmark results available for this combination";

fn modalities(model: &Model) -> String {
    model
        .modality_support
        .iter()
        .map(|m| m.badge().label)
        .collect::<Vec<_>>()
        .join("+")
}

pub fn model_line(model: &Model) -> String {
    format!(
        "{:<16} {:<28} {:<26} {}",
        model.id,
        model.display_name,
        model.category.badge().label,
        modalities(model)
    )
}

pub fn dataset_line(dataset: &Dataset) -> String {
    format!(
        "{:<34} {:<36} {:<10} {:>7} cells",
        dataset_display_id(dataset),
        dataset.display_name,
        species_short_label(&dataset.species),
        format_count(dataset.stats.cell_count)
    )
}

pub fn metric_line(metric: &Metric) -> String {
    format!(
        "{:<28} {:<10} {} {}",
        metric.id,
        metric.short_name,
        direction_icon(metric.better_direction),
        metric.category.badge().label
    )
}

pub fn list<T>(items: &[&T], line: fn(&T) -> String, noun: &str) -> String {
    let mut out = String::new();
    for item in items {
        push_line!(out, "{}", line(item));
    }
    push_line!(out, "{} {}", items.len(), noun);
    out
}

pub fn model_detail(model: &Model) -> String {
    let mut out = String::new();
    push_line!(out, "{} ({})", model.display_name, model.id);
    push_line!(out, "Category:         {}", model.category.badge().label);
    push_line!(out, "Modalities:       {}", modalities(model));
    push_line!(out, "Complexity:       {}", model.complexity.badge().label);
    push_line!(out, "Interpretability: {}", model.interpretability.badge().label);
    push_line!(out, "Frameworks:       {}", model.frameworks.join(", "));
    push_line!(
        out,
        "Architecture:     {} ({})",
        model.architecture.name, model.architecture.architecture_type
    );
    if let Some(dim) = model.architecture.latent_dim {
        push_line!(out, "Latent dim:       {dim}");
    }
    push_line!(out, "\n{}", model.description);
    push_line!(out, "\n{}\n{}", model.logic.title, model.logic.main_idea);
    for component in &model.logic.key_components {
        push_line!(out, "  - {}: {}", component.name, component.description);
    }
    if !model.logic.loss.is_empty() {
        push_line!(out, "Loss:");
        for term in &model.logic.loss {
            push_line!(out, "  {} = {}", term.name, term.formula);
        }
    }
    for publication in &model.publications {
        push_line!(out, "Publication: {} ({})", publication.title, publication.year);
    }
    if !model.tags.is_empty() {
        push_line!(out, "Tags: {}", model.tags.join(", "));
    }
    out
}

pub fn dataset_detail(dataset: &Dataset, catalog: &Catalog) -> String {
    let mut out = String::new();
    push_line!(out, "{} ({})", dataset.display_name, dataset_display_id(dataset));
    push_line!(out, "Accession:  {}", dataset.accession);
    push_line!(out, "Data type:  {}", dataset.data_type.badge().label);
    push_line!(out, "Category:   {}", dataset.category.badge().label);
    push_line!(out, "Species:    {}", species_label(&dataset.species));
    push_line!(out, "Platforms:  {}", dataset_stats_line(dataset));
    push_line!(
        out,
        "Cells:      {} ({} benchmarked)",
        format_count(dataset.stats.cell_count),
        format_count(dataset.stats.benchmark_cell_count)
    );
    push_line!(
        out,
        "Features:   {} ({} HVG)",
        format_count(dataset.stats.gene_count),
        format_count(dataset.stats.hvg_count)
    );
    push_line!(out, "Normalization: {}", dataset.preprocessing.normalization);
    push_line!(out, "\n{}", dataset.description);
    let benchmarked: Vec<&str> = catalog
        .benchmarked_models(&dataset.id)
        .iter()
        .map(|m| m.display_name.as_str())
        .collect();
    if !benchmarked.is_empty() {
        push_line!(out, "Benchmarked models: {}", benchmarked.join(", "));
    }
    out
}

pub fn metric_detail(metric: &Metric) -> String {
    let mut out = String::new();
    push_line!(out, "{} ({})", metric.name, metric.short_name);
    push_line!(out, "Category:  {}", metric.category.badge().label);
    let range = match metric.range.max {
        Some(max) => format!("[{}, {}]", metric.range.min, max),
        None => format!("[{}, ∞)", metric.range.min),
    };
    push_line!(out, "Range:     {range}");
    push_line!(
        out,
        "Better:    {} {}",
        direction_icon(metric.better_direction),
        metric.better_direction
    );
    if let Some(unit) = &metric.unit {
        push_line!(out, "Unit:      {unit}");
    }
    if let Some(formula) = &metric.formula {
        push_line!(out, "Formula:   {formula}");
    }
    push_line!(out, "\n{}\n\n{}", metric.description, metric.interpretation);
    out
}

pub fn search(results: &SearchResults<'_>, mark: bool) -> String {
    let shown = |text: &str| {
        if mark {
            highlight(text, &results.query)
        } else {
            text.to_string()
        }
    };
    let mut out = String::new();
    push_line!(out, "Models ({})", results.models.len());
    for m in &results.models {
        push_line!(out, "  {:<16} {}", m.id, shown(&m.display_name));
    }
    push_line!(out, "Datasets ({})", results.datasets.len());
    for d in &results.datasets {
        push_line!(out, "  {:<26} {}", d.id, shown(&d.display_name));
    }
    push_line!(out, "Metrics ({})", results.metrics.len());
    for m in &results.metrics {
        push_line!(out, "  {:<28} {}", m.id, shown(&m.name));
    }
    out
}

pub fn categories<C: DescribedCategory>(table: &[CategoryInfo<C>]) -> String {
    let mut out = String::new();
    for info in table {
        push_line!(
            out,
            "{} {:<34} {:>3}  {}",
            info.icon, info.label, info.count, info.category.as_str()
        );
    }
    out
}

pub fn ranking(ranking: &Ranking<'_>) -> String {
    if ranking.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let unit = ranking.metric.unit.as_deref();
    let mut out = String::new();
    push_line!(
        out,
        "{} on {} ({} better)",
        ranking.metric.short_name, ranking.dataset_id, ranking.metric.better_direction
    );
    for entry in &ranking.entries {
        push_line!(
            out,
            "{:>3}. {:<16} {:>16} {:>5}  {}",
            entry.rank,
            entry.model_id,
            format_metric_value(Some(entry.value), unit),
            format_score_percent(entry.score),
            entry.bucket
        );
    }
    if !ranking.missing.is_empty() {
        push_line!(out, "N/A: {}", ranking.missing.join(", "));
    }
    let counts: Vec<String> = ranking
        .bucket_counts()
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(bucket, n)| format!("{bucket}: {n}"))
        .collect();
    push_line!(out, "{}", counts.join(", "));
    out
}

pub fn heatmap(heatmap: &Heatmap<'_>) -> String {
    if heatmap.is_empty() {
        return format!("{NO_RESULTS}\n");
    }
    let mut out = String::new();
    push!(out, "{:<16}", "");
    for metric in &heatmap.metrics {
        push!(out, " {:>18}", metric.short_name);
    }
    push_line!(out);
    for row in &heatmap.rows {
        push!(out, "{:<16}", row.model_id);
        for (cell, metric) in row.cells.iter().zip(&heatmap.metrics) {
            let value = format_metric_value(cell.value, metric.unit.as_deref());
            let shown = match cell.bucket {
                Some(bucket) => format!("{value} [{}]", bucket.as_str()),
                None => value,
            };
            push!(out, " {shown:>18}");
        }
        push_line!(out);
    }
    out
}
