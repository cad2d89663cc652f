//! Subcommand execution against a loaded catalog.

use std::io::Write;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::debug;

use cellbench_catalog::Catalog;
use cellbench_config::{Config, UiPreferences};
use cellbench_query::{filter, search_all, DatasetFacets, MetricFacets, ModelFacets};
use cellbench_ranker::{Heatmap, Ranking, ScoreNormaliser};

use crate::cli::{Command, Kind};
use crate::render;

/// The loaded catalog plus settings, shared by every subcommand.
pub struct App {
    pub catalog: Catalog,
    pub config: Config,
    /// Render JSON instead of text.
    pub json: bool,
}

#[derive(Serialize)]
struct CatalogSummary<'a> {
    suite: &'a str,
    benchmark_date: String,
    models: usize,
    datasets: usize,
    metrics: usize,
    results: usize,
}

impl App {
    pub fn new(catalog: Catalog, config: Config, json: bool) -> Self {
        Self {
            catalog,
            config,
            json,
        }
    }

    fn normaliser(&self) -> ScoreNormaliser {
        ScoreNormaliser::with_soft_cap(self.config.scoring.unbounded_soft_cap)
    }

    fn emit<W: Write, T: Serialize + ?Sized>(
        &self,
        out: &mut W,
        value: &T,
        text: impl FnOnce() -> String,
    ) -> Result<()> {
        if self.json {
            let rendered = serde_json::to_string_pretty(value)?;
            writeln!(out, "{rendered}")?;
        } else {
            write!(out, "{}", text())?;
        }
        Ok(())
    }

    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        debug!(?command, "Running command");
        match command {
            Command::Models {
                query,
                category,
                modality,
                complexity,
                interpretability,
            } => {
                let facets = ModelFacets {
                    category: *category,
                    modality: *modality,
                    complexity: *complexity,
                    interpretability: *interpretability,
                };
                let found = filter(self.catalog.models().all(), query, &facets);
                self.emit(out, &found, || render::list(&found, render::model_line, "models"))
            }

            Command::Datasets {
                query,
                data_type,
                category,
                species,
            } => {
                let facets = DatasetFacets {
                    data_type: *data_type,
                    category: *category,
                    species: species.clone(),
                };
                let found = filter(self.catalog.datasets().all(), query, &facets);
                self.emit(out, &found, || {
                    render::list(&found, render::dataset_line, "datasets")
                })
            }

            Command::Metrics {
                query,
                category,
                direction,
            } => {
                let facets = MetricFacets {
                    category: *category,
                    better_direction: *direction,
                };
                let found = filter(self.catalog.metrics().all(), query, &facets);
                self.emit(out, &found, || render::list(&found, render::metric_line, "metrics"))
            }

            Command::Show { kind, id } => self.show(*kind, id, out),

            Command::Search { query, highlight } => {
                let results = search_all(&self.catalog, query);
                self.emit(out, &results, || render::search(&results, *highlight))
            }

            Command::Categories { kind } => match kind {
                Kind::Model => {
                    let table = self.catalog.models().categories();
                    self.emit(out, &table, || render::categories(&table))
                }
                Kind::Dataset => {
                    let table = self.catalog.datasets().categories();
                    self.emit(out, &table, || render::categories(&table))
                }
                Kind::Metric => {
                    let table = self.catalog.metrics().categories();
                    self.emit(out, &table, || render::categories(&table))
                }
            },

            Command::Rank { dataset, metric } => {
                let metric = self
                    .catalog
                    .metrics()
                    .get_by_id(metric)
                    .with_context(|| format!("metric '{metric}' not found"))?;
                let ranking = Ranking::build(
                    self.catalog.benchmarks(),
                    dataset,
                    metric,
                    &self.normaliser(),
                );
                self.emit(out, &ranking, || render::ranking(&ranking))
            }

            Command::Heatmap {
                dataset,
                metrics,
                limit,
            } => {
                let metric_ids: &[String] = if metrics.is_empty() {
                    &self.config.scoring.heatmap_metrics
                } else {
                    metrics
                };
                let limit = limit.unwrap_or(self.config.scoring.heatmap_model_limit);
                let heatmap = Heatmap::build(
                    &self.catalog,
                    dataset,
                    metric_ids,
                    Some(limit),
                    &self.normaliser(),
                );
                self.emit(out, &heatmap, || render::heatmap(&heatmap))
            }

            Command::Validate => {
                let benchmarks = self.catalog.benchmarks();
                let summary = CatalogSummary {
                    suite: benchmarks.suite_id(),
                    benchmark_date: benchmarks.benchmark_date().to_string(),
                    models: self.catalog.models().len(),
                    datasets: self.catalog.datasets().len(),
                    metrics: self.catalog.metrics().len(),
                    results: benchmarks.len(),
                };
                self.emit(out, &summary, || {
                    format!(
                        "Catalog OK: {} models, {} datasets, {} metrics, {} benchmark results ({} {})\n",
                        summary.models,
                        summary.datasets,
                        summary.metrics,
                        summary.results,
                        summary.suite,
                        summary.benchmark_date
                    )
                })
            }

            Command::Prefs { theme, font_size } => {
                let display = &self.config.display;
                let prefs = UiPreferences::resolve(
                    Some(theme.as_deref().unwrap_or(&display.theme)),
                    Some(font_size.as_deref().unwrap_or(&display.font_size)),
                    display.system_prefers_dark,
                );
                self.emit(out, &prefs, || {
                    format!(
                        "theme: {}\nfont size: {} ({}px)\n",
                        prefs.theme.as_str(),
                        prefs.font_size.as_str(),
                        prefs.root_font_px
                    )
                })
            }
        }
    }

    fn show<W: Write>(&self, kind: Kind, id: &str, out: &mut W) -> Result<()> {
        match kind {
            Kind::Model => match self.catalog.models().get_by_id(id) {
                Some(model) => self.emit(out, model, || render::model_detail(model)),
                None => bail!("model '{id}' not found"),
            },
            Kind::Dataset => match self.catalog.datasets().get_by_id(id) {
                Some(dataset) => {
                    self.emit(out, dataset, || render::dataset_detail(dataset, &self.catalog))
                }
                None => bail!("dataset '{id}' not found"),
            },
            Kind::Metric => match self.catalog.metrics().get_by_id(id) {
                Some(metric) => self.emit(out, metric, || render::metric_detail(metric)),
                None => bail!("metric '{id}' not found"),
            },
        }
    }
}
