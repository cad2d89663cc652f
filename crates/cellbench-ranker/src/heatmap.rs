//! Models × metrics performance grid for one dataset.

use serde::Serialize;
use tracing::{debug, warn};

use cellbench_catalog::Catalog;
use cellbench_common::Metric;

use crate::bucket::{rank_bucket, RankBucket};
use crate::normalise::ScoreNormaliser;

/// One grid cell. An absent value has no score, bucket or colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub value: Option<f64>,
    pub score: Option<f64>,
    pub bucket: Option<RankBucket>,
    pub color: Option<&'static str>,
}

impl HeatmapCell {
    const ABSENT: HeatmapCell = HeatmapCell {
        value: None,
        score: None,
        bucket: None,
        color: None,
    };

    fn new(value: Option<f64>, metric: &Metric, normaliser: &ScoreNormaliser) -> Self {
        match value {
            Some(value) => {
                let score = normaliser.score(value, metric);
                let bucket = rank_bucket(score);
                HeatmapCell {
                    value: Some(value),
                    score: Some(score),
                    bucket: Some(bucket),
                    color: Some(bucket.color()),
                }
            }
            None => Self::ABSENT,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRow<'a> {
    pub model_id: &'a str,
    /// One cell per heatmap metric, same order.
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap<'a> {
    pub dataset_id: &'a str,
    pub metrics: Vec<&'a Metric>,
    pub rows: Vec<HeatmapRow<'a>>,
}

impl<'a> Heatmap<'a> {
    /// Grid of the first `model_limit` catalog models against `metric_ids`
    /// on `dataset_id`. A model without a recorded result gets absent cells.
    /// Unknown metric ids are skipped.
    pub fn build<S: AsRef<str>>(
        catalog: &'a Catalog,
        dataset_id: &'a str,
        metric_ids: &[S],
        model_limit: Option<usize>,
        normaliser: &ScoreNormaliser,
    ) -> Self {
        let metrics: Vec<&'a Metric> = metric_ids
            .iter()
            .filter_map(|id| {
                let id = id.as_ref();
                let found = catalog.metrics().get_by_id(id);
                if found.is_none() {
                    warn!(metric = id, "Skipping unknown heatmap metric");
                }
                found
            })
            .collect();

        let table = catalog.benchmarks();
        let rows: Vec<HeatmapRow<'a>> = catalog
            .models()
            .all()
            .iter()
            .take(model_limit.unwrap_or(usize::MAX))
            .map(|model| HeatmapRow {
                model_id: model.id.as_str(),
                cells: metrics
                    .iter()
                    .map(|m| {
                        HeatmapCell::new(table.value(dataset_id, &model.id, &m.id), m, normaliser)
                    })
                    .collect(),
            })
            .collect();

        debug!(
            dataset = dataset_id,
            metrics = metrics.len(),
            models = rows.len(),
            "Built heatmap"
        );

        Self {
            dataset_id,
            metrics,
            rows,
        }
    }

    /// True when no cell in the grid has a recorded value.
    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells.iter().all(HeatmapCell::is_absent))
    }

    pub fn cell(&self, model_id: &str, metric_id: &str) -> Option<&HeatmapCell> {
        let col = self.metrics.iter().position(|m| m.id == metric_id)?;
        self.rows
            .iter()
            .find(|r| r.model_id == model_id)
            .and_then(|r| r.cells.get(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn test_absent_cell_has_no_color() {
        let catalog = catalog();
        let heatmap = Heatmap::build(
            &catalog,
            "gse124295_immune",
            &["nmi", "ari", "asw"],
            None,
            &ScoreNormaliser::default(),
        );
        let nmi = heatmap.cell("scvi", "nmi").unwrap();
        assert!(nmi.is_absent());
        assert_eq!(nmi.color, None);
        assert_eq!(nmi.bucket, None);

        let ari = heatmap.cell("scvi", "ari").unwrap();
        assert_eq!(ari.value, Some(-0.0222));
        assert!(ari.score.is_some());
    }

    #[test]
    fn test_model_limit_and_unknown_metric() {
        let catalog = catalog();
        let heatmap = Heatmap::build(
            &catalog,
            "gse117988_bone_marrow",
            &["nmi", "not_a_metric"],
            Some(5),
            &ScoreNormaliser::default(),
        );
        assert_eq!(heatmap.rows.len(), 5);
        assert_eq!(heatmap.metrics.len(), 1);
        assert!(heatmap.rows.iter().all(|r| r.cells.len() == 1));
    }

    #[test]
    fn test_missing_pair_yields_absent_cell() {
        let catalog = catalog();
        let heatmap = Heatmap::build(
            &catalog,
            "gse142088_atac_immune",
            &["nmi", "ari", "asw"],
            Some(5),
            &ScoreNormaliser::default(),
        );
        assert_eq!(heatmap.rows.len(), 5);
        assert!(catalog.benchmarks().result("gse142088_atac_immune", "scvi").is_none());

        let cell = heatmap.cell("scvi", "nmi").unwrap();
        assert!(cell.is_absent());
        assert_eq!(cell.color, None);
        assert_eq!(cell.bucket, None);

        let clear = heatmap.cell("clear", "nmi").unwrap();
        assert_eq!(
            clear.value,
            catalog.benchmarks().value("gse142088_atac_immune", "clear", "nmi")
        );
        assert!(!heatmap.is_empty());
    }

    #[test]
    fn test_rows_follow_catalog_order() {
        let catalog = catalog();
        let heatmap = Heatmap::build(
            &catalog,
            "gse124295_immune",
            &["nmi"],
            Some(3),
            &ScoreNormaliser::default(),
        );
        let ids: Vec<&str> = heatmap.rows.iter().map(|r| r.model_id).collect();
        let expected: Vec<&str> = catalog.models().all()[..3]
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_unknown_dataset_is_empty() {
        let catalog = catalog();
        let heatmap = Heatmap::build(
            &catalog,
            "nowhere",
            &["nmi", "ari"],
            Some(5),
            &ScoreNormaliser::default(),
        );
        assert_eq!(heatmap.rows.len(), 5);
        assert!(heatmap.is_empty());
    }
}
