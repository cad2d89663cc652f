//! Ranking tables: one metric over every model benchmarked on a dataset.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use cellbench_catalog::BenchmarkTable;
use cellbench_common::Metric;

use crate::bucket::{rank_bucket, BucketCounts, RankBucket};
use crate::normalise::ScoreNormaliser;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    /// 1-based, best first.
    pub rank: usize,
    pub model_id: &'a str,
    pub value: f64,
    pub score: f64,
    pub bucket: RankBucket,
    pub color: &'static str,
}

/// Models ranked by normalised score for one (dataset, metric).
///
/// Models with a row but no value for the metric are listed in `missing` and
/// never ranked or counted.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<'a> {
    pub dataset_id: &'a str,
    pub metric: &'a Metric,
    pub entries: Vec<RankedEntry<'a>>,
    pub missing: Vec<&'a str>,
}

impl<'a> Ranking<'a> {
    pub fn build(
        table: &'a BenchmarkTable,
        dataset_id: &'a str,
        metric: &'a Metric,
        normaliser: &ScoreNormaliser,
    ) -> Self {
        let mut scored = Vec::new();
        let mut missing = Vec::new();
        for row in table.results_for_dataset(dataset_id) {
            match row.value(&metric.id) {
                Some(value) => {
                    scored.push((row.model_id.as_str(), value, normaliser.score(value, metric)))
                }
                None => missing.push(row.model_id.as_str()),
            }
        }

        // stable: ties keep recorded order
        scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

        let entries: Vec<RankedEntry<'a>> = scored
            .into_iter()
            .enumerate()
            .map(|(i, (model_id, value, score))| {
                let bucket = rank_bucket(score);
                RankedEntry {
                    rank: i + 1,
                    model_id,
                    value,
                    score,
                    bucket,
                    color: bucket.color(),
                }
            })
            .collect();

        debug!(
            dataset = dataset_id,
            metric = %metric.id,
            ranked = entries.len(),
            missing = missing.len(),
            "Built ranking"
        );

        Self {
            dataset_id,
            metric,
            entries,
            missing,
        }
    }

    /// True when no model has a value for this combination.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<&RankedEntry<'a>> {
        self.entries.first()
    }

    pub fn bucket_counts(&self) -> BucketCounts {
        self.entries.iter().map(|e| e.bucket).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbench_common::{BenchmarkSuite, BetterDirection, MetricRange};
    use cellbench_test_utils::{assert_close, bench_row, metric};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn table() -> BenchmarkTable {
        BenchmarkTable::new(BenchmarkSuite {
            id: "suite".to_string(),
            name: "Suite".to_string(),
            benchmark_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            results: vec![
                bench_row("lung", "scvi", &[("nmi", Some(0.41)), ("dav", Some(3.2))]),
                bench_row("lung", "peakvi", &[("nmi", None), ("dav", Some(1.0))]),
                bench_row("lung", "clear", &[("nmi", Some(0.88)), ("dav", Some(25.0))]),
                bench_row("lung", "scalex", &[("nmi", Some(0.41))]),
                bench_row("brain", "scvi", &[("nmi", Some(0.99))]),
            ],
        })
        .unwrap()
    }

    fn ids<'a>(ranking: &Ranking<'a>) -> Vec<&'a str> {
        ranking.entries.iter().map(|e| e.model_id).collect()
    }

    #[test]
    fn test_higher_is_better_ranking() {
        let table = table();
        let nmi = metric("nmi", MetricRange::bounded(0.0, 1.0), BetterDirection::Higher);
        let ranking = Ranking::build(&table, "lung", &nmi, &ScoreNormaliser::default());

        assert_eq!(ids(&ranking), vec!["clear", "scvi", "scalex"]);
        assert_eq!(ranking.entries[0].rank, 1);
        assert_eq!(ranking.entries[0].bucket, RankBucket::Excellent);
        assert_eq!(ranking.missing, vec!["peakvi"]);
    }

    #[test]
    fn test_lower_is_better_ranking() {
        let table = table();
        let dav = metric("dav", MetricRange::unbounded(0.0), BetterDirection::Lower);
        let ranking = Ranking::build(&table, "lung", &dav, &ScoreNormaliser::default());

        assert_eq!(ids(&ranking), vec!["peakvi", "scvi", "clear"]);
        assert_close(ranking.entries[2].score, 0.75);
        assert_eq!(ranking.missing, vec!["scalex"]);
    }

    #[test]
    fn test_bucket_counts_exclude_missing() {
        let table = table();
        let nmi = metric("nmi", MetricRange::bounded(0.0, 1.0), BetterDirection::Higher);
        let ranking = Ranking::build(&table, "lung", &nmi, &ScoreNormaliser::default());
        let counts = ranking.bucket_counts();

        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(RankBucket::Moderate), 2);
    }

    #[test]
    fn test_unknown_dataset_is_empty() {
        let table = table();
        let nmi = metric("nmi", MetricRange::bounded(0.0, 1.0), BetterDirection::Higher);
        let ranking = Ranking::build(&table, "heart", &nmi, &ScoreNormaliser::default());
        assert!(ranking.is_empty());
        assert!(ranking.best().is_none());
    }
}
