//! cellbench-ranker — Benchmark score normalisation and ranking.
//!
//! Raw metric values are mapped onto `[0, 1]` (1 = best) honouring the
//! metric's declared range and polarity, then bucketed into five colour bands.

pub mod normalise;
pub mod bucket;
pub mod ranking;
pub mod heatmap;

pub use bucket::{rank_bucket, BucketCounts, RankBucket};
pub use heatmap::{Heatmap, HeatmapCell, HeatmapRow};
pub use normalise::{ScoreNormaliser, DEFAULT_UNBOUNDED_SOFT_CAP};
pub use ranking::{RankedEntry, Ranking};
