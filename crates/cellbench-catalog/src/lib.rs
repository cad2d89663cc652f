//! cellbench-catalog — Immutable catalogs of models, datasets, and metrics.
//!
//! Holds the static tables, their category metadata, and the benchmark
//! results table. Everything is validated once at load time and read-only
//! afterwards.

pub mod store;
pub mod categories;
pub mod benchmarks;
pub mod catalog;

pub use benchmarks::BenchmarkTable;
pub use catalog::Catalog;
pub use categories::{CategoryDescriptor, CategoryInfo, DescribedCategory};
pub use store::CatalogStore;
