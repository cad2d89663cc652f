//! cellbench-common — Shared record types, codes, and errors used across all cellbench crates.

pub mod error;
pub mod codes;
pub mod entities;
pub mod benchmark;

// Re-export commonly used types
pub use error::{CellbenchError, Result};
pub use codes::{CodedEnum, UnknownCode};
pub use entities::*;
pub use benchmark::{BenchmarkResult, BenchmarkSuite, MetricValue};
