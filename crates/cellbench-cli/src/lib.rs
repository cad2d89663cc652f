//! cellbench-cli — Command-line presentation layer over the cellbench pipeline.

pub mod cli;
pub mod commands;
pub mod render;
pub mod telemetry;

pub use cli::{Cli, Command, Kind};
pub use commands::App;
