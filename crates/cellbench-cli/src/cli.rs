//! Command-line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use cellbench_common::{
    BetterDirection, Complexity, DataType, DatasetCategory, Interpretability, MetricCategory,
    Modality, ModelCategory,
};

#[derive(Debug, Parser)]
#[command(name = "cellbench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse single-cell models, datasets, metrics and benchmark rankings", long_about = None)]
pub struct Cli {
    /// Config file (default: cellbench.toml)
    #[arg(long, global = true, env = "CELLBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON-formatted log lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Render results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    #[value(alias = "models")]
    Model,
    #[value(alias = "datasets")]
    Dataset,
    #[value(alias = "metrics")]
    Metric,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List models, optionally filtered
    Models {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        category: Option<ModelCategory>,
        #[arg(long)]
        modality: Option<Modality>,
        #[arg(long)]
        complexity: Option<Complexity>,
        #[arg(long)]
        interpretability: Option<Interpretability>,
    },

    /// List datasets, optionally filtered
    Datasets {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        data_type: Option<DataType>,
        #[arg(long)]
        category: Option<DatasetCategory>,
        /// Species code, e.g. homo_sapiens
        #[arg(long)]
        species: Option<String>,
    },

    /// List metrics, optionally filtered
    Metrics {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(long)]
        category: Option<MetricCategory>,
        #[arg(long)]
        direction: Option<BetterDirection>,
    },

    /// Show one entry in detail
    Show {
        kind: Kind,
        id: String,
    },

    /// Search all three catalogs
    Search {
        query: String,
        /// Wrap matches in <mark> tags
        #[arg(long)]
        highlight: bool,
    },

    /// Category table with entry counts
    Categories {
        kind: Kind,
    },

    /// Rank models on one dataset by one metric
    Rank {
        #[arg(short, long)]
        dataset: String,
        #[arg(short, long)]
        metric: String,
    },

    /// Models × metrics grid for one dataset
    Heatmap {
        #[arg(short, long)]
        dataset: String,
        /// Comma-separated metric ids (default: scoring.heatmap_metrics)
        #[arg(long, value_delimiter = ',')]
        metrics: Vec<String>,
        /// Maximum number of models (default: scoring.heatmap_model_limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Load the catalog and check its integrity
    Validate,

    /// Resolve UI preferences
    Prefs {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        font_size: Option<String>,
    },
}
