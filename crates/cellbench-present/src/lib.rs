//! cellbench-present — Display labels, colours and value formatting.
//!
//! Every lookup is total. A code with no known presentation renders as itself
//! in neutral gray.

pub mod badge;
pub mod palette;
pub mod labels;
pub mod format;

pub use badge::{badge_for_code, Badge, Badged, NEUTRAL_GRAY};
pub use format::{
    dataset_display_id, dataset_stats_line, format_count, format_metric_value, format_score_percent,
};
pub use labels::{direction_icon, framework_color, species_label, species_short_label};
pub use palette::{category_palette, CategoryPalette};
