//! cellbench-query — Free-text and facet filtering over the catalogs.
//!
//! Filtering never fails and never reorders: the result is the subset of the
//! input that matches the query and every selected facet, in input order.

pub mod facets;
pub mod filter;
pub mod search;
pub mod highlight;

pub use facets::{DatasetFacets, Facets, MetricFacets, ModelFacets};
pub use filter::{filter, matches_query};
pub use highlight::highlight;
pub use search::{search_all, SearchResults};
