//! The query filter.

use tracing::debug;

use cellbench_common::CatalogEntry;

use crate::facets::Facets;

/// Case-insensitive substring match against the entity's search fields.
///
/// The empty query matches every entity. The query is used as given: leading
/// or trailing whitespace is part of the needle.
pub fn matches_query<E: CatalogEntry>(entity: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_needle(entity, &needle)
}

fn contains_needle<E: CatalogEntry>(entity: &E, needle: &str) -> bool {
    entity
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Entities matching `query` and every selected facet, in input order.
pub fn filter<'a, E, F>(entities: &'a [E], query: &str, facets: &F) -> Vec<&'a E>
where
    E: CatalogEntry,
    F: Facets<E>,
{
    let needle = query.to_lowercase();
    let matched: Vec<&E> = entities
        .iter()
        .filter(|e| facets.admits(e))
        .filter(|e| needle.is_empty() || contains_needle(*e, &needle))
        .collect();

    debug!(
        kind = E::KIND,
        query,
        facets = facets.active(),
        matched = matched.len(),
        total = entities.len(),
        "Filtered catalog"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::ModelFacets;
    use cellbench_common::{Complexity, Model, ModelCategory};
    use cellbench_test_utils::model;
    use pretty_assertions::assert_eq;

    fn models() -> Vec<Model> {
        let mut scvi = model("scvi", ModelCategory::Generative);
        scvi.tags = vec!["VAE".to_string(), "Batch Correction".to_string()];
        let mut peakvi = model("peakvi", ModelCategory::AtacSpecific);
        peakvi.description = "Variational model for chromatin accessibility".to_string();
        let mut clear = model("clear", ModelCategory::Predictive);
        clear.complexity = Complexity::Simple;
        clear.tags = vec!["contrastive".to_string()];
        vec![scvi, peakvi, clear]
    }

    fn ids(found: &[&Model]) -> Vec<String> {
        found.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn test_empty_query_and_facets_return_everything_in_order() {
        let models = models();
        let found = filter(&models, "", &ModelFacets::default());
        assert_eq!(ids(&found), vec!["scvi", "peakvi", "clear"]);
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let models = models();
        assert_eq!(ids(&filter(&models, "vae", &ModelFacets::default())), vec!["scvi"]);
        assert_eq!(
            ids(&filter(&models, "CHROMATIN", &ModelFacets::default())),
            vec!["peakvi"]
        );
        // display names are "<id> model"
        assert_eq!(ids(&filter(&models, "model", &ModelFacets::default())).len(), 3);
    }

    #[test]
    fn test_query_and_facets_combine() {
        let models = models();
        let facets = ModelFacets {
            complexity: Some(Complexity::Simple),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&models, "contrast", &facets)), vec!["clear"]);
        assert!(filter(&models, "vae", &facets).is_empty());
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let models = models();
        assert!(filter(&models, " scvi ", &ModelFacets::default()).is_empty());
        assert!(matches_query(&models[0], "SCVI"));
        assert!(!matches_query(&models[0], "atac"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let models = models();
        let first = ids(&filter(&models, "a", &ModelFacets::default()));
        let second = ids(&filter(&models, "a", &ModelFacets::default()));
        assert_eq!(first, second);
    }
}
