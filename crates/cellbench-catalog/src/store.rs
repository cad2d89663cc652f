//! Generic immutable table of catalog entries.

use std::collections::HashMap;

use cellbench_common::{CatalogEntry, CellbenchError, CodedEnum, Result};

use crate::categories::{CategoryInfo, DescribedCategory};

/// An insertion-ordered table of entries with unique ids.
#[derive(Debug, Clone)]
pub struct CatalogStore<T> {
    entries: Vec<T>,
    by_id: HashMap<String, usize>,
}

impl<T: CatalogEntry> CatalogStore<T> {
    /// Build a store, rejecting duplicate ids.
    pub fn new(entries: Vec<T>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            if by_id.insert(entry.id().to_string(), idx).is_some() {
                return Err(CellbenchError::DuplicateId {
                    kind: T::KIND,
                    id: entry.id().to_string(),
                });
            }
        }
        Ok(Self { entries, by_id })
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.by_id.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Entries of one category, in catalog order. May be empty.
    pub fn get_by_category(&self, category: T::Category) -> Vec<&T> {
        self.entries
            .iter()
            .filter(|e| e.category() == category)
            .collect()
    }

    pub fn count_in(&self, category: T::Category) -> usize {
        self.entries.iter().filter(|e| e.category() == category).count()
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> CatalogStore<T>
where
    T: CatalogEntry,
    T::Category: DescribedCategory,
{
    /// Category metadata for every category code, with counts derived from the entries.
    pub fn categories(&self) -> Vec<CategoryInfo<T::Category>> {
        T::Category::ALL
            .iter()
            .map(|&category| CategoryInfo::new(category, self.count_in(category)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellbench_common::{Model, ModelCategory};
    use cellbench_test_utils::model;
    use pretty_assertions::assert_eq;

    fn store() -> CatalogStore<Model> {
        CatalogStore::new(vec![
            model("scvi", ModelCategory::Generative),
            model("scgcc", ModelCategory::Predictive),
            model("scalex", ModelCategory::Generative),
        ])
        .unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let store = store();
        assert_eq!(store.get_by_id("scgcc").map(|m| m.id.as_str()), Some("scgcc"));
        assert!(store.get_by_id("missing").is_none());
        assert!(store.get_by_id("").is_none());
    }

    #[test]
    fn test_get_by_category_keeps_insertion_order() {
        let store = store();
        let ids: Vec<&str> = store
            .get_by_category(ModelCategory::Generative)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["scvi", "scalex"]);
        assert!(store.get_by_category(ModelCategory::Trajectory).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = CatalogStore::new(vec![
            model("scvi", ModelCategory::Generative),
            model("scvi", ModelCategory::Predictive),
        ])
        .unwrap_err();
        assert!(matches!(err, CellbenchError::DuplicateId { kind: "model", .. }));
    }

    #[test]
    fn test_categories_cover_every_code_with_derived_counts() {
        let table = store().categories();
        assert_eq!(table.len(), ModelCategory::ALL.len());
        let generative = table
            .iter()
            .find(|c| c.category == ModelCategory::Generative)
            .unwrap();
        assert_eq!(generative.count, 2);
        let trajectory = table
            .iter()
            .find(|c| c.category == ModelCategory::Trajectory)
            .unwrap();
        assert_eq!(trajectory.count, 0);
    }
}
