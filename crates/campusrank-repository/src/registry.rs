//! Read-only ranking type lookup table
//!
//! A [`RankingTypeRegistry`] is a snapshot taken from a repository before a
//! ranking run. Scoring and rendering read from it synchronously; it never
//! changes while a run is in progress. Replacing the stored ranking types
//! means building a new registry.

use campusrank_core::RankingType;
use std::collections::HashMap;

use crate::error::RepositoryResult;
use crate::traits::RankingTypeRepository;

/// Ranking types keyed by name
#[derive(Debug, Clone, Default)]
pub struct RankingTypeRegistry {
    by_name: HashMap<String, RankingType>,
    order: Vec<String>,
}

impl RankingTypeRegistry {
    /// Build a registry; a later entry replaces an earlier one of the same name
    pub fn new(ranking_types: Vec<RankingType>) -> Self {
        let mut registry = Self::default();
        for rt in ranking_types {
            if !registry.by_name.contains_key(&rt.name) {
                registry.order.push(rt.name.clone());
            }
            registry.by_name.insert(rt.name.clone(), rt);
        }
        registry
    }

    /// Snapshot the ranking types currently stored in a repository
    pub async fn load(repository: &dyn RankingTypeRepository) -> RepositoryResult<Self> {
        let ranking_types = repository.load_ranking_types().await?;
        Ok(Self::new(ranking_types))
    }

    /// Look up a ranking type by exact name
    pub fn get(&self, name: &str) -> Option<&RankingType> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Ranking types in insertion order
    pub fn all(&self) -> Vec<RankingType> {
        self.order
            .iter()
            .filter_map(|name| self.by_name.get(name))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = RankingTypeRegistry::new(RankingType::defaults());

        assert_eq!(registry.len(), 3);
        assert!(registry.contains("Affordability"));
        assert!(registry.get("affordability").is_none());
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["Overall", "Affordability", "Online Programs"]
        );
    }

    #[test]
    fn test_registry_later_duplicate_wins() {
        let registry = RankingTypeRegistry::new(vec![
            RankingType::new("Overall", vec!["Enrollment".to_string()]).unwrap(),
            RankingType::new("Overall", vec!["Median Debt".to_string()]).unwrap(),
        ]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("Overall").unwrap().criteria, vec!["Median Debt"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = RankingTypeRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.all().is_empty());
    }
}
