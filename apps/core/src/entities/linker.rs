//! Links recognized entities to the known-brand table.

use tracing::debug;

use super::brands::BrandTable;
use super::entity::Entity;

/// Attaches `linked` and `category` metadata; never renames an entity.
pub struct BrandLinker<'a> {
    table: &'a BrandTable,
}

impl<'a> BrandLinker<'a> {
    pub fn new(table: &'a BrandTable) -> Self {
        Self { table }
    }

    /// Enriched copy of a single entity
    pub fn link_one(&self, entity: &Entity) -> Entity {
        let mut linked = entity.clone();

        match self.table.lookup(&entity.name) {
            Some(brand) => {
                linked.linked = Some(true);
                linked.category = Some(brand.category.clone());
            }
            None => {
                linked.linked = Some(false);
            }
        }

        linked
    }

    /// Enriched copy of every entity; the input is left untouched.
    pub fn link(&self, entities: &[Entity]) -> Vec<Entity> {
        let linked: Vec<Entity> = entities.iter().map(|e| self.link_one(e)).collect();

        debug!(
            total = linked.len(),
            linked = linked.iter().filter(|e| e.is_linked()).count(),
            "entities linked to known brands"
        );

        linked
    }
}

/// Link `entities` against the built-in brand table.
pub fn link_to_known_brands(entities: &[Entity]) -> Vec<Entity> {
    BrandLinker::new(BrandTable::builtin()).link(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::entity::{EntityType, MatchSource};

    #[test]
    fn test_known_brand_is_linked() {
        let input = vec![Entity::competitor("notion", MatchSource::Capitalization)];
        let output = link_to_known_brands(&input);

        assert_eq!(output[0].linked, Some(true));
        assert_eq!(output[0].category.as_deref(), Some("productivity"));
        // Name and type are preserved.
        assert_eq!(output[0].name, "notion");
        assert_eq!(output[0].entity_type, EntityType::Competitor);
        // Input untouched.
        assert_eq!(input[0].linked, None);
    }

    #[test]
    fn test_alias_is_linked() {
        let output = link_to_known_brands(&[Entity::competitor("QBO", MatchSource::Comparison)]);
        assert!(output[0].is_linked());
        assert_eq!(output[0].category.as_deref(), Some("accounting"));
        assert_eq!(output[0].name, "QBO");
    }

    #[test]
    fn test_unknown_passes_through() {
        let output = link_to_known_brands(&[Entity::competitor("Unknown Startup", MatchSource::Capitalization)]);
        assert_eq!(output[0].linked, Some(false));
        assert!(output[0].category.is_none());
        assert!(!output[0].is_linked());
    }

    #[test]
    fn test_empty_input() {
        assert!(link_to_known_brands(&[]).is_empty());
    }
}
