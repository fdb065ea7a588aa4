//! Entity Tests
//!
//! Extraction, competitor filtering and brand linking over realistic
//! queries, with the built-in table and with caller-supplied ones.

use crate::entities::{
    extract_entities, link_to_known_brands, recognize_competitors, BrandLinker, BrandTable, Entity,
    EntityRecognizer, EntityType, MatchSource,
};

fn lower_names(entities: &[Entity]) -> Vec<String> {
    entities.iter().map(|e| e.name.to_lowercase()).collect()
}

#[cfg(test)]
mod extraction_tests {
    use super::*;

    #[test]
    fn test_vs_chain_returns_all_participants() {
        let entities = extract_entities("Asana vs Trello vs ClickUp");

        assert!(entities.len() >= 3);
        assert_eq!(lower_names(&entities), vec!["asana", "trello", "clickup"]);
        assert!(entities.iter().all(|e| e.entity_type == EntityType::Competitor));
    }

    #[test]
    fn test_generic_phrases_yield_nothing() {
        let queries = [
            "project management software",
            "best CRM software for small business",
            "How to pick an invoicing tool",
            "",
        ];

        for query in queries {
            let entities = extract_entities(query);
            assert!(entities.is_empty(), "Expected no entities for '{}', got {:?}", query, entities);
        }
    }

    #[test]
    fn test_unknown_names_from_cues() {
        let names = recognize_competitors("looking for alternatives to Acmeflow, or something like Widgetly");
        assert_eq!(names, vec!["Acmeflow", "Widgetly"]);
    }

    #[test]
    fn test_confidence_by_source() {
        let entities = extract_entities("Notion vs Acmeflow, though Zentrix Cloud looks nice");

        let by_name = |name: &str| entities.iter().find(|e| e.name == name).cloned();
        assert_eq!(by_name("Notion").map(|e| e.source), Some(MatchSource::KnownBrand));
        assert_eq!(by_name("Acmeflow").map(|e| e.source), Some(MatchSource::Comparison));
        assert_eq!(by_name("Zentrix Cloud").map(|e| e.source), Some(MatchSource::Capitalization));

        for entity in &entities {
            assert!((0.0..=1.0).contains(&entity.confidence));
        }
    }

    #[test]
    fn test_multi_word_brand_alias() {
        let entities = extract_entities("moving off quickbooks online this year");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "quickbooks online");
        assert_eq!(entities[0].source, MatchSource::KnownBrand);
    }

    #[test]
    fn test_unknown_name_opening_the_query() {
        for query in ["Zentrix pricing", "Zentrix reviews 2024"] {
            let entities = extract_entities(query);
            assert_eq!(lower_names(&entities), vec!["zentrix"], "Unexpected entities for '{}'", query);
            assert_eq!(entities[0].source, MatchSource::SentenceStart);
            assert!(entities[0].confidence < 0.5);
            assert!(recognize_competitors(query).is_empty());
        }
    }

    #[test]
    fn test_audience_is_not_a_competitor() {
        let entities = extract_entities("alternatives to Zentrix for Agencies");
        assert_eq!(lower_names(&entities), vec!["zentrix"]);

        let names = recognize_competitors("Trello vs Asana for Dentists");
        assert_eq!(names, vec!["Trello", "Asana"]);
    }

    #[test]
    fn test_everyday_words_are_not_brands() {
        assert!(extract_entities("I have a notion to zoom out").is_empty());
        assert!(extract_entities("how to stripe a wall").is_empty());

        let entities = extract_entities("is Slack better than zoom meetings");
        assert_eq!(lower_names(&entities), vec!["slack", "zoom meetings"]);
        assert!(entities.iter().all(|e| e.source == MatchSource::KnownBrand));
    }

    #[test]
    fn test_entity_json_shape() {
        let entities = extract_entities("Trello vs Asana");
        let json = serde_json::to_value(&entities[0]).unwrap();

        assert_eq!(json["name"], "Trello");
        assert_eq!(json["type"], "competitor");
        assert_eq!(json["source"], "known_brand");
        assert!(json.get("linked").is_none());
    }
}

#[cfg(test)]
mod linking_tests {
    use super::*;

    #[test]
    fn test_notion_is_linked() {
        let linked = link_to_known_brands(&[Entity::competitor("Notion", MatchSource::Capitalization)]);

        assert_eq!(linked[0].linked, Some(true));
        assert!(linked[0].category.as_deref().is_some_and(|c| !c.is_empty()));
    }

    #[test]
    fn test_unknown_startup_is_not_linked() {
        let linked = link_to_known_brands(&[Entity::competitor("Unknown Startup", MatchSource::Capitalization)]);
        assert!(!linked[0].is_linked());
    }

    #[test]
    fn test_possessive_brand_is_linked() {
        let linked = link_to_known_brands(&extract_entities("Why is Trello's pricing so high"));

        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].name, "Trello");
        assert_eq!(linked[0].source, MatchSource::KnownBrand);
        assert_eq!(linked[0].linked, Some(true));
        assert_eq!(linked[0].category.as_deref(), Some("project management"));
    }

    #[test]
    fn test_extract_then_link() {
        let linked = link_to_known_brands(&extract_entities("switching from QuickBooks to Acmeflow"));

        assert_eq!(lower_names(&linked), vec!["quickbooks", "acmeflow"]);
        assert_eq!(linked[0].category.as_deref(), Some("accounting"));
        assert_eq!(linked[1].linked, Some(false));
        // Linking never changes names, types or confidences.
        assert_eq!(linked[0].entity_type, EntityType::Competitor);
        assert_eq!(linked[0].confidence, MatchSource::KnownBrand.confidence());
    }
}

#[cfg(test)]
mod custom_table_tests {
    use super::*;

    const CUSTOM_BRANDS: &str = r#"[
        {"canonicalName": "Acmeflow", "category": "workflow", "aliases": ["acme flow"]},
        {"canonicalName": "Widgetly", "category": "widgets"}
    ]"#;

    #[test]
    fn test_lowercase_mentions_of_custom_brands() {
        let table = BrandTable::from_json_str(CUSTOM_BRANDS).unwrap();
        let recognizer = EntityRecognizer::new(&table);

        let entities = recognizer.extract("is acme flow cheaper than widgetly?");
        assert_eq!(lower_names(&entities), vec!["acme flow", "widgetly"]);
        assert!(entities.iter().all(|e| e.source == MatchSource::KnownBrand));

        let linked = BrandLinker::new(&table).link(&entities);
        assert_eq!(linked[0].category.as_deref(), Some("workflow"));
        assert_eq!(linked[1].category.as_deref(), Some("widgets"));
    }

    #[test]
    fn test_custom_table_does_not_know_builtin_brands() {
        let table = BrandTable::from_json_str(CUSTOM_BRANDS).unwrap();
        let linked = BrandLinker::new(&table).link(&[Entity::competitor("Notion", MatchSource::Capitalization)]);
        assert_eq!(linked[0].linked, Some(false));
    }
}
