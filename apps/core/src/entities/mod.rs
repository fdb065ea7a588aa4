//! # Entities Module
//!
//! Rule-based recognition of competitor and brand mentions in free-text
//! queries, and linking of those mentions to a static known-brand table.
//!
//! ## Components
//! - `tokens`: query tokenization and the generic-word list
//! - `matchers`: independent matchers (known brand, comparison cue, capitalization,
//!   sentence start)
//! - `recognizer`: priority-ordered combination of the matchers
//! - `brands`: the immutable known-brand table
//! - `linker`: enrichment of entities with brand metadata
//! - `entity`: output data structure

pub mod brands;
pub mod entity;
pub mod linker;
pub mod matchers;
pub mod recognizer;
pub mod tokens;

pub use brands::{BrandTable, KnownBrandEntry};
pub use entity::{Entity, EntityType, MatchSource};
pub use linker::{link_to_known_brands, BrandLinker};
pub use matchers::{Candidate, EntityMatcher};
pub use recognizer::{
    extract_entities, recognize_competitors, EntityRecognizer, DEFAULT_MIN_COMPETITOR_CONFIDENCE,
};
