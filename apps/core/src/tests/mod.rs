//! Test Module
//!
//! Cross-module test suite for the demand engine.
//!
//! ## Test Categories
//! - `scoring_tests`: signal normalizers, commercial intent, unified score and its breakdown
//! - `entity_tests`: entity extraction, competitor filtering, brand linking
//! - `config_tests`: environment configuration and brand files on disk
//! - `analyzer_tests`: end-to-end niche scoring, ranking and competitor analysis

pub mod entity_tests;
