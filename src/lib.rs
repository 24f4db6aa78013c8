//! financing-advisor library
//!
//! This crate provides the core functionality for the `financing-advisor` binary.
//! Keep the crate root minimal; implementation and tests live in their modules.
//!
//! ## Overview
//!
//! Given the free-text metadata of a Spanish financing program (grant, loan,
//! guarantee, tax incentive or equity instrument), the library classifies it
//! and generates Spanish advisory content as HTML fragments:
//!
//! - [`classifier`] - Ordered keyword tables mapping programs to categories and aid kinds
//! - [`catalog`] - Built-in advisory content, overridable from a TOML file
//! - [`generator`] - Project examples, advice, requirements, documentation and deadlines
//! - [`formatter`] - Turns raw advisor responses into readable HTML
//! - [`report`] - Info dialog body, printable document and search results table
//! - [`cards`] - Extracts programs from a rendered results page
//! - [`api`] - Single-attempt client for the program CRUD API
//! - [`loader`] - Finds and reads program JSON files
//! - [`cli`] - Command-line interface
//! - [`config`] - TOML settings
//! - [`models`] - Programs, categories and aid kinds
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```
//! use financing_advisor::generator::Advisor;
//! use financing_advisor::models::Category;
//!
//! let advisor = Advisor::default();
//! assert_eq!(advisor.classify("Kit Digital", "Subvención"), Category::Digitalization);
//!
//! let requirements = advisor.extract_requirements("");
//! assert!(requirements.starts_with("<ul class=\"mb-0\">"));
//!
//! let deadline = advisor.extract_deadline_info("Convocatoria permanente", "");
//! assert_eq!(deadline, "Convocatoria permanente sin fecha límite definida.");
//! ```

pub mod api;
pub mod cards;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod formatter;
pub mod generator;
pub mod loader;
pub mod models;
pub mod report;
