//! Texttable - multi-language text tables for games and apps
//!
//! Texttable loads a canonical JSON text table (one row per text id, one
//! field per language), merges translated columns from spreadsheet exports,
//! writes the table back in canonical form and looks text up at runtime.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Languages, id normalization, stores, loader, overlay merge,
//!   serializer and the runtime localizer
//! - `issues`: Diagnostic type definitions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
