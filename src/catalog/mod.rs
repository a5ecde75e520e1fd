// src/catalog/mod.rs
// =============================================================================
// This module holds the built-in catalog of project ideas.
//
// Features:
// - A static table of categories, each with a handful of idea seeds
// - Lookup of a category by a free-text theme (case-insensitive substring)
//
// The data is fixed at build time: no loading, no validation, no mutation.
// Everything hands out &'static references into the table.
//
// Rust concepts:
// - Statics: Data baked into the binary, alive for the whole process
// - Modules: Organizing related functionality
// =============================================================================

mod seeds;

// Re-export the public API so callers write `catalog::find_category(..)`
// instead of reaching into the seeds submodule
pub use seeds::{all, find_category, Category, IdeaEntry};
