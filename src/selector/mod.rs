// src/selector/mod.rs
// =============================================================================
// This module picks which idea to ship.
//
// Features:
// - Theme-biased selection: a theme that matches a category name restricts
//   the draw to that category
// - Fully random selection when no theme is given (or the theme matches
//   nothing - the caller is expected to warn the user about that case)
// - A short random suffix so repeated runs don't collide on repo names
//
// Rust concepts:
// - Generics: selection functions take any random number generator, which
//   lets tests pass in a seeded one
// - Re-exports: pub use keeps the public API flat
// =============================================================================

mod pick;

// Re-export the selection API
pub use pick::{pick, select, unique_suffix, SelectedIdea};
