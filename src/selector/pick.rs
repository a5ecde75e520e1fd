// src/selector/pick.rs
// =============================================================================
// Selection logic: turn an optional theme into one concrete idea.
//
// How it works:
// 1. If a theme is given, try to match it to a category (case-insensitive
//    substring against the category name)
// 2. Matched: uniformly sample one entry from that category
// 3. No theme, or no match: uniformly sample a category, then an entry
// 4. Draw a 4-character [a-z0-9] suffix to keep the repo name unique-ish
//    across runs (collisions are merely unlikely, not prevented)
//
// Rust concepts:
// - Traits as bounds: `impl Rng` accepts any generator, real or seeded
// - SliceRandom: the rand crate's uniform sampling over slices
// =============================================================================

use crate::catalog::{self, IdeaEntry};
use rand::seq::SliceRandom;
use rand::Rng;

/// Suffix alphabet: lowercase letters plus digits (36 symbols, 4 draws)
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const SUFFIX_LEN: usize = 4;

// One fully resolved idea, ready to hand to the publisher
//
// The catalog fields stay &'static (they point into the built-in table);
// only the suffix is freshly generated per run.
#[derive(Debug, Clone)]
pub struct SelectedIdea {
    /// Base name from the catalog, without the suffix (used in the README)
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub category_name: &'static str,
    /// 4 random [a-z0-9] characters appended to the repo name
    pub unique_suffix: String,
}

impl SelectedIdea {
    /// The public repository name: `<short_name>-<unique_suffix>`
    pub fn repo_name(&self) -> String {
        format!("{}-{}", self.short_name, self.unique_suffix)
    }
}

// Picks one idea entry, optionally biased by a theme
//
// Parameters:
//   theme: free-text hint matched against category names (None = random)
//   rng: any random number generator (tests pass a seeded StdRng)
//
// Returns: (entry, category_name)
//
// A theme that matches nothing silently falls back to the random path,
// so this function never fails on the (non-empty) built-in catalog.
pub fn pick(theme: Option<&str>, rng: &mut impl Rng) -> (&'static IdeaEntry, &'static str) {
    if let Some(theme) = theme {
        if let Some(category) = catalog::find_category(theme) {
            let entry = category
                .entries
                .choose(rng)
                .expect("catalog categories are never empty");
            return (entry, category.name);
        }
    }

    // Random pick: first a category, then an entry within it
    let category = catalog::all()
        .choose(rng)
        .expect("catalog is never empty");
    let entry = category
        .entries
        .choose(rng)
        .expect("catalog categories are never empty");
    (entry, category.name)
}

// Generates the collision-avoidance suffix: 4 chars from [a-z0-9]
//
// 36^4 possibilities. Collisions across runs are accepted, not checked.
pub fn unique_suffix(rng: &mut impl Rng) -> String {
    (0..SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET[idx] as char
        })
        .collect()
}

// Picks an idea and stamps it with a fresh suffix
//
// This is the one-stop entry point main() uses: everything the publisher
// needs, resolved in a single call.
pub fn select(theme: Option<&str>, rng: &mut impl Rng) -> SelectedIdea {
    let (entry, category_name) = pick(theme, rng);
    SelectedIdea {
        short_name: entry.short_name,
        tagline: entry.tagline,
        description: entry.description,
        category_name,
        unique_suffix: unique_suffix(rng),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `&mut impl Rng` instead of calling thread_rng() inside?
//    - Randomness makes functions hard to test
//    - Taking the generator as a parameter lets tests pass StdRng with a
//      fixed seed, making every draw reproducible
//    - Production code just passes rand::thread_rng()
//
// 2. What is .choose()?
//    - A method from the SliceRandom trait (rand::seq)
//    - Picks one element from a slice uniformly at random
//    - Returns Option because the slice could be empty
//
// 3. Why .expect() here?
//    - The catalog is compile-time data that always has entries
//    - An empty category would be a bug in this source file, not a runtime
//      condition worth handling
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_with_matching_theme() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let (entry, category_name) = pick(Some("CLI"), &mut rng);
            assert_eq!(category_name, "CLI Tools");
            assert!(["quickclip", "jsonpretty", "portfinder"].contains(&entry.short_name));
        }
    }

    #[test]
    fn test_pick_theme_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(7);
        let (_, category_name) = pick(Some("productivity"), &mut rng);
        assert_eq!(category_name, "Productivity");
    }

    #[test]
    fn test_pick_with_unmatched_theme_still_returns_an_idea() {
        let mut rng = StdRng::seed_from_u64(1);
        let (entry, category_name) = pick(Some("nonexistent-theme-xyz"), &mut rng);

        // Falls back to a random draw from some real category
        let category = crate::catalog::find_category(category_name).unwrap();
        assert!(category
            .entries
            .iter()
            .any(|e| e.short_name == entry.short_name));
    }

    #[test]
    fn test_pick_without_theme() {
        let mut rng = StdRng::seed_from_u64(99);
        let (entry, category_name) = pick(None, &mut rng);
        assert!(!entry.short_name.is_empty());
        assert!(crate::catalog::find_category(category_name).is_some());
    }

    #[test]
    fn test_suffix_length_and_charset() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let suffix = unique_suffix(&mut rng);
            assert_eq!(suffix.len(), 4);
            assert!(suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_select_is_reproducible_with_same_seed() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);

        let first = select(Some("data"), &mut a);
        let second = select(Some("data"), &mut b);

        assert_eq!(first.short_name, second.short_name);
        assert_eq!(first.unique_suffix, second.unique_suffix);
    }

    #[test]
    fn test_repo_name_appends_suffix() {
        let mut rng = StdRng::seed_from_u64(5);
        let idea = select(Some("CLI"), &mut rng);
        assert_eq!(
            idea.repo_name(),
            format!("{}-{}", idea.short_name, idea.unique_suffix)
        );
    }
}
