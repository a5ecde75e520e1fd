// src/catalog/seeds.rs
// =============================================================================
// The static idea catalog: categories of useful micro-projects.
//
// Key points:
// - Everything here is `&'static` data compiled into the binary
// - The table is assumed well-formed (every category has at least one entry);
//   nothing validates it at runtime
// - `find_category` does a case-insensitive substring match so a theme like
//   "cli" or "Data" finds the right category
//
// Rust concepts:
// - const: Compile-time constants with no runtime initialization
// - &'static str: String slices that live for the entire program
// - Iterators: find() to scan the table in order
// =============================================================================

/// One project idea: a short name plus the copy that goes into its README.
#[derive(Debug, Clone, Copy)]
pub struct IdeaEntry {
    /// Short, repo-friendly name (e.g. "quickclip")
    pub short_name: &'static str,
    /// One-line pitch, also used as the remote repository description
    pub tagline: &'static str,
    /// A couple of sentences for the "What is this?" section
    pub description: &'static str,
}

/// A named group of related idea entries.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub entries: &'static [IdeaEntry],
}

// The catalog itself. Order matters: theme matching scans this table
// top-to-bottom and takes the first hit.
const IDEA_SEEDS: &[Category] = &[
    Category {
        name: "CLI Tools",
        entries: &[
            IdeaEntry {
                short_name: "quickclip",
                tagline: "Lightning-fast clipboard manager for the terminal",
                description: "A minimal CLI clipboard history tool. Copy once, paste forever.",
            },
            IdeaEntry {
                short_name: "jsonpretty",
                tagline: "Pretty-print and validate JSON from the command line",
                description: "Pipe JSON in, get beautiful formatted output. Validates syntax too.",
            },
            IdeaEntry {
                short_name: "portfinder",
                tagline: "Find what's running on any port instantly",
                description: "Simple CLI to check which process is hogging a port. Kill it if you want.",
            },
        ],
    },
    Category {
        name: "Developer Utilities",
        entries: &[
            IdeaEntry {
                short_name: "gitquick",
                tagline: "Git shortcuts for the lazy developer",
                description: "Aliases and scripts that make git operations stupidly fast.",
            },
            IdeaEntry {
                short_name: "envcheck",
                tagline: "Validate your .env files before deployment",
                description: "Catches missing variables, type mismatches, and secrets in wrong places.",
            },
            IdeaEntry {
                short_name: "depaudit",
                tagline: "Audit your dependencies for issues",
                description: "Quick scan for outdated, vulnerable, or unused packages.",
            },
        ],
    },
    Category {
        name: "Productivity",
        entries: &[
            IdeaEntry {
                short_name: "todocli",
                tagline: "Dead-simple todo list in your terminal",
                description: "No apps, no sync, no BS. Just todos in a file, managed from CLI.",
            },
            IdeaEntry {
                short_name: "focusblock",
                tagline: "Block distracting sites while you work",
                description: "Add sites to blocklist, set a timer, get stuff done.",
            },
            IdeaEntry {
                short_name: "timelog",
                tagline: "Track where your time actually goes",
                description: "Lightweight time tracking that doesn't get in your way.",
            },
        ],
    },
    Category {
        name: "Data Tools",
        entries: &[
            IdeaEntry {
                short_name: "csvknife",
                tagline: "Slice and dice CSV files from the terminal",
                description: "Filter, sort, select columns - all without opening Excel.",
            },
            IdeaEntry {
                short_name: "logparse",
                tagline: "Extract insights from messy log files",
                description: "Regex-powered log analysis for when grep isn't enough.",
            },
            IdeaEntry {
                short_name: "datasampler",
                tagline: "Generate realistic sample data fast",
                description: "Names, emails, addresses, timestamps - whatever you need for testing.",
            },
        ],
    },
];

// Returns the whole catalog for read-only iteration
pub fn all() -> &'static [Category] {
    IDEA_SEEDS
}

// Finds the first category whose name contains the theme, ignoring case
//
// Parameters:
//   theme: free-text hint, e.g. "CLI", "data", "productivity"
//
// Returns: Some(&Category) for the first match in table order, or None
//
// Example:
//   find_category("cli") -> Some(the "CLI Tools" category)
//   find_category("gardening") -> None
pub fn find_category(theme: &str) -> Option<&'static Category> {
    let needle = theme.to_lowercase();
    all()
        .iter()
        .find(|category| category.name.to_lowercase().contains(&needle))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why const and &'static?
//    - const items are evaluated at compile time
//    - The table lives in the binary's read-only data section
//    - &'static str means "a string that lives as long as the program"
//    - No allocation, no startup cost, no way to mutate it by accident
//
// 2. Why slices (&[IdeaEntry]) instead of Vec?
//    - Vec allocates on the heap and can grow
//    - We never add or remove entries, so a fixed slice is enough
//    - Slices of const data can be built entirely at compile time
//
// 3. What does derive(Clone, Copy) do here?
//    - These structs only hold references, which are trivially copyable
//    - Copy lets callers pass them around without worrying about ownership
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(!all().is_empty());
        for category in all() {
            assert!(!category.name.is_empty());
            assert!(
                !category.entries.is_empty(),
                "category '{}' has no entries",
                category.name
            );
        }
    }

    #[test]
    fn test_find_category_is_case_insensitive() {
        let category = find_category("cli").unwrap();
        assert_eq!(category.name, "CLI Tools");

        let category = find_category("CLI").unwrap();
        assert_eq!(category.name, "CLI Tools");
    }

    #[test]
    fn test_find_category_matches_substring() {
        let category = find_category("Data").unwrap();
        assert_eq!(category.name, "Data Tools");

        let category = find_category("utilities").unwrap();
        assert_eq!(category.name, "Developer Utilities");
    }

    #[test]
    fn test_find_category_no_match() {
        assert!(find_category("nonexistent-theme-xyz").is_none());
    }
}
