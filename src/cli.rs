// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// This tool has no subcommands - just one optional positional argument
// plus a couple of output flags, so a single struct is enough.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: Represents arguments the user may omit
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "idea-forge",
    version = "0.1.0",
    about = "Generates a project idea and ships it to GitHub",
    long_about = "idea-forge picks a project idea from its built-in catalog, renders a README \
                  for it, and creates a new public GitHub repository via git and the gh CLI. \
                  Pass a theme (e.g. \"CLI\" or \"data\") to bias which category gets picked."
)]
pub struct Cli {
    /// Optional theme matched against category names (case-insensitive)
    ///
    /// This is a positional argument; omit it for a fully random pick.
    /// A theme that matches no category falls back to a random pick too.
    pub theme: Option<String>,

    /// Output the publish outcome in JSON format instead of status lines
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Pick an idea and print its README without creating anything
    ///
    /// This is an optional flag: --dry-run
    /// Nothing is written to disk and no external command is run.
    #[arg(long)]
    pub dry_run: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Where did the Subcommand enum go?
//    - Tools with several verbs (fetch, scan, ...) use #[command(subcommand)]
//    - This tool does exactly one thing, so plain fields suffice
//
// 2. Why Option<String> for theme?
//    - Option models "the user may not pass this" directly in the type
//    - clap turns a missing positional into None automatically
//
// 3. How do the doc comments relate to --help?
//    - clap uses the first doc-comment line as the short help text
//    - The remaining lines show up in --help's long output
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_theme_positional() {
        let cli = Cli::parse_from(["idea-forge", "CLI"]);
        assert_eq!(cli.theme.as_deref(), Some("CLI"));
        assert!(!cli.json);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["idea-forge"]);
        assert!(cli.theme.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["idea-forge", "data", "--json", "--dry-run"]);
        assert_eq!(cli.theme.as_deref(), Some("data"));
        assert!(cli.json);
        assert!(cli.dry_run);
    }
}
