// src/publisher/readme.rs
// =============================================================================
// Renders the README for a freshly picked idea.
//
// Key points:
// - Pure string templating: same inputs always produce the same bytes
// - Uses the *base* short name (no suffix) - the suffix is only for the
//   remote repo name, not the document
// - Inputs come from the trusted built-in catalog, so nothing is escaped
//
// Rust concepts:
// - format!: Creates a String from a template with named placeholders
// - Raw-ish multiline strings via an embedded template
// =============================================================================

use crate::selector::SelectedIdea;

// Renders the full README.md contents for an idea
//
// Output is plain UTF-8 markdown. Deterministic: byte-identical output for
// identical inputs.
pub fn render_readme(idea: &SelectedIdea) -> String {
    format!(
        r#"# {name} 🚀

> {tagline}

## What is this?

{description}

## Installation

```bash
# Coming soon
cargo install {name}
```

## Usage

```bash
# Coming soon
{name} --help
```

## Why?

Because sometimes you just need a tool that does one thing well.

## Category

{category}

## Status

🌱 **Just planted** - this repository was created by an automated idea agent.

---

*Built by agents, judged by stars.* ⭐
"#,
        name = idea.short_name,
        tagline = idea.tagline,
        description = idea.description,
        category = idea.category_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};

    // A fixed idea for deterministic assertions
    fn todocli() -> SelectedIdea {
        SelectedIdea {
            short_name: "todocli",
            tagline: "Dead-simple todo list in your terminal",
            description: "No apps, no sync, no BS. Just todos in a file, managed from CLI.",
            category_name: "Productivity",
            unique_suffix: "ab12".to_string(),
        }
    }

    #[test]
    fn test_readme_contains_required_sections() {
        let readme = render_readme(&todocli());

        assert!(readme.contains("# todocli 🚀"));
        assert!(readme.contains("> Dead-simple todo list in your terminal"));
        assert!(readme.contains("Productivity"));
        assert!(readme.contains("No apps, no sync, no BS."));
    }

    #[test]
    fn test_readme_uses_base_name_not_repo_name() {
        let readme = render_readme(&todocli());

        // The suffix belongs to the remote repo name only
        assert!(!readme.contains("todocli-ab12"));
    }

    #[test]
    fn test_readme_is_deterministic() {
        let first = render_readme(&todocli());
        let second = render_readme(&todocli());
        assert_eq!(first, second);
    }

    #[test]
    fn test_readme_parses_with_idea_name_as_title() {
        let readme = render_readme(&todocli());

        // Walk the markdown events and collect the text of the first H1
        let mut in_title = false;
        let mut title = String::new();
        for event in Parser::new(&readme) {
            match event {
                Event::Start(Tag::Heading(HeadingLevel::H1, _, _)) => in_title = true,
                Event::End(Tag::Heading(HeadingLevel::H1, _, _)) => break,
                Event::Text(text) if in_title => title.push_str(&text),
                _ => {}
            }
        }

        assert!(title.contains("todocli"));
    }
}
