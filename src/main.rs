// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Pick an idea (optionally biased by the theme argument)
// 3. Publish it as a new GitHub repository (unless --dry-run)
// 4. Print the outcome and exit with proper code
//    (0 = published, 1 = gh reported failure, 2 = internal error)
//
// Rust concepts:
// - async/await: The publish pipeline awaits external commands
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to map results to exit codes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod catalog; // src/catalog/ - the built-in idea table
mod cli; // src/cli.rs - command-line parsing
mod publisher; // src/publisher/ - README rendering + git/gh pipeline
mod selector; // src/selector/ - idea selection

use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            // {:#} includes the chain of contexts anyhow collected
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = idea published (or dry run finished)
//   Ok(1) = the remote-creation command failed
//   Err = unexpected error (filesystem fault, git failure, ...)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🤖 Idea agent activated...");
    println!();

    // An unmatched theme silently falls back to a random pick inside the
    // selector, so give the user a visible heads-up here
    if let Some(theme) = cli.theme.as_deref() {
        if catalog::find_category(theme).is_none() {
            println!("⚠️  No category matches theme '{}', picking at random", theme);
        }
    }

    // Pick an idea and stamp it with a fresh collision-avoidance suffix
    let idea = selector::select(cli.theme.as_deref(), &mut rand::thread_rng());

    println!("💡 Idea: {}", idea.repo_name());
    println!("📝 Tagline: {}", idea.tagline);
    println!("📁 Category: {}", idea.category_name);
    println!();

    if cli.dry_run {
        // Show what would be published, then stop before any side effects
        println!("📄 README preview (nothing will be created):");
        println!();
        println!("{}", publisher::render_readme(&idea));
        return Ok(0);
    }

    println!("🔨 Creating repository...");
    let outcome = publisher::publish(&idea).await?;

    if cli.json {
        // Serialize the outcome to JSON and print
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.success {
        println!("✅ Success! Repository created:");
        println!("   {}", outcome.message);
    } else {
        println!("❌ Failed: {}", outcome.message);
    }

    println!();

    if outcome.success {
        Ok(0) // Exit code 0 = repository created and pushed
    } else {
        Ok(1) // Exit code 1 = gh reported failure
    }
}
