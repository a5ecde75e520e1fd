// src/publisher/repo.rs
// =============================================================================
// The publish pipeline: scratch directory -> local git history -> GitHub.
//
// Steps:
// 1. Create <temp_dir>/<repo_name>/ and write the rendered README into it
// 2. git init, git add README.md, git commit (each checked for exit 0)
// 3. gh repo create <repo_name> --public --source=. --push
// 4. Interpret gh's output: find the github.com line, or synthesize a URL
//
// Failure model:
// - Filesystem faults and git failures are hard errors (anyhow, exit 2)
// - A failed gh invocation is a *soft* failure: the run completes and
//   reports PublishOutcome { success: false } with gh's stderr
// - No retries, no cleanup: a failed run can leave the scratch directory
//   and even an already-created remote behind
//
// Rust concepts:
// - async/await: Each external command is awaited in sequence
// - Separation of I/O and logic: interpret_remote_result is a pure
//   function so tests can cover it without running gh
// =============================================================================

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::exec::{self, CommandOutput};
use super::readme::render_readme;
use crate::selector::SelectedIdea;

// The hosting domain gh's success output is scanned for
const HOSTING_DOMAIN: &str = "github.com";

// What a publish run produced
//
// #[derive(Serialize)] lets --json print this directly
#[derive(Debug, Clone, Serialize)]
pub struct PublishOutcome {
    /// Whether the remote repository was created and pushed
    pub success: bool,
    /// The generated repository name (base name + suffix)
    pub repo_name: String,
    /// On success: the repo URL (from gh's output, or synthesized)
    /// On failure: gh's stderr, trimmed
    pub message: String,
}

// Publishes a selected idea as a new public GitHub repository
//
// Returns Ok(outcome) whenever the pipeline ran to the gh step - check
// outcome.success for the actual result. Returns Err only for faults
// before that point (filesystem, git).
pub async fn publish(idea: &SelectedIdea) -> Result<PublishOutcome> {
    let repo_name = idea.repo_name();
    let scratch_dir = scratch_dir_for(&repo_name);

    // Stage the README in the scratch directory
    tokio::fs::create_dir_all(&scratch_dir)
        .await
        .with_context(|| format!("failed to create scratch dir {}", scratch_dir.display()))?;
    let readme_path = scratch_dir.join("README.md");
    tokio::fs::write(&readme_path, render_readme(idea))
        .await
        .with_context(|| format!("failed to write {}", readme_path.display()))?;

    // Build the local one-commit history
    run_checked("git", &["init"], &scratch_dir).await?;
    run_checked("git", &["add", "README.md"], &scratch_dir).await?;
    let commit_message = format!("Initial commit: {}", idea.tagline);
    run_checked("git", &["commit", "-m", &commit_message], &scratch_dir).await?;

    // Create the remote and push. This is the one step whose failure is
    // reported rather than propagated.
    let result = exec::run(
        "gh",
        &[
            "repo",
            "create",
            &repo_name,
            "--public",
            "--source=.",
            "--push",
            "--description",
            idea.tagline,
        ],
        &scratch_dir,
    )
    .await?;

    Ok(interpret_remote_result(&result, &repo_name))
}

// Where a repository gets staged before pushing
fn scratch_dir_for(repo_name: &str) -> PathBuf {
    std::env::temp_dir().join(repo_name)
}

// Runs a command and turns a non-zero exit into a hard error
//
// Every step's exit code gates the pipeline; a failing git invocation
// surfaces with its stderr instead of being silently discarded.
async fn run_checked(program: &str, args: &[&str], cwd: &std::path::Path) -> Result<CommandOutput> {
    let output = exec::run(program, args, cwd).await?;
    if !output.success() {
        bail!(
            "'{} {}' exited with code {}: {}",
            program,
            args.join(" "),
            output.exit_code,
            output.stderr.trim()
        );
    }
    Ok(output)
}

// Turns gh's captured output into a PublishOutcome
//
// Success: the first stdout/stderr line mentioning github.com is the URL
// gh printed; if no line matches, synthesize a best guess from the repo
// name. Failure: pass gh's stderr through.
fn interpret_remote_result(output: &CommandOutput, repo_name: &str) -> PublishOutcome {
    if output.success() {
        let message = output
            .combined_lines()
            .find(|line| line.contains(HOSTING_DOMAIN))
            .map(|line| line.trim().to_string())
            .unwrap_or_else(|| format!("https://github.com/{}", repo_name));

        PublishOutcome {
            success: true,
            repo_name: repo_name.to_string(),
            message,
        }
    } else {
        PublishOutcome {
            success: false,
            repo_name: repo_name.to_string(),
            message: output.stderr.trim().to_string(),
        }
    }
}
