// src/publisher/exec.rs
// =============================================================================
// Thin wrapper around external command invocation.
//
// Every git/gh call goes through run(), which returns a typed result:
// exit code plus captured stdout and stderr. Callers decide what a
// non-zero exit means - nothing in here swallows failures.
//
// Two distinct failure shapes:
// - The command could not be launched at all (binary missing): Err
// - The command ran and exited non-zero: Ok(CommandOutput) with the code
//
// Rust concepts:
// - tokio::process::Command: async subprocess spawning
// - String::from_utf8_lossy: tolerate non-UTF-8 bytes in captured output
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

// The typed result of one external command invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Process exit code (-1 if the process was killed by a signal)
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// True when the command exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Iterates over stdout lines followed by stderr lines
    ///
    /// gh prints its result URL to either stream depending on version,
    /// so callers scan both.
    pub fn combined_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().chain(self.stderr.lines())
    }
}

// Runs an external command in a working directory and waits for it to exit
//
// Parameters:
//   program: binary name resolved via PATH (e.g. "git", "gh")
//   args: arguments, passed through without shell interpretation
//   cwd: working directory for the child process
//
// Blocks the calling task until the child exits. No timeout: a hung
// command hangs the whole run.
pub async fn run(program: &str, args: &[&str], cwd: &Path) -> Result<CommandOutput> {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .await
        .with_context(|| format!("failed to launch '{}' (is it installed?)", program))?;

    Ok(CommandOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::process::Command?
//    - The async twin of std::process::Command
//    - .output().await spawns the child, waits for exit, and collects
//      everything it wrote to stdout and stderr
//    - While waiting, the runtime is free to do other work (not that this
//      tool has any - the pipeline is strictly sequential)
//
// 2. Why from_utf8_lossy?
//    - Child processes can emit arbitrary bytes
//    - "lossy" replaces invalid UTF-8 sequences with U+FFFD instead of
//      failing, which is the right trade-off for log-ish output
//
// 3. Why can exit_code be None (and become -1)?
//    - On Unix, a process killed by a signal has no exit code
//    - -1 is a sentinel that is never a real success value
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_helper() {
        let ok = CommandOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());

        let failed = CommandOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!failed.success());
    }

    #[test]
    fn test_combined_lines_order() {
        let output = CommandOutput {
            exit_code: 0,
            stdout: "out1\nout2\n".to_string(),
            stderr: "err1\n".to_string(),
        };
        let lines: Vec<&str> = output.combined_lines().collect();
        assert_eq!(lines, vec!["out1", "out2", "err1"]);
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = run("sh", &["-c", "echo hello"], &std::env::temp_dir())
            .await
            .unwrap();
        assert_eq!(output.exit_code, 0);
        assert!(output.stdout.contains("hello"));
    }

    #[tokio::test]
    async fn test_run_captures_failure() {
        let output = run("sh", &["-c", "echo oops >&2; exit 3"], &std::env::temp_dir())
            .await
            .unwrap();
        assert_eq!(output.exit_code, 3);
        assert!(output.stderr.contains("oops"));
    }

    #[tokio::test]
    async fn test_run_missing_binary_is_an_error() {
        let result = run("definitely-not-a-real-binary-xyz", &[], &std::env::temp_dir()).await;
        assert!(result.is_err());
    }
}
