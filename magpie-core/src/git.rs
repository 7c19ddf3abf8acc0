//! Git diff capture for diff-scoped context
//!
//! Diff mode shells out to `git diff` scoped to the agent's extension
//! filter. A failing command degrades to a sentinel message embedded in the
//! context instead of aborting the pipeline.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::context::FileFilter;

/// Get the diff against a base reference, scoped to matching files
///
/// Returns `Err` with a sentinel message embedding the command's diagnostic
/// output when the command fails; callers embed that message in the context
/// rather than propagating the failure.
pub async fn diff(root: &Path, base: &str, filter: &FileFilter) -> Result<String, String> {
    let pathspec = format!("*{}", filter.extension);

    let output = Command::new("git")
        .arg("diff")
        .arg(base)
        .arg("--")
        .arg(&pathspec)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| format!("Error getting git diff: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Error getting git diff: {}", stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// List files changed relative to a base reference, scoped to matching files
///
/// Returns an empty list when the command fails; the diff itself carries the
/// diagnostic in that case.
pub async fn changed_files(root: &Path, base: &str, filter: &FileFilter) -> Vec<String> {
    let pathspec = format!("*{}", filter.extension);

    let output = Command::new("git")
        .arg("diff")
        .arg("--name-only")
        .arg(base)
        .arg("--")
        .arg(&pathspec)
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_diff_outside_repo_degrades_to_message() {
        if !git_available().await {
            return;
        }

        let dir = TempDir::new().unwrap();
        let result = diff(dir.path(), "main", &FileFilter::go()).await;

        let message = result.unwrap_err();
        assert!(message.starts_with("Error getting git diff:"));
        assert!(!message.trim_end().ends_with("Error getting git diff:"));
    }

    #[tokio::test]
    async fn test_changed_files_outside_repo_is_empty() {
        if !git_available().await {
            return;
        }

        let dir = TempDir::new().unwrap();
        let files = changed_files(dir.path(), "main", &FileFilter::go()).await;
        assert!(files.is_empty());
    }
}
