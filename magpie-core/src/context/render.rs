//! Fenced rendering of source files into context blocks
//!
//! Every file becomes a `### File:` header followed by its contents fenced
//! with a language tag inferred from the extension. A file that could not be
//! read renders as an inline error block instead, so one bad file never
//! aborts the aggregation.

use std::path::Path;

/// Infer the fence language tag from a file extension
pub fn language_tag(path: &str) -> &str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("go") => "go",
        Some("yaml") | Some("yml") => "yaml",
        Some("json") => "json",
        Some("toml") => "toml",
        Some("md") => "markdown",
        Some("sh") => "sh",
        Some(other) if !other.is_empty() => other,
        _ => "",
    }
}

/// Render a successfully read file as a labeled fenced block
pub fn render_file(path: &str, content: &str) -> String {
    format!(
        "### File: {}\n```{}\n{}\n```\n",
        path,
        language_tag(path),
        content
    )
}

/// Render a read failure as an inline error block for that file only
pub fn render_error(path: &str, message: &str) -> String {
    format!("### File: {}\nError reading file: {}\n", path, message)
}

/// Render a raw diff as a fenced block
pub fn render_diff(base: &str, diff: &str) -> String {
    format!("# Git Diff (against {})\n\n```diff\n{}\n```\n", base, diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag("main.go"), "go");
        assert_eq!(language_tag("api/openapi.yaml"), "yaml");
        assert_eq!(language_tag("spec.yml"), "yaml");
        assert_eq!(language_tag("swagger.json"), "json");
        assert_eq!(language_tag("Makefile"), "");
    }

    #[test]
    fn test_render_file() {
        let block = render_file("main.go", "package main");
        assert_eq!(block, "### File: main.go\n```go\npackage main\n```\n");
    }

    #[test]
    fn test_render_error() {
        let block = render_error("gone.go", "No such file or directory");
        assert!(block.contains("### File: gone.go"));
        assert!(block.contains("Error reading file: No such file or directory"));
        assert!(!block.contains("```"));
    }

    #[test]
    fn test_render_diff() {
        let block = render_diff("main", "+added line");
        assert!(block.contains("# Git Diff (against main)"));
        assert!(block.contains("```diff\n+added line\n```"));
    }
}
