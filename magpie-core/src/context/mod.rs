//! Context assembly for Magpie agents
//!
//! A context is an ordered concatenation of labeled, fenced file blocks
//! (plus optional diff text and API specs) produced from one of three
//! sources: a recursive directory scan, an explicit file list, or a
//! diff-scoped file set.

pub mod discover;
pub mod render;

use std::path::Path;

pub use discover::{filter_explicit, find_api_specs, find_source_files, find_test_files, FileFilter};

/// Where the context files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextSource {
    /// Recursively scan the root directory for matching sources
    DirectoryScan,
    /// Use a caller-supplied file list, filtered to matching sources
    ExplicitList(Vec<String>),
    /// Limit context to files changed relative to a base reference
    DiffScoped {
        /// Branch or ref to diff against
        base: String,
    },
}

/// A single source file, read once, with read failure kept as data
///
/// A failed read renders as an inline error block for that file only; the
/// rest of the aggregation is unaffected.
#[derive(Debug, Clone)]
pub struct FileBlock {
    /// Path the file was addressed by
    pub path: String,
    /// File contents, or the read error message
    pub content: Result<String, String>,
}

impl FileBlock {
    /// Read a file into a block, capturing any error as data
    pub fn read(path: &str) -> Self {
        Self {
            path: path.to_string(),
            content: std::fs::read_to_string(path).map_err(|e| e.to_string()),
        }
    }

    /// Read a file addressed relative to `root`, labeled by its relative path
    pub fn read_in(root: &Path, path: &str) -> Self {
        Self {
            path: path.to_string(),
            content: std::fs::read_to_string(root.join(path)).map_err(|e| e.to_string()),
        }
    }

    /// Render the block as fenced text
    pub fn render(&self) -> String {
        match &self.content {
            Ok(content) => render::render_file(&self.path, content),
            Err(message) => render::render_error(&self.path, message),
        }
    }
}

/// The result of context assembly
#[derive(Debug, Clone)]
pub enum Assembly {
    /// Context is ready to dispatch
    Ready(String),
    /// Nothing to send; carries the human-readable explanation
    Empty(String),
}

/// Read and render a list of files under a section heading
///
/// Returns `None` when the list is empty so callers can skip the heading.
pub fn render_section(root: &Path, heading: &str, files: &[String]) -> Option<String> {
    if files.is_empty() {
        return None;
    }

    let mut section = format!("{}\n\n", heading);
    for path in files {
        section.push_str(&FileBlock::read_in(root, path).render());
    }
    Some(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_block_read_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.go");
        fs::write(&path, "package a").unwrap();

        let block = FileBlock::read(path.to_str().unwrap());
        assert_eq!(block.content.as_deref().unwrap(), "package a");
        assert!(block.render().contains("```go\npackage a\n```"));
    }

    #[test]
    fn test_file_block_read_error_is_data() {
        let block = FileBlock::read("/nonexistent/missing.go");
        assert!(block.content.is_err());

        let rendered = block.render();
        assert!(rendered.contains("### File: /nonexistent/missing.go"));
        assert!(rendered.contains("Error reading file:"));
    }

    #[test]
    fn test_render_section_ordering() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.go"), "package a").unwrap();
        fs::write(dir.path().join("b.go"), "package b").unwrap();

        let files = vec!["a.go".to_string(), "b.go".to_string()];
        let section = render_section(dir.path(), "# Code to Review", &files).unwrap();

        let a_pos = section.find("### File: a.go").unwrap();
        let b_pos = section.find("### File: b.go").unwrap();
        assert!(section.starts_with("# Code to Review\n\n"));
        assert!(a_pos < b_pos);
        assert!(section.contains("package a"));
        assert!(section.contains("package b"));
    }

    #[test]
    fn test_render_section_isolates_bad_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.go"), "package good").unwrap();

        let files = vec!["bad.go".to_string(), "good.go".to_string()];
        let section = render_section(dir.path(), "# Code to Review", &files).unwrap();

        assert!(section.contains("### File: bad.go\nError reading file:"));
        assert!(section.contains("```go\npackage good\n```"));
    }

    #[test]
    fn test_render_section_empty() {
        let dir = TempDir::new().unwrap();
        assert!(render_section(dir.path(), "# Code to Review", &[]).is_none());
    }
}
