//! File discovery for context assembly
//!
//! Discovery walks the root recursively and keeps Go sources, excluding
//! `_test.go` files, sorted lexicographically so assembled context is
//! deterministic. Explicit file lists are filtered but keep caller order.

use std::path::Path;

use walkdir::WalkDir;

/// Filter describing which files an agent considers source code
#[derive(Debug, Clone)]
pub struct FileFilter {
    /// Required file extension, including the dot
    pub extension: &'static str,
    /// Substring marking a file as a test
    pub test_marker: &'static str,
}

impl FileFilter {
    /// The filter used by all three agents: Go sources, `_test.go` excluded
    pub fn go() -> Self {
        Self {
            extension: ".go",
            test_marker: "_test.go",
        }
    }

    /// Whether a path has the expected extension
    pub fn matches_extension(&self, path: &str) -> bool {
        path.ends_with(self.extension)
    }

    /// Whether a path is marked as a test file
    pub fn is_test(&self, path: &str) -> bool {
        path.contains(self.test_marker)
    }
}

/// Normalize a walked path to be root-relative
///
/// Discovered paths are read back by joining them to the same root, so they
/// must not carry the root prefix themselves; with a `.` root this also
/// makes labels read the way callers wrote them (`a.go`, `sub/c.go`).
fn normalize(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

/// Recursively find all source files under `root`, excluding tests
///
/// Results are root-relative, sorted lexicographically. Unreadable
/// directories are skipped.
pub fn find_source_files(root: &Path, filter: &FileFilter) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| normalize(root, entry.path()))
        .filter(|path| filter.matches_extension(path) && !filter.is_test(path))
        .collect();
    files.sort();
    files
}

/// Recursively find all test files under `root`, root-relative, sorted
pub fn find_test_files(root: &Path, filter: &FileFilter) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| normalize(root, entry.path()))
        .filter(|path| filter.is_test(path))
        .collect();
    files.sort();
    files
}

/// Filter an explicit file list down to matching sources, preserving order
pub fn filter_explicit(files: &[String], filter: &FileFilter, exclude_tests: bool) -> Vec<String> {
    files
        .iter()
        .filter(|path| filter.matches_extension(path))
        .filter(|path| !exclude_tests || !filter.is_test(path))
        .cloned()
        .collect()
}

/// Find OpenAPI/Swagger specification files under `root`
///
/// Matches `*.yaml`, `*.yml` and `*.json` files whose path contains
/// `openapi` or `swagger` (case-insensitive), plus a root `openapi.yaml`.
pub fn find_api_specs(root: &Path) -> Vec<String> {
    let mut specs: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| normalize(root, entry.path()))
        .filter(|path| {
            let lower = path.to_lowercase();
            (lower.ends_with(".yaml") || lower.ends_with(".yml") || lower.ends_with(".json"))
                && (lower.contains("openapi") || lower.contains("swagger"))
        })
        .collect();
    specs.sort();

    let root_spec = root.join("openapi.yaml");
    if root_spec.exists() {
        let normalized = normalize(root, &root_spec);
        if !specs.contains(&normalized) {
            specs.push(normalized);
        }
    }

    specs
}
