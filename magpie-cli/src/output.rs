//! Output routing: response text goes to a file or to stdout
//!
//! When writing to a file, a one-line confirmation goes to stderr so the
//! review text itself stays clean.

use std::path::Path;

use magpie_core::{AgentKind, Outcome};

/// What the written artifact is called in the confirmation line
fn noun(kind: AgentKind) -> &'static str {
    match kind {
        AgentKind::Review | AgentKind::Architect => "Review",
        AgentKind::TestGen => "Tests",
    }
}

/// Route an agent outcome to the destination path or stdout
///
/// A skipped run still routes its explanation the same way, so callers see
/// "no files found" wherever they expected the review.
pub fn route(kind: AgentKind, outcome: &Outcome, destination: Option<&Path>) -> anyhow::Result<()> {
    let text = match outcome {
        Outcome::Completed(text) => text,
        Outcome::Skipped(message) => message,
    };

    match destination {
        Some(path) => {
            std::fs::write(path, text)?;
            eprintln!("{} written to {}", noun(kind), path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_route_to_file_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review.md");
        std::fs::write(&path, "old contents").unwrap();

        let outcome = Outcome::Completed("new review".to_string());
        route(AgentKind::Review, &outcome, Some(&path)).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new review");
    }

    #[test]
    fn test_route_skipped_message_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("review.md");

        let outcome = Outcome::Skipped("No Go files found to review.".to_string());
        route(AgentKind::Review, &outcome, Some(&path)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "No Go files found to review."
        );
    }

    #[test]
    fn test_noun_per_agent() {
        assert_eq!(noun(AgentKind::Review), "Review");
        assert_eq!(noun(AgentKind::TestGen), "Tests");
        assert_eq!(noun(AgentKind::Architect), "Review");
    }
}
