//! Agent definitions for Magpie
//!
//! Three agents share one pipeline, differing only in their system prompt,
//! file filtering, and the framing around the assembled context:
//! - Review: senior-engineer code review (supports diff-scoped context)
//! - TestGen: comprehensive test generation
//! - Architect: architecture and API design review

use std::fmt;

use serde::{Deserialize, Serialize};

/// Embedded system prompts for each agent
const REVIEW_PROMPT: &str = include_str!("prompts/review.md");
const TESTGEN_PROMPT: &str = include_str!("prompts/testgen.md");
const ARCHITECT_PROMPT: &str = include_str!("prompts/architect.md");

/// The kind of agent to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Review agent - conducts thorough code reviews
    #[default]
    Review,
    /// Test generation agent - writes comprehensive tests
    TestGen,
    /// Architect agent - reviews API design and architecture
    Architect,
}

impl AgentKind {
    /// Get all available agent kinds
    pub fn all() -> &'static [AgentKind] {
        &[AgentKind::Review, AgentKind::TestGen, AgentKind::Architect]
    }

    /// Get the short name for this agent kind
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Review => "review",
            AgentKind::TestGen => "testgen",
            AgentKind::Architect => "architect",
        }
    }

    /// Get a description of what this agent does
    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Review => "Conducts thorough code reviews",
            AgentKind::TestGen => "Generates comprehensive tests for Go code",
            AgentKind::Architect => "Reviews Go API code for architectural best practices",
        }
    }

    /// Get the system prompt for this agent kind
    pub fn system_prompt(&self) -> &'static str {
        match self {
            AgentKind::Review => REVIEW_PROMPT,
            AgentKind::TestGen => TESTGEN_PROMPT,
            AgentKind::Architect => ARCHITECT_PROMPT,
        }
    }

    /// One-line progress banner printed to stderr before dispatch
    pub fn banner(&self) -> &'static str {
        match self {
            AgentKind::Review => "Running Go Code Review...",
            AgentKind::TestGen => "Generating Go Tests...",
            AgentKind::Architect => "Running Go Architecture Review...",
        }
    }

    /// Wrap the assembled context in the agent's user-message framing
    pub fn frame_request(&self, context: &str) -> String {
        match self {
            AgentKind::Review => {
                format!("Please conduct a thorough code review:\n\n{}", context)
            }
            AgentKind::TestGen => format!(
                "Please generate comprehensive tests for the following Go code:\n\n{}\n\nProvide complete, runnable test files.",
                context
            ),
            AgentKind::Architect => format!(
                "Please review the following Go API code for architectural best practices:\n\n{}",
                context
            ),
        }
    }

    /// Message reported when no matching files are found
    pub fn empty_message(&self) -> &'static str {
        match self {
            AgentKind::Review => "No Go files found to review.",
            AgentKind::TestGen => "No Go files found to generate tests for.",
            AgentKind::Architect => "No Go files found to review.",
        }
    }

    /// Heading for the primary code section of the context
    pub fn primary_heading(&self) -> &'static str {
        match self {
            AgentKind::Review | AgentKind::Architect => "# Code to Review",
            AgentKind::TestGen => "# Source Code to Test",
        }
    }

    /// Whether explicit file lists should drop `_test.go` entries
    ///
    /// The test generator targets production code only; the reviewers accept
    /// whatever the caller handed them.
    pub fn excludes_tests_in_explicit_mode(&self) -> bool {
        matches!(self, AgentKind::TestGen)
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "review" => Ok(AgentKind::Review),
            "testgen" | "test" => Ok(AgentKind::TestGen),
            "architect" => Ok(AgentKind::Architect),
            other => Err(format!("Unknown agent kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_kinds_have_prompts() {
        for kind in AgentKind::all() {
            assert!(!kind.system_prompt().is_empty());
            assert!(!kind.banner().is_empty());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(AgentKind::from_str("review").unwrap(), AgentKind::Review);
        assert_eq!(AgentKind::from_str("TestGen").unwrap(), AgentKind::TestGen);
        assert_eq!(
            AgentKind::from_str("architect").unwrap(),
            AgentKind::Architect
        );
        assert!(AgentKind::from_str("unknown").is_err());
    }

    #[test]
    fn test_frame_request_embeds_context() {
        let framed = AgentKind::Review.frame_request("# Code to Review");
        assert!(framed.contains("# Code to Review"));
        assert!(framed.starts_with("Please conduct a thorough code review:"));
    }

    #[test]
    fn test_only_testgen_excludes_tests() {
        assert!(AgentKind::TestGen.excludes_tests_in_explicit_mode());
        assert!(!AgentKind::Review.excludes_tests_in_explicit_mode());
        assert!(!AgentKind::Architect.excludes_tests_in_explicit_mode());
    }
}
