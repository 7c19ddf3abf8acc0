//! The shared agent pipeline: assemble context, dispatch once, return text
//!
//! Assembly is total over every `(AgentKind, ContextSource)` pair. An empty
//! context short-circuits before dispatch; a failed diff command degrades to
//! an inline message and still dispatches.

use std::path::Path;

use async_trait::async_trait;

use crate::agent::AgentKind;
use crate::claude::{ClaudeClient, MessageRequest};
use crate::config::AgentConfig;
use crate::context::{self, render, Assembly, ContextSource, FileFilter};
use crate::git;
use crate::Result;

/// Backend that turns a system prompt and user content into response text
///
/// The backend is constructed once per invocation and passed in explicitly,
/// so tests can substitute a mock transport.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Get the name of this backend
    fn name(&self) -> &'static str;

    /// Produce a single completion for the given prompts
    async fn complete(&self, system: &str, user_content: &str) -> Result<String>;
}

/// Completion backend over the Anthropic Messages API
#[derive(Clone)]
pub struct ClaudeBackend {
    client: ClaudeClient,
    config: AgentConfig,
}

impl ClaudeBackend {
    /// Create a backend from an API key and agent configuration
    pub fn new(api_key: impl Into<String>, config: AgentConfig) -> Self {
        Self {
            client: ClaudeClient::new(api_key),
            config,
        }
    }
}

#[async_trait]
impl CompletionBackend for ClaudeBackend {
    fn name(&self) -> &'static str {
        "claude"
    }

    async fn complete(&self, system: &str, user_content: &str) -> Result<String> {
        let request = MessageRequest::new(&self.config, system, user_content);
        let response = self.client.send_message(&request).await?;
        Ok(response.text())
    }
}

/// The result of one agent run
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Nothing to send; carries the "no files found" explanation
    Skipped(String),
    /// The service's response text
    Completed(String),
}

/// Assemble the context blob for an agent from the given source
pub async fn assemble(kind: AgentKind, source: &ContextSource, root: &Path) -> Assembly {
    let filter = FileFilter::go();

    let files = match source {
        ContextSource::DiffScoped { base } => {
            return assemble_diff(kind, base, root, &filter).await;
        }
        ContextSource::DirectoryScan => context::find_source_files(root, &filter),
        ContextSource::ExplicitList(files) => context::filter_explicit(
            files,
            &filter,
            kind.excludes_tests_in_explicit_mode(),
        ),
    };

    let Some(mut blob) = context::render_section(root, kind.primary_heading(), &files) else {
        return Assembly::Empty(kind.empty_message().to_string());
    };

    match kind {
        AgentKind::TestGen => {
            let tests = context::find_test_files(root, &filter);
            if let Some(section) =
                context::render_section(root, "# Existing Tests (for reference)", &tests)
            {
                blob.push('\n');
                blob.push_str(&section);
            }
        }
        AgentKind::Architect => {
            let specs = context::find_api_specs(root);
            if let Some(section) =
                context::render_section(root, "# API Specifications", &specs)
            {
                blob.push('\n');
                blob.push_str(&section);
            }
        }
        AgentKind::Review => {}
    }

    Assembly::Ready(blob)
}

/// Assemble diff-scoped context: the diff itself plus full changed files
async fn assemble_diff(
    kind: AgentKind,
    base: &str,
    root: &Path,
    filter: &FileFilter,
) -> Assembly {
    let mut blob = match git::diff(root, base, filter).await {
        Ok(diff) if diff.trim().is_empty() => {
            return Assembly::Empty("No changes to review.".to_string());
        }
        Ok(diff) => render::render_diff(base, &diff),
        // Failed diff command: embed the diagnostic in place of the diff
        // content and keep going.
        Err(message) => render::render_diff(base, &message),
    };

    let changed: Vec<String> = git::changed_files(root, base, filter)
        .await
        .into_iter()
        .filter(|path| root.join(path).exists())
        .collect();

    if let Some(section) = context::render_section(root, "# Full Files (for context)", &changed) {
        blob.push('\n');
        blob.push_str(&section);
    }

    tracing::debug!(agent = %kind, base = %base, changed_files = changed.len(), "Assembled diff-scoped context");

    Assembly::Ready(blob)
}

/// Run one agent: assemble, short-circuit on empty, dispatch exactly once
pub async fn run_agent(
    kind: AgentKind,
    source: &ContextSource,
    root: &Path,
    backend: &dyn CompletionBackend,
) -> Result<Outcome> {
    match assemble(kind, source, root).await {
        Assembly::Empty(message) => {
            tracing::info!(agent = %kind, "Nothing to send: {}", message);
            Ok(Outcome::Skipped(message))
        }
        Assembly::Ready(blob) => {
            tracing::info!(agent = %kind, backend = backend.name(), bytes = blob.len(), "Dispatching context");
            let user_content = kind.frame_request(&blob);
            let text = backend.complete(kind.system_prompt(), &user_content).await?;
            Ok(Outcome::Completed(text))
        }
    }
}
