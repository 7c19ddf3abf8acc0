//! Review command - senior-engineer code review of Go sources or a git diff

use std::path::PathBuf;

use clap::Args;
use magpie_core::{run_agent, AgentKind, ClaudeBackend, Config, ContextSource};

use crate::output;

/// Arguments for the review command
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Specific files to review (defaults to all Go files)
    #[arg(long, num_args = 0..)]
    pub files: Option<Vec<String>>,

    /// Review only the git diff instead of full files
    #[arg(long)]
    pub diff: bool,

    /// Base branch for diff comparison
    #[arg(long, default_value = "main")]
    pub base: String,

    /// Output file for the review (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to gather context from
    #[arg(short = 'd', long, default_value = ".")]
    pub dir: PathBuf,
}

impl ReviewArgs {
    /// Select the context source from the flags
    pub fn context_source(&self) -> ContextSource {
        if self.diff {
            return ContextSource::DiffScoped {
                base: self.base.clone(),
            };
        }

        match &self.files {
            Some(files) if !files.is_empty() => ContextSource::ExplicitList(files.clone()),
            _ => ContextSource::DirectoryScan,
        }
    }

    /// Execute the review command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        // Credential check comes first: a missing key must fail before any
        // file discovery happens.
        let api_key = magpie_core::secrets::require_api_key()?;

        let kind = AgentKind::Review;
        let source = self.context_source();

        if verbose {
            tracing::info!(
                source = ?source,
                dir = %self.dir.display(),
                "Starting code review"
            );
        }

        eprintln!("{}\n", kind.banner());

        let backend = ClaudeBackend::new(api_key, config.agent.clone());
        let outcome = run_agent(kind, &source, &self.dir, &backend).await?;

        output::route(kind, &outcome, self.output.as_deref())
    }
}
