//! Testgen command - generate comprehensive tests for Go code

use std::path::PathBuf;

use clap::Args;
use magpie_core::{run_agent, AgentKind, ClaudeBackend, Config, ContextSource};

use crate::output;

/// Arguments for the testgen command
#[derive(Args, Debug)]
pub struct TestgenArgs {
    /// Specific files to generate tests for (defaults to all Go files)
    #[arg(long, num_args = 0..)]
    pub files: Option<Vec<String>>,

    /// Output file for the generated tests (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory to gather context from
    #[arg(short = 'd', long, default_value = ".")]
    pub dir: PathBuf,
}

impl TestgenArgs {
    /// Select the context source from the flags
    pub fn context_source(&self) -> ContextSource {
        match &self.files {
            Some(files) if !files.is_empty() => ContextSource::ExplicitList(files.clone()),
            _ => ContextSource::DirectoryScan,
        }
    }

    /// Execute the testgen command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let api_key = magpie_core::secrets::require_api_key()?;

        let kind = AgentKind::TestGen;
        let source = self.context_source();

        if verbose {
            tracing::info!(
                source = ?source,
                dir = %self.dir.display(),
                "Starting test generation"
            );
        }

        eprintln!("{}\n", kind.banner());

        let backend = ClaudeBackend::new(api_key, config.agent.clone());
        let outcome = run_agent(kind, &source, &self.dir, &backend).await?;

        output::route(kind, &outcome, self.output.as_deref())
    }
}
