//! Magpie CLI - Command line interface for the Magpie review agents
//!
//! Three agents that gather local Go sources, assemble a single prompt, and
//! send it to the Anthropic API for a review or a generated test file.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use magpie_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ArchitectArgs, ReviewArgs, TestgenArgs};

/// Magpie: LLM-backed code review agents for Go projects
#[derive(Parser, Debug)]
#[command(name = "magpie")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Model to use (overrides config and env)
    #[arg(long, global = true, env = "MAGPIE_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Conduct a thorough code review
    #[command(visible_alias = "rv")]
    Review(ReviewArgs),

    /// Generate comprehensive tests for Go code
    #[command(visible_alias = "tg")]
    Testgen(TestgenArgs),

    /// Review Go API code for architectural best practices
    #[command(visible_alias = "ar")]
    Architect(ArchitectArgs),

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.model.clone())?;

    if cli.verbose {
        tracing::info!(
            model = %config.agent.model,
            max_tokens = %config.agent.max_tokens,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("magpie {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Review(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Testgen(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Architect(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Config) => {
            println!("Magpie Configuration");
            println!("====================");
            println!();
            println!("Agent Settings:");
            println!("  model: {}", config.agent.model);
            println!("  max_tokens: {}", config.agent.max_tokens);
            println!();
            if let Some(path) = Config::default_config_path() {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Magpie - LLM-backed code review agents for Go projects");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
