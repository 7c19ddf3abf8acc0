//! Magpie Core - Core library for the Magpie code review agents
//!
//! This crate provides the shared context-assembly pipeline behind the three
//! Magpie agents: file discovery, fenced context rendering, git diff capture,
//! the Anthropic Messages API client, and the dispatch pipeline.

pub mod agent;
pub mod claude;
pub mod config;
pub mod context;
pub mod error;
pub mod git;
pub mod pipeline;
pub mod secrets;

pub use agent::AgentKind;
pub use claude::ClaudeClient;
pub use config::Config;
pub use context::{ContextSource, FileBlock};
pub use error::{Error, Result};
pub use pipeline::{run_agent, ClaudeBackend, CompletionBackend, Outcome};
