//! Anthropic Messages API integration

pub mod client;
pub mod types;

pub use client::ClaudeClient;
pub use types::{ContentBlock, Message, MessageRequest, MessageResponse};
