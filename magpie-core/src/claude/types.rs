//! Anthropic Messages API request/response types

use serde::{Deserialize, Serialize};

use crate::config::AgentConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    pub model: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<Message>,
}

impl MessageRequest {
    /// Build a single-turn request with a system prompt and one user message
    pub fn new(config: &AgentConfig, system: &str, user_content: &str) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            system: Some(system.to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: user_content.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub response_type: String,
    pub role: String,
    pub content: Vec<ContentBlock>,
    pub model: String,
    pub stop_reason: Option<String>,
}

/// Content block - only text blocks are consumed here
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(other)]
    Other,
}

impl ContentBlock {
    /// Extract text from a text block
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        }
    }
}

impl MessageResponse {
    /// Extract the first text segment of the response
    ///
    /// No structured parsing happens beyond this; anything past the first
    /// text block is ignored.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .find_map(|block| block.as_text())
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let config = AgentConfig::default();
        let request = MessageRequest::new(&config, "You are a reviewer.", "Review this.");

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "Review this.");
        assert_eq!(request.system.as_deref(), Some("You are a reviewer."));
        assert_eq!(request.max_tokens, 4096);
    }

    #[test]
    fn test_response_takes_first_text_segment() {
        let json = r#"{
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Looks good."},
                {"type": "text", "text": "One nit."}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn"
        }"#;

        let response: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "Looks good.");
    }

    #[test]
    fn test_response_ignores_unknown_blocks() {
        let json = r#"{
            "id": "msg_02",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "Only this."}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn"
        }"#;

        let response: MessageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), "Only this.");
    }
}
