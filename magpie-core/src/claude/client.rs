//! HTTP client for the Anthropic Messages API

use reqwest::Client;

use crate::{Error, Result};

use super::types::{MessageRequest, MessageResponse};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API
///
/// One client is constructed per invocation and makes exactly one round
/// trip. There is no retry and no timeout beyond the transport default.
#[derive(Clone)]
pub struct ClaudeClient {
    client: Client,
    api_key: String,
}

impl ClaudeClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Send a message request and return the parsed response
    pub async fn send_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        tracing::debug!(model = %request.model, "Sending request to Anthropic API");

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "Anthropic API request failed with status {}: {}",
                status, body
            )));
        }

        let message_response: MessageResponse = response.json().await.map_err(Error::Http)?;

        tracing::debug!(id = %message_response.id, stop_reason = ?message_response.stop_reason, "Received response");

        Ok(message_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ClaudeClient::new("test-key");
        assert_eq!(client.api_key, "test-key");
    }
}
