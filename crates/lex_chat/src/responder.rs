//! Remote responder client.
//!
//! The responder is the backend service that produces a reply for a user
//! message. The wire contract is a single POST carrying `{"message": text}`
//! and returning `{"response": text}`. Any transport failure or non-success
//! status is treated uniformly as failure; there is no status-specific
//! handling and no automatic retry - the controller substitutes a fallback
//! reply instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{ChatError, ChatResult};

/// Anything that can produce a reply for a user message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produce a reply for the given message text
    async fn reply(&self, message: &str) -> ChatResult<String>;
}

/// HTTP client for the remote responder endpoint.
pub struct HttpResponder {
    endpoint: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl HttpResponder {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Attach a credential token, sent as a bearer header
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// The configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Responder for HttpResponder {
    async fn reply(&self, message: &str) -> ChatResult<String> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ChatError::Responder(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Responder(format!(
                "Responder returned status {}",
                status
            )));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::Responder(format!("Failed to parse response: {}", e)))?;

        Ok(reply.response)
    }
}

// Wire types for the responder endpoint
#[derive(Debug, Serialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_responder_configuration() {
        let responder = HttpResponder::new("http://localhost:8080/api/chat");
        assert_eq!(responder.endpoint(), "http://localhost:8080/api/chat");
        assert!(responder.token.is_none());

        let responder = responder.with_token("opaque-token");
        assert_eq!(responder.token.as_deref(), Some("opaque-token"));
    }

    #[test]
    fn test_request_wire_format() {
        let request = ChatRequest {
            message: "What is GDPR?".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"message":"What is GDPR?"}"#);

        let reply: ChatReply = serde_json::from_str(r#"{"response":"GDPR is..."}"#).unwrap();
        assert_eq!(reply.response, "GDPR is...");
    }

    #[test]
    fn test_mock_responder() {
        let mut mock = MockResponder::new();
        mock.expect_reply()
            .returning(|_| Ok("Hello from the mock".to_string()));

        let reply = tokio_test::block_on(mock.reply("hi")).unwrap();
        assert_eq!(reply, "Hello from the mock");
    }
}
