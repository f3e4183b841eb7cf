// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// Decode a request body. Anything that is not a JSON object with a string
    /// `message` decodes to an empty request.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<ChatRequest>(body) {
            Ok(req) => req,
            Err(err) => {
                tracing::debug!(error = %err, "unreadable chat body, treating message as empty");
                Self::default()
            }
        }
    }

    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
