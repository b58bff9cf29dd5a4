//! Chat transport abstraction
//!
//! Information Hiding:
//! - Wire protocol details hidden behind trait
//! - Allows swapping the hosted client for a test stub without API changes

use crate::error::AgentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Narrow interface between the agent and whatever serves the completion.
///
/// Each `send` is one independent exchange; implementations hold no
/// conversation state between calls.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one batch of messages and return the reply text.
    async fn send(&self, messages: &[ChatMessage]) -> Result<String, AgentError>;
}
