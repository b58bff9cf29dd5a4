//! Request/response facade over a chat-completion transport.

use crate::config::AgentConfig;
use crate::core::azure::AzureChatCompletion;
use crate::core::transport::{ChatMessage, ChatTransport};
use crate::error::AgentError;
use std::sync::Arc;

/// Handle to the constructed transport and agent identity.
///
/// Created once during initialization and never mutated afterwards.
pub struct AgentHandle {
    transport: Arc<dyn ChatTransport>,
    name: String,
    instructions: String,
}

/// Single-turn chat agent bound to one hosted deployment.
///
/// Lifecycle is one-way: `Uninitialized -> Initialized` on the first
/// successful [`initialize`](ChatAgent::initialize). Every
/// [`get_response`](ChatAgent::get_response) call is an independent
/// exchange; no conversation history is carried between calls.
pub struct ChatAgent {
    config: AgentConfig,
    handle: Option<AgentHandle>,
}

impl ChatAgent {
    /// Store the configuration. Performs no network I/O.
    ///
    /// Fails with [`AgentError::Configuration`] when a required field is
    /// empty; format and credential validity are left to the remote service.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        for (field, value) in [
            ("endpoint", &config.endpoint),
            ("api_key", &config.api_key),
            ("deployment_name", &config.deployment_name),
            ("api_version", &config.api_version),
        ] {
            if value.trim().is_empty() {
                return Err(AgentError::Configuration(format!(
                    "required field `{}` is missing or empty",
                    field
                )));
            }
        }

        Ok(Self {
            config,
            handle: None,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.is_some()
    }

    /// Build the transport and agent handle. Idempotent: a second call is a
    /// no-op and never replaces an existing handle.
    pub fn initialize(&mut self) -> Result<(), AgentError> {
        if self.handle.is_some() {
            return Ok(());
        }

        let transport = AzureChatCompletion::new(
            &self.config.endpoint,
            &self.config.api_key,
            &self.config.deployment_name,
            &self.config.api_version,
        )?;

        self.bind(Arc::new(transport));
        Ok(())
    }

    /// Bind an alternative transport instead of the hosted client.
    ///
    /// Like [`initialize`](ChatAgent::initialize) this is a no-op once a
    /// handle exists.
    pub fn initialize_with(&mut self, transport: Arc<dyn ChatTransport>) {
        if self.handle.is_none() {
            self.bind(transport);
        }
    }

    fn bind(&mut self, transport: Arc<dyn ChatTransport>) {
        self.handle = Some(AgentHandle {
            transport,
            name: self.config.agent_name.clone(),
            instructions: self.config.instructions.clone(),
        });
    }

    /// Send one message as a fresh exchange and return the reply text.
    ///
    /// Requires a completed [`initialize`](ChatAgent::initialize). A failed
    /// dispatch leaves the agent initialized; a later call may still succeed.
    pub async fn get_response(&self, message: &str) -> Result<String, AgentError> {
        let handle = self.handle.as_ref().ok_or_else(|| {
            AgentError::Initialization("agent is not initialized".to_string())
        })?;

        let messages = [
            ChatMessage::system(&handle.instructions),
            ChatMessage::user(message),
        ];

        tracing::debug!(agent = %handle.name, "dispatching message");

        let content = handle.transport.send(&messages).await?;
        if content.is_empty() {
            return Err(AgentError::dispatch("completion contained no content"));
        }

        Ok(content)
    }
}
