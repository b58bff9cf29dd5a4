use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

const DEFAULT_API_VERSION: &str = "2024-02-15-preview";
const DEFAULT_AGENT_NAME: &str = "SK-Assistant";
const DEFAULT_INSTRUCTIONS: &str = "You are a helpful assistant.";

/// Immutable configuration for one agent instance.
///
/// `endpoint`, `api_key` and `deployment_name` are required; the remaining
/// fields carry defaults. Presence is checked by the agent constructor, not
/// here, so a partially populated environment still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment_name: String,
    pub api_version: String,
    pub agent_name: String,
    pub instructions: String,
}

impl AgentConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment_name: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            deployment_name: deployment_name.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            agent_name: DEFAULT_AGENT_NAME.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }

    /// Load configuration from `AZURE_OPENAI_*` environment variables.
    ///
    /// Reads `AZURE_OPENAI_ENDPOINT`, `AZURE_OPENAI_API_KEY`,
    /// `AZURE_OPENAI_DEPLOYMENT_NAME` and `AZURE_OPENAI_API_VERSION`
    /// (defaulted when unset).
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("endpoint", "")?
            .set_default("api_key", "")?
            .set_default("deployment_name", "")?
            .set_default("api_version", DEFAULT_API_VERSION)?
            .set_default("agent_name", DEFAULT_AGENT_NAME)?
            .set_default("instructions", DEFAULT_INSTRUCTIONS)?
            .add_source(Environment::with_prefix("AZURE_OPENAI"))
            .build()?;

        config.try_deserialize()
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = agent_name.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}
