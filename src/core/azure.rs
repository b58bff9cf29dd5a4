use crate::core::transport::{ChatMessage, ChatTransport};
use crate::error::AgentError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completion client for a single Azure OpenAI deployment.
///
/// Authenticates with the `api-key` header and addresses the deployment
/// through the `/openai/deployments/{name}/chat/completions` route.
pub struct AzureChatCompletion {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment_name: String,
    api_version: String,
}

impl AzureChatCompletion {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        deployment_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, AgentError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AgentError::Initialization(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            deployment_name: deployment_name.into(),
            api_version: api_version.into(),
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        )
    }
}

#[async_trait]
impl ChatTransport for AzureChatCompletion {
    async fn send(&self, messages: &[ChatMessage]) -> Result<String, AgentError> {
        let request = ChatRequest { messages };

        tracing::debug!(
            deployment = %self.deployment_name,
            api_version = %self.api_version,
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AgentError::dispatch(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("API returned error status {}: {}", status, error_text);
            return Err(AgentError::dispatch(format!(
                "API error {}: {}",
                status, error_text
            )));
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| AgentError::dispatch(format!("response decode error: {}", e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AgentError::dispatch("completion contained no content"))
    }
}
