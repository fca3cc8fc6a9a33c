use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

use super::types::{
    extract_json, response_output_text, ChatRequest, ChatResponse, Message, ResponsesRequest,
    Tool,
};
use crate::backend::{ModelBackend, ResearchResult};
use crate::config::{OpenAiConfig, RequestConfig};
use crate::error::{BackendError, BackendResult};
use crate::roles::{RoleConfig, RoleOutput};

/// Client for the OpenAI chat completions and responses APIs
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(config: &OpenAiConfig, request_config: RequestConfig) -> BackendResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(request_config.connect_timeout_ms))
            .build()
            .map_err(BackendError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Get the base URL (for testing)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `/v1/chat/completions`
    pub async fn chat_completion(&self, request: &ChatRequest) -> BackendResult<ChatResponse> {
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Calling chat completions"
        );

        let payload = self.post_json("/v1/chat/completions", request).await?;

        serde_json::from_value(payload).map_err(|e| BackendError::InvalidResponse {
            message: format!("Failed to parse chat completion: {}", e),
        })
    }

    /// Call `/v1/responses` and return the raw payload
    pub async fn create_response(
        &self,
        request: &ResponsesRequest,
    ) -> BackendResult<serde_json::Value> {
        debug!(
            model = %request.model,
            tools = request.tools.len(),
            "Calling responses"
        );

        self.post_json("/v1/responses", request).await
    }

    /// POST a JSON body and decode a JSON reply (internal)
    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> BackendResult<serde_json::Value> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(BackendError::Http)?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: error_body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse {
                message: format!("Failed to parse response: {}", e),
            })
    }
}

#[async_trait]
impl ModelBackend for OpenAiClient {
    async fn run_structured(
        &self,
        role: &RoleConfig,
        input: &str,
    ) -> BackendResult<serde_json::Value> {
        let RoleOutput::Json { name, schema } = &role.output else {
            return Err(BackendError::InvalidResponse {
                message: format!("role '{}' does not declare a JSON shape", role.role),
            });
        };

        let request = ChatRequest::new(
            &role.model,
            vec![Message::system(role.prompt), Message::user(input)],
        )
        .with_json_schema(*name, schema.clone());

        let start = Instant::now();
        let response = match self.chat_completion(&request).await {
            Ok(r) => r,
            Err(e) => {
                error!(
                    role = %role.role,
                    model = %role.model,
                    error = %e,
                    latency_ms = start.elapsed().as_millis(),
                    "Structured call failed"
                );
                return Err(e);
            }
        };

        info!(
            role = %role.role,
            model = %role.model,
            latency_ms = start.elapsed().as_millis(),
            total_tokens = response.usage.as_ref().and_then(|u| u.total_tokens),
            "Structured call succeeded"
        );

        let content = response
            .first_content()
            .map_err(|message| BackendError::InvalidResponse { message })?;
        let json = extract_json(content).map_err(|message| BackendError::InvalidResponse { message })?;

        serde_json::from_str(json).map_err(|e| BackendError::InvalidResponse {
            message: format!("Failed to parse {} output: {}", name, e),
        })
    }

    async fn run_research(&self, role: &RoleConfig, input: &str) -> BackendResult<ResearchResult> {
        let mut request =
            ResponsesRequest::new(&role.model, input).with_instructions(role.prompt);
        if let RoleOutput::Report { web_search: true } = role.output {
            request = request.with_tool(Tool::WebSearchPreview);
        }

        let start = Instant::now();
        let payload = match self.create_response(&request).await {
            Ok(p) => p,
            Err(e) => {
                error!(
                    role = %role.role,
                    model = %role.model,
                    error = %e,
                    latency_ms = start.elapsed().as_millis(),
                    "Research call failed"
                );
                return Err(e);
            }
        };

        info!(
            role = %role.role,
            model = %role.model,
            latency_ms = start.elapsed().as_millis(),
            "Research call succeeded"
        );

        let body = response_output_text(&payload).ok_or_else(|| BackendError::InvalidResponse {
            message: "research response contained no output text".to_string(),
        })?;

        Ok(ResearchResult::new(body, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = OpenAiConfig {
            api_key: "test_key".to_string(),
            base_url: "https://api.openai.com/".to_string(),
        };

        let client = OpenAiClient::new(&config, RequestConfig::default());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.openai.com");
    }

    #[test]
    fn test_client_is_backend() {
        fn assert_backend<T: ModelBackend + Clone + 'static>() {}
        assert_backend::<OpenAiClient>();
    }
}
