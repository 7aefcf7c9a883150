//! OpenAI-compatible chat completions engine
//!
//! Shared request/response flow for backends speaking the OpenAI chat
//! completions dialect with `Authorization: Bearer` auth (DeepSeek, Kimi).

use super::USER_AGENT;
use crate::credentials::CredentialManager;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::models::wire::{ChatCompletionErrorResponse, ChatCompletionRequest, ChatCompletionResponse};
use crate::utils::error::{GatewayError, GatewayResult};
use crate::utils::logging::conversation_log_summary;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, error};

/// Engine for one OpenAI-compatible backend
pub(crate) struct OpenAiCompatChat {
    name: &'static str,
    base_url: String,
    model: String,
    credentials: CredentialManager,
    client: Client,
}

impl OpenAiCompatChat {
    /// Create an engine for the named backend
    ///
    /// The client carries no default timeout; each request applies the
    /// per-call timeout from `CallOptions`.
    pub fn new(
        name: &'static str,
        base_url: String,
        model: String,
        credentials_auth: crate::config::AuthSettings,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        let credentials = CredentialManager::new(name, credentials_auth, client.clone());

        Ok(Self {
            name,
            base_url,
            model,
            credentials,
            client,
        })
    }

    /// Build the completion endpoint URL
    fn build_url(&self) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/chat/completions", base_url)
    }

    /// Send one chat completion request and normalize the outcome
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        let token = self.credentials.bearer().await?;

        debug!(
            provider = self.name,
            conversation = %conversation_log_summary(messages),
            "Sending chat completion request"
        );

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(self.build_url())
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .timeout(options.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
                GatewayError::MalformedResponse(format!(
                    "{}: failed to parse completion body: {}",
                    self.name, e
                ))
            })?;

            let tokens_used = parsed.usage.map(|u| u.total_tokens).unwrap_or(0);

            let content = parsed
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| {
                    GatewayError::MalformedResponse(format!(
                        "{}: response carried no assistant reply",
                        self.name
                    ))
                })?;

            debug!(provider = self.name, tokens_used, "Chat completion succeeded");
            Ok(Completion { content, tokens_used })
        } else {
            let body = response.text().await.unwrap_or_default();

            // Prefer the structured error message when the body parses
            let detail = serde_json::from_str::<ChatCompletionErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);

            error!(provider = self.name, status = %status, "Chat completion failed: {}", detail);
            Err(GatewayError::from_status(status, detail))
        }
    }
}
