//! Baidu Qianfan chat engine
//!
//! Shared flow for backends on the wenxinworkshop platform (Ernie, Doubao).
//! The access token rides in the URL query string, the model endpoint is
//! folded into the URL path, and no Authorization header is sent. Failures
//! can arrive in-band as HTTP 200 plus an `error_code` field.

use super::USER_AGENT;
use crate::credentials::CredentialManager;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::models::wire::{QianfanRequest, QianfanResponse};
use crate::utils::error::{GatewayError, GatewayResult};
use crate::utils::logging::conversation_log_summary;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, error, warn};

/// Engine for one Qianfan-hosted backend
pub(crate) struct QianfanChat {
    name: &'static str,
    base_url: String,
    model: String,
    credentials: CredentialManager,
    client: Client,
}

impl QianfanChat {
    /// Create an engine for the named backend
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

    /// Build the completion endpoint URL with the model path and token query
    fn build_url(&self, token: &str) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/{}?access_token={}", base_url, self.model, token)
    }

    /// Send a chat completion request
    ///
    /// On an auth failure the cached token is cleared and exactly one
    /// re-acquisition plus one retry happens before the error propagates.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        let mut refreshed = false;

        loop {
            let token = self.credentials.bearer().await?;

            match self.attempt(&token, messages, options).await {
                Err(err) if err.is_auth() && !refreshed => {
                    warn!(
                        provider = self.name,
                        "Access token rejected, forcing one re-acquisition"
                    );
                    self.credentials.invalidate().await;
                    refreshed = true;
                }
                result => return result,
            }
        }
    }

    /// One HTTP attempt with a given token
    async fn attempt(
        &self,
        token: &str,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        debug!(
            provider = self.name,
            conversation = %conversation_log_summary(messages),
            "Sending Qianfan chat request"
        );

        let request = QianfanRequest {
            messages,
            temperature: options.temperature,
            max_output_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(self.build_url(token))
            .header("Content-Type", "application/json")
            .timeout(options.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(provider = self.name, status = %status, "Qianfan request failed: {}", body);
            return Err(GatewayError::from_status(status, body));
        }

        let parsed: QianfanResponse = response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!(
                "{}: failed to parse completion body: {}",
                self.name, e
            ))
        })?;

        if let Some(code) = parsed.error_code {
            let message = parsed.error_msg.unwrap_or_default();
            error!(provider = self.name, code, "Qianfan in-band error: {}", message);
            return Err(map_qianfan_error(code, &message));
        }

        let tokens_used = parsed.usage.map(|u| u.total_tokens).unwrap_or(0);

        match parsed.result {
            Some(content) if !content.is_empty() => {
                debug!(provider = self.name, tokens_used, "Qianfan chat request succeeded");
                Ok(Completion { content, tokens_used })
            }
            _ => Err(GatewayError::MalformedResponse(format!(
                "{}: response carried no reply text",
                self.name
            ))),
        }
    }
}

/// Map a Qianfan in-band error code to the gateway taxonomy
///
/// 110/111 are invalid/expired token, 4 and 17-19 are quota and QPS limits.
/// Anything else keeps the raw code and message as a server-side failure;
/// the HTTP status stays 200, so these are never retried.
fn map_qianfan_error(code: i64, message: &str) -> GatewayError {
    match code {
        110 | 111 => GatewayError::Auth(format!("access token rejected ({}): {}", code, message)),
        4 | 17 | 18 | 19 => {
            GatewayError::RateLimited(format!("quota exceeded ({}): {}", code, message))
        }
        _ => GatewayError::Server {
            status: 200,
            message: format!("qianfan error {}: {}", code, message),
        },
    }
}
