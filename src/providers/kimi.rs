//! Kimi (Moonshot) provider implementation
//!
//! OpenAI-compatible chat completions against the Moonshot API

use super::openai_compat::OpenAiCompatChat;
use super::ChatProvider;
use crate::config::ProviderSettings;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::utils::error::GatewayResult;
use anyhow::Result;
use async_trait::async_trait;

/// Kimi provider
pub struct KimiProvider {
    inner: OpenAiCompatChat,
}

impl KimiProvider {
    /// Create a new Kimi provider from its configuration
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let inner = OpenAiCompatChat::new(
            "kimi",
            settings.base_url.clone(),
            settings.model.clone(),
            settings.auth.clone(),
        )?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatProvider for KimiProvider {
    fn name(&self) -> &str {
        "kimi"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        self.inner.complete(messages, options).await
    }
}
