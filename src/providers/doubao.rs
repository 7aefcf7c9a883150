//! Doubao provider implementation
//!
//! Second Qianfan-hosted backend with its own model endpoint and client
//! credentials

use super::qianfan::QianfanChat;
use super::ChatProvider;
use crate::config::ProviderSettings;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::utils::error::GatewayResult;
use anyhow::Result;
use async_trait::async_trait;

/// Doubao provider
pub struct DoubaoProvider {
    inner: QianfanChat,
}

impl DoubaoProvider {
    /// Create a new Doubao provider from its configuration
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let inner = QianfanChat::new(
            "doubao",
            settings.base_url.clone(),
            settings.model.clone(),
            settings.auth.clone(),
        )?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatProvider for DoubaoProvider {
    fn name(&self) -> &str {
        "doubao"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        self.inner.complete(messages, options).await
    }
}
