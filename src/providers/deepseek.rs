//! DeepSeek provider implementation
//!
//! OpenAI-compatible chat completions with Bearer token authentication

use super::openai_compat::OpenAiCompatChat;
use super::ChatProvider;
use crate::config::ProviderSettings;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::utils::error::GatewayResult;
use anyhow::Result;
use async_trait::async_trait;

/// DeepSeek provider
pub struct DeepSeekProvider {
    inner: OpenAiCompatChat,
}

impl DeepSeekProvider {
    /// Create a new DeepSeek provider from its configuration
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let inner = OpenAiCompatChat::new(
            "deepseek",
            settings.base_url.clone(),
            settings.model.clone(),
            settings.auth.clone(),
        )?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        self.inner.complete(messages, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthSettings;

    fn test_settings() -> ProviderSettings {
        ProviderSettings {
            name: "deepseek".to_string(),
            base_url: "https://api.deepseek.com/v1".to_string(),
            model: "deepseek-chat".to_string(),
            auth: AuthSettings::StaticBearer {
                api_key: Some("sk-test".to_string()),
                env_var: "DEEPSEEK_API_KEY".to_string(),
            },
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = DeepSeekProvider::new(&test_settings());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_name() {
        let provider = DeepSeekProvider::new(&test_settings()).unwrap();
        assert_eq!(provider.name(), "deepseek");
    }
}
