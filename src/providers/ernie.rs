//! Ernie (Baidu wenxin) provider implementation
//!
//! Qianfan dialect: OAuth client-credentials token in the URL query string,
//! model endpoint folded into the URL path, no Authorization header

use super::qianfan::QianfanChat;
use super::ChatProvider;
use crate::config::ProviderSettings;
use crate::models::chat::{CallOptions, ChatMessage, Completion};
use crate::utils::error::GatewayResult;
use anyhow::Result;
use async_trait::async_trait;

/// Ernie provider
pub struct ErnieProvider {
    inner: QianfanChat,
}

impl ErnieProvider {
    /// Create a new Ernie provider from its configuration
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let inner = QianfanChat::new(
            "ernie",
            settings.base_url.clone(),
            settings.model.clone(),
            settings.auth.clone(),
        )?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl ChatProvider for ErnieProvider {
    fn name(&self) -> &str {
        "ernie"
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
            name: "ernie".to_string(),
            base_url: "https://aip.baidubce.com/rpc/2.0/ai_custom/v1/wenxinworkshop/chat"
                .to_string(),
            model: "completions".to_string(),
            auth: AuthSettings::OauthClientCredentials {
                client_id: Some("id".to_string()),
                client_secret: Some("secret".to_string()),
                id_env_var: "ERNIE_CLIENT_ID".to_string(),
                secret_env_var: "ERNIE_CLIENT_SECRET".to_string(),
                token_url: "https://aip.baidubce.com/oauth/2.0/token".to_string(),
            },
        }
    }

    #[test]
    fn test_provider_creation() {
        let provider = ErnieProvider::new(&test_settings());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_name() {
        let provider = ErnieProvider::new(&test_settings()).unwrap();
        assert_eq!(provider.name(), "ernie");
    }
}
