//! Gateway facade
//!
//! Single entry point for the rest of the application: selects a provider
//! adapter by name, runs it through the retry executor and records the
//! outcome in the usage meter

use crate::config::Settings;
use crate::models::chat::{CallOptions, ChatMessage, Completion, UsageStats};
use crate::providers::{ChatProvider, DeepSeekProvider, DoubaoProvider, ErnieProvider, KimiProvider};
use crate::services::executor::{RetryConfig, RetryExecutor};
use crate::services::usage::UsageMeter;
use crate::utils::error::{GatewayError, GatewayResult};
use anyhow::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Multi-provider chat completion gateway
///
/// Holds one long-lived adapter per registered provider plus the shared
/// usage meter. Construct once per process and reuse for all requests;
/// concurrent calls are independent.
pub struct Gateway {
    providers: HashMap<String, Arc<dyn ChatProvider>>,
    executor: RetryExecutor,
    usage: UsageMeter,
}

impl Gateway {
    /// Build a gateway with all supported providers from configuration
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut providers: HashMap<String, Arc<dyn ChatProvider>> = HashMap::new();

        providers.insert(
            settings.deepseek.name.clone(),
            Arc::new(DeepSeekProvider::new(&settings.deepseek)?),
        );
        providers.insert(
            settings.kimi.name.clone(),
            Arc::new(KimiProvider::new(&settings.kimi)?),
        );
        providers.insert(
            settings.ernie.name.clone(),
            Arc::new(ErnieProvider::new(&settings.ernie)?),
        );
        providers.insert(
            settings.doubao.name.clone(),
            Arc::new(DoubaoProvider::new(&settings.doubao)?),
        );

        info!("Gateway initialized with {} providers", providers.len());

        Ok(Self {
            providers,
            executor: RetryExecutor::new(RetryConfig::from(&settings.retry)),
            usage: UsageMeter::new(),
        })
    }

    /// Build a gateway from an explicit provider registry
    ///
    /// Used by hosts wiring custom adapters and by tests
    pub fn with_providers(
        providers: HashMap<String, Arc<dyn ChatProvider>>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            providers,
            executor: RetryExecutor::new(retry),
            usage: UsageMeter::new(),
        }
    }

    /// Send a conversation to the named provider and return its reply
    ///
    /// Every terminal outcome, including a failed provider lookup, is
    /// recorded in the usage meter before being returned verbatim.
    pub async fn complete(
        &self,
        provider_name: &str,
        messages: &[ChatMessage],
        options: &CallOptions,
    ) -> GatewayResult<Completion> {
        let provider = match self.providers.get(provider_name) {
            Some(provider) => provider,
            None => {
                self.usage.record_failure();
                return Err(GatewayError::UnknownProvider(provider_name.to_string()));
            }
        };

        debug!(provider = provider_name, "Dispatching chat completion");

        let result = self.executor.execute(provider.as_ref(), messages, options).await;

        match &result {
            Ok(completion) => self.usage.record_success(completion.tokens_used),
            Err(_) => self.usage.record_failure(),
        }

        result
    }

    /// Check connectivity to the named provider with a minimal request
    pub async fn probe(&self, provider_name: &str) -> GatewayResult<()> {
        let options = CallOptions {
            max_tokens: 10,
            ..Default::default()
        };

        self.complete(provider_name, &[ChatMessage::user("test")], &options)
            .await
            .map(|_| ())
    }

    /// Get a snapshot of accumulated usage
    pub fn usage(&self) -> UsageStats {
        self.usage.snapshot()
    }

    /// Zero the usage counters
    pub fn reset_usage(&self) {
        self.usage.reset();
    }

    /// Names of all registered providers
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}
