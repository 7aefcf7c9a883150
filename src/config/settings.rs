//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// DeepSeek provider configuration
    pub deepseek: ProviderSettings,
    /// Kimi (Moonshot) provider configuration
    pub kimi: ProviderSettings,
    /// Ernie (Baidu wenxin) provider configuration
    pub ernie: ProviderSettings,
    /// Doubao provider configuration
    pub doubao: ProviderSettings,
    /// Retry policy configuration
    pub retry: RetrySettings,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Configuration for one provider backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Registry name of the provider
    pub name: String,
    /// API base URL
    pub base_url: String,
    /// Model identifier (for Qianfan providers, the model endpoint path)
    pub model: String,
    /// Authentication configuration
    pub auth: AuthSettings,
}

/// Authentication configuration for a provider
///
/// Credentials are never baked into source. The configured value (set
/// programmatically by the host) is checked first, then the named
/// environment variable; the first present non-empty value wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthSettings {
    /// Single long-lived bearer token
    StaticBearer {
        /// Explicitly configured API key (optional)
        api_key: Option<String>,
        /// Environment variable consulted when no key is configured
        env_var: String,
    },
    /// OAuth client-credentials flow with a reactive token cache
    OauthClientCredentials {
        /// Explicitly configured client id (optional)
        client_id: Option<String>,
        /// Explicitly configured client secret (optional)
        client_secret: Option<String>,
        /// Environment variable for the client id
        id_env_var: String,
        /// Environment variable for the client secret
        secret_env_var: String,
        /// OAuth token endpoint URL
        token_url: String,
    },
}

/// Retry policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Total adapter invocations per call (including the first)
    pub max_attempts: u32,
    /// Base backoff unit in milliseconds
    pub base_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 1000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

/// Default Baidu Qianfan chat base URL
const QIANFAN_CHAT_BASE: &str =
    "https://aip.baidubce.com/rpc/2.0/ai_custom/v1/wenxinworkshop/chat";

/// Default Baidu OAuth token endpoint
const QIANFAN_TOKEN_URL: &str = "https://aip.baidubce.com/oauth/2.0/token";

impl Settings {
    /// Create a new configuration instance from the environment
    ///
    /// Missing credentials are not a load-time error; they surface as a
    /// configuration error when the provider is first called.
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let qianfan_base = get_env_or_default("QIANFAN_API_BASE", QIANFAN_CHAT_BASE);
        let token_url = get_env_or_default("QIANFAN_TOKEN_URL", QIANFAN_TOKEN_URL);

        let settings = Self {
            deepseek: ProviderSettings {
                name: "deepseek".to_string(),
                base_url: get_env_or_default("DEEPSEEK_API_BASE", "https://api.deepseek.com/v1"),
                model: get_env_or_default("DEEPSEEK_MODEL", "deepseek-chat"),
                auth: AuthSettings::StaticBearer {
                    api_key: None,
                    env_var: "DEEPSEEK_API_KEY".to_string(),
                },
            },
            kimi: ProviderSettings {
                name: "kimi".to_string(),
                base_url: get_env_or_default("MOONSHOT_API_BASE", "https://api.moonshot.cn/v1"),
                model: get_env_or_default("MOONSHOT_MODEL", "moonshot-v1-8k"),
                auth: AuthSettings::StaticBearer {
                    api_key: None,
                    env_var: "MOONSHOT_API_KEY".to_string(),
                },
            },
            ernie: ProviderSettings {
                name: "ernie".to_string(),
                base_url: qianfan_base.clone(),
                model: get_env_or_default("ERNIE_MODEL", "completions"),
                auth: AuthSettings::OauthClientCredentials {
                    client_id: None,
                    client_secret: None,
                    id_env_var: "ERNIE_CLIENT_ID".to_string(),
                    secret_env_var: "ERNIE_CLIENT_SECRET".to_string(),
                    token_url: token_url.clone(),
                },
            },
            doubao: ProviderSettings {
                name: "doubao".to_string(),
                base_url: qianfan_base,
                model: get_env_or_default("DOUBAO_MODEL", "completions_pro"),
                auth: AuthSettings::OauthClientCredentials {
                    client_id: None,
                    client_secret: None,
                    id_env_var: "DOUBAO_CLIENT_ID".to_string(),
                    secret_env_var: "DOUBAO_CLIENT_SECRET".to_string(),
                    token_url,
                },
            },
            retry: RetrySettings {
                max_attempts: get_env_or_default("GATEWAY_MAX_RETRIES", "3")
                    .parse()
                    .context("Invalid retry count")?,
                base_delay_ms: get_env_or_default("GATEWAY_RETRY_BASE_DELAY_MS", "1000")
                    .parse()
                    .context("Invalid retry base delay")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                format: get_env_or_default("LOG_FORMAT", "text"),
            },
        };

        // Validate configuration
        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        for provider in [&self.deepseek, &self.kimi, &self.ernie, &self.doubao] {
            if !provider.base_url.starts_with("http") {
                anyhow::bail!(
                    "Invalid base URL for provider {}: should start with 'http'",
                    provider.name
                );
            }

            if provider.model.is_empty() {
                anyhow::bail!("Model identifier for provider {} cannot be empty", provider.name);
            }

            if let AuthSettings::OauthClientCredentials { token_url, .. } = &provider.auth {
                if !token_url.starts_with("http") {
                    anyhow::bail!(
                        "Invalid token URL for provider {}: should start with 'http'",
                        provider.name
                    );
                }
            }
        }

        if self.retry.max_attempts == 0 {
            anyhow::bail!("Retry attempt count cannot be 0");
        }

        // Validate log level. RUST_LOG may also carry env-filter directives
        // like "aigateway=debug,reqwest=warn"; only bare level names are
        // checked, directives pass through to the filter parser untouched.
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        let is_directive = self.logging.level.contains('=') || self.logging.level.contains(',');
        if !is_directive && !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.logging.level);
        }

        // Validate log format
        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// All provider sections in registry order
    pub fn providers(&self) -> [&ProviderSettings; 4] {
        [&self.deepseek, &self.kimi, &self.ernie, &self.doubao]
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
