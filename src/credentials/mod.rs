//! Credential management module
//!
//! Resolves a ready-to-use authorization artifact for each provider just
//! before a call: a static bearer token read from configuration or the
//! environment, or an OAuth client-credentials access token cached until a
//! call reports it invalid.

use crate::config::AuthSettings;
use crate::models::wire::OAuthTokenResponse;
use crate::utils::error::{GatewayError, GatewayResult};
use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// A cached OAuth access token
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    obtained_at: DateTime<Utc>,
}

/// Per-provider credential manager
///
/// Holds the provider's immutable auth configuration plus the mutable OAuth
/// token cache. The cache mutex also guards the refresh path, so concurrent
/// cache misses coalesce into a single token request.
pub struct CredentialManager {
    provider: String,
    auth: AuthSettings,
    http: Client,
    cache: Mutex<Option<CachedToken>>,
}

impl CredentialManager {
    /// Create a manager for one provider
    pub fn new(provider: impl Into<String>, auth: AuthSettings, http: Client) -> Self {
        Self {
            provider: provider.into(),
            auth,
            http,
            cache: Mutex::new(None),
        }
    }

    /// Whether this provider uses the OAuth client-credentials flow
    pub fn is_oauth(&self) -> bool {
        matches!(self.auth, AuthSettings::OauthClientCredentials { .. })
    }

    /// Produce a valid bearer token for the next call
    ///
    /// Static tokens are resolved from configuration first, then the
    /// environment. OAuth tokens are served from the cache, acquiring one
    /// synchronously on a miss.
    pub async fn bearer(&self) -> GatewayResult<String> {
        match &self.auth {
            AuthSettings::StaticBearer { api_key, env_var } => {
                resolve_value(&self.provider, api_key.as_deref(), env_var)
            }
            AuthSettings::OauthClientCredentials {
                client_id,
                client_secret,
                id_env_var,
                secret_env_var,
                token_url,
            } => {
                let mut cache = self.cache.lock().await;
                if let Some(token) = cache.as_ref() {
                    debug!("Using cached access token for {}", self.provider);
                    return Ok(token.access_token.clone());
                }

                let id = resolve_value(&self.provider, client_id.as_deref(), id_env_var)?;
                let secret =
                    resolve_value(&self.provider, client_secret.as_deref(), secret_env_var)?;

                let access_token = self.acquire(token_url, &id, &secret).await?;
                *cache = Some(CachedToken {
                    access_token: access_token.clone(),
                    obtained_at: Utc::now(),
                });

                Ok(access_token)
            }
        }
    }

    /// Drop the cached token so the next call re-acquires one
    ///
    /// Called reactively when an API call reports the token invalid. No
    /// proactive expiry timer exists.
    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        if let Some(token) = cache.take() {
            warn!(
                "Invalidated access token for {} (obtained at {})",
                self.provider, token.obtained_at
            );
        }
    }

    /// Request a fresh access token from the provider's token endpoint
    async fn acquire(&self, token_url: &str, id: &str, secret: &str) -> GatewayResult<String> {
        debug!("Requesting access token for {}", self.provider);

        let response = self
            .http
            .post(token_url)
            .query(&[
                ("grant_type", "client_credentials"),
                ("client_id", id),
                ("client_secret", secret),
            ])
            .send()
            .await
            .map_err(|e| {
                GatewayError::TokenAcquisition(format!(
                    "token endpoint unreachable for {}: {}",
                    self.provider, e
                ))
            })?;

        let token_response: OAuthTokenResponse = response.json().await.map_err(|e| {
            GatewayError::TokenAcquisition(format!(
                "invalid token endpoint response for {}: {}",
                self.provider, e
            ))
        })?;

        match token_response.access_token {
            Some(token) if !token.is_empty() => {
                info!("Acquired access token for {}", self.provider);
                Ok(token)
            }
            _ => {
                let detail = token_response
                    .error_description
                    .or(token_response.error)
                    .unwrap_or_else(|| "unknown error".to_string());
                Err(GatewayError::TokenAcquisition(format!(
                    "{}: {}",
                    self.provider, detail
                )))
            }
        }
    }
}

/// Resolve a credential value: configured value first, then environment
fn resolve_value(provider: &str, configured: Option<&str>, env_var: &str) -> GatewayResult<String> {
    if let Some(value) = configured {
        if !value.is_empty() {
            return Ok(value.to_string());
        }
    }

    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(GatewayError::missing_credential(provider, env_var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_value_prefers_config() {
        std::env::set_var("CRED_TEST_PRECEDENCE", "from-env");
        let value = resolve_value("test", Some("from-config"), "CRED_TEST_PRECEDENCE").unwrap();
        assert_eq!(value, "from-config");
        std::env::remove_var("CRED_TEST_PRECEDENCE");
    }

    #[test]
    fn test_resolve_value_falls_back_to_env() {
        std::env::set_var("CRED_TEST_FALLBACK", "from-env");
        let value = resolve_value("test", None, "CRED_TEST_FALLBACK").unwrap();
        assert_eq!(value, "from-env");

        // Empty configured value also falls through
        let value = resolve_value("test", Some(""), "CRED_TEST_FALLBACK").unwrap();
        assert_eq!(value, "from-env");
        std::env::remove_var("CRED_TEST_FALLBACK");
    }

    #[test]
    fn test_resolve_value_missing() {
        let err = resolve_value("deepseek", None, "CRED_TEST_MISSING_VAR").unwrap_err();
        assert_eq!(err.kind(), "configuration_error");
        assert!(err.to_string().contains("CRED_TEST_MISSING_VAR"));
    }

    #[tokio::test]
    async fn test_static_bearer_from_config() {
        let manager = CredentialManager::new(
            "deepseek",
            AuthSettings::StaticBearer {
                api_key: Some("sk-configured".to_string()),
                env_var: "CRED_TEST_UNSET".to_string(),
            },
            Client::new(),
        );

        assert!(!manager.is_oauth());
        assert_eq!(manager.bearer().await.unwrap(), "sk-configured");
    }

    #[tokio::test]
    async fn test_static_bearer_missing_is_configuration_error() {
        let manager = CredentialManager::new(
            "deepseek",
            AuthSettings::StaticBearer {
                api_key: None,
                env_var: "CRED_TEST_NEVER_SET".to_string(),
            },
            Client::new(),
        );

        let err = manager.bearer().await.unwrap_err();
        assert_eq!(err.kind(), "configuration_error");
    }

    #[tokio::test]
    async fn test_invalidate_without_cache_is_noop() {
        let manager = CredentialManager::new(
            "ernie",
            AuthSettings::OauthClientCredentials {
                client_id: Some("id".to_string()),
                client_secret: Some("secret".to_string()),
                id_env_var: "X_ID".to_string(),
                secret_env_var: "X_SECRET".to_string(),
                token_url: "http://127.0.0.1:1/oauth/2.0/token".to_string(),
            },
            Client::new(),
        );

        assert!(manager.is_oauth());
        manager.invalidate().await;
        manager.invalidate().await;
    }
}
