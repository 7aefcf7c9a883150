//! Error handling module
//!
//! Defines the gateway error taxonomy and classification logic

use reqwest::StatusCode;
use thiserror::Error;

/// Gateway error types
///
/// Every failed call carries exactly one of these kinds. Only `Server` and
/// `Network` are transient; everything else is terminal and never retried.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// Missing or empty credential configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// OAuth token endpoint rejected the client credentials
    #[error("Token acquisition failed: {0}")]
    TokenAcquisition(String),

    /// Credential rejected by the provider (HTTP 401)
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Billing or balance issue (HTTP 402)
    #[error("Payment required: {0}")]
    PaymentRequired(String),

    /// Insufficient permission (HTTP 403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Rate limit hit (HTTP 429); retry later
    #[error("Rate limited, please try again later: {0}")]
    RateLimited(String),

    /// Upstream failure outside the mapped taxonomy, keyed by HTTP status
    #[error("Upstream server error ({status}): {message}")]
    Server {
        /// HTTP status reported by the provider
        status: u16,
        /// Raw diagnostic detail
        message: String,
    },

    /// Connection failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP success but the reply could not be extracted
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    /// Caller requested a provider that is not registered
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

impl GatewayError {
    /// Map a non-success HTTP status to an error kind
    ///
    /// The raw response body is attached as diagnostic detail. Statuses
    /// outside the taxonomy map to `Server` so the original cause is kept.
    pub fn from_status(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            StatusCode::UNAUTHORIZED => GatewayError::Auth(body),
            StatusCode::PAYMENT_REQUIRED => GatewayError::PaymentRequired(body),
            StatusCode::FORBIDDEN => GatewayError::Forbidden(body),
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(body),
            _ => GatewayError::Server {
                status: status.as_u16(),
                message: body,
            },
        }
    }

    /// Whether retrying the same call unchanged can succeed
    ///
    /// Only 5xx server failures and network errors qualify. A `Server`
    /// carrying an unmapped 4xx (or a Qianfan in-band code on HTTP 200)
    /// reflects something wrong with the request itself and is terminal.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Server { status, .. } => *status >= 500,
            GatewayError::Network(_) => true,
            _ => false,
        }
    }

    /// Whether this failure indicates a rejected credential
    pub fn is_auth(&self) -> bool {
        matches!(self, GatewayError::Auth(_))
    }

    /// Get error kind string
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration_error",
            GatewayError::TokenAcquisition(_) => "token_acquisition_error",
            GatewayError::Auth(_) => "authentication_error",
            GatewayError::PaymentRequired(_) => "payment_required_error",
            GatewayError::Forbidden(_) => "permission_error",
            GatewayError::RateLimited(_) => "rate_limit_error",
            GatewayError::Server { .. } => "server_error",
            GatewayError::Network(_) => "network_error",
            GatewayError::MalformedResponse(_) => "malformed_response_error",
            GatewayError::UnknownProvider(_) => "unknown_provider_error",
        }
    }

    /// Get the HTTP status that produced this error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            GatewayError::Auth(_) => Some(401),
            GatewayError::PaymentRequired(_) => Some(402),
            GatewayError::Forbidden(_) => Some(403),
            GatewayError::RateLimited(_) => Some(429),
            GatewayError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create a configuration error with a remediation hint
    pub fn missing_credential(provider: &str, env_var: &str) -> Self {
        GatewayError::Configuration(format!(
            "{} API key not configured, set the {} environment variable",
            provider, env_var
        ))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Network(format!("request timed out: {}", err))
        } else if err.is_connect() {
            GatewayError::Network(format!("connection failed: {}", err))
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            GatewayError::from_status(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::Auth(_)
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::PAYMENT_REQUIRED, "no balance"),
            GatewayError::PaymentRequired(_)
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::FORBIDDEN, "denied"),
            GatewayError::Forbidden(_)
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::Server { status: 500, .. }
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::BAD_GATEWAY, "upstream down"),
            GatewayError::Server { status: 502, .. }
        ));
    }

    #[test]
    fn test_transience() {
        assert!(GatewayError::Server { status: 500, message: "boom".into() }.is_transient());
        assert!(GatewayError::Server { status: 503, message: "overloaded".into() }.is_transient());
        assert!(GatewayError::Network("timeout".into()).is_transient());

        // Unmapped client errors keep the Server kind but are terminal
        assert!(!GatewayError::Server { status: 400, message: "bad request".into() }.is_transient());
        assert!(!GatewayError::Server { status: 404, message: "no route".into() }.is_transient());
        assert!(!GatewayError::Server { status: 200, message: "in-band".into() }.is_transient());
        assert!(!GatewayError::from_status(StatusCode::BAD_REQUEST, "bad request").is_transient());

        assert!(!GatewayError::Auth("bad".into()).is_transient());
        assert!(!GatewayError::RateLimited("slow down".into()).is_transient());
        assert!(!GatewayError::MalformedResponse("empty choices".into()).is_transient());
        assert!(!GatewayError::Configuration("no key".into()).is_transient());
        assert!(!GatewayError::UnknownProvider("nope".into()).is_transient());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(GatewayError::Auth("x".into()).kind(), "authentication_error");
        assert_eq!(GatewayError::RateLimited("x".into()).kind(), "rate_limit_error");
        assert_eq!(
            GatewayError::Server { status: 500, message: "x".into() }.kind(),
            "server_error"
        );
        assert_eq!(GatewayError::UnknownProvider("x".into()).kind(), "unknown_provider_error");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(GatewayError::Auth("x".into()).http_status(), Some(401));
        assert_eq!(
            GatewayError::Server { status: 502, message: "x".into() }.http_status(),
            Some(502)
        );
        assert_eq!(GatewayError::Network("x".into()).http_status(), None);
        assert_eq!(GatewayError::Configuration("x".into()).http_status(), None);
    }

    #[test]
    fn test_missing_credential_hint() {
        let err = GatewayError::missing_credential("DeepSeek", "DEEPSEEK_API_KEY");
        assert!(err.to_string().contains("DEEPSEEK_API_KEY"));
        assert_eq!(err.kind(), "configuration_error");
    }
}
