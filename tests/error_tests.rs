//! Error taxonomy unit tests

use aigateway::utils::error::*;
use reqwest::StatusCode;

#[test]
fn test_error_kinds() {
    let test_cases = vec![
        (GatewayError::Configuration("test".to_string()), "configuration_error"),
        (GatewayError::TokenAcquisition("test".to_string()), "token_acquisition_error"),
        (GatewayError::Auth("test".to_string()), "authentication_error"),
        (GatewayError::PaymentRequired("test".to_string()), "payment_required_error"),
        (GatewayError::Forbidden("test".to_string()), "permission_error"),
        (GatewayError::RateLimited("test".to_string()), "rate_limit_error"),
        (
            GatewayError::Server {
                status: 500,
                message: "test".to_string(),
            },
            "server_error",
        ),
        (GatewayError::Network("test".to_string()), "network_error"),
        (GatewayError::MalformedResponse("test".to_string()), "malformed_response_error"),
        (GatewayError::UnknownProvider("test".to_string()), "unknown_provider_error"),
    ];

    for (error, expected_kind) in test_cases {
        assert_eq!(error.kind(), expected_kind);
    }
}

#[test]
fn test_only_5xx_and_network_errors_are_transient() {
    let transient = vec![
        GatewayError::Server {
            status: 500,
            message: "overloaded".to_string(),
        },
        GatewayError::Server {
            status: 503,
            message: "unavailable".to_string(),
        },
        GatewayError::Network("connection reset".to_string()),
    ];
    for error in transient {
        assert!(error.is_transient(), "{} should be transient", error.kind());
    }

    let terminal = vec![
        // Unmapped statuses below 500 keep the Server kind but never retry
        GatewayError::Server {
            status: 400,
            message: "bad request".to_string(),
        },
        GatewayError::Server {
            status: 404,
            message: "no such route".to_string(),
        },
        GatewayError::Server {
            status: 200,
            message: "qianfan in-band error".to_string(),
        },
        GatewayError::Configuration("test".to_string()),
        GatewayError::TokenAcquisition("test".to_string()),
        GatewayError::Auth("test".to_string()),
        GatewayError::PaymentRequired("test".to_string()),
        GatewayError::Forbidden("test".to_string()),
        GatewayError::RateLimited("test".to_string()),
        GatewayError::MalformedResponse("test".to_string()),
        GatewayError::UnknownProvider("test".to_string()),
    ];
    for error in terminal {
        assert!(!error.is_transient(), "{} should be terminal", error.kind());
    }
}

#[test]
fn test_from_status_maps_the_documented_codes() {
    let test_cases = vec![
        (StatusCode::UNAUTHORIZED, "authentication_error"),
        (StatusCode::PAYMENT_REQUIRED, "payment_required_error"),
        (StatusCode::FORBIDDEN, "permission_error"),
        (StatusCode::TOO_MANY_REQUESTS, "rate_limit_error"),
        (StatusCode::INTERNAL_SERVER_ERROR, "server_error"),
        (StatusCode::BAD_GATEWAY, "server_error"),
        (StatusCode::SERVICE_UNAVAILABLE, "server_error"),
        // Unmapped client errors fall back to the server bucket
        (StatusCode::BAD_REQUEST, "server_error"),
        (StatusCode::NOT_FOUND, "server_error"),
    ];

    for (status, expected_kind) in test_cases {
        let error = GatewayError::from_status(status, "upstream detail".to_string());
        assert_eq!(error.kind(), expected_kind, "wrong kind for {}", status);
        assert!(error.to_string().contains("upstream detail"));

        // Transience follows the status, not the fallback kind
        assert_eq!(error.is_transient(), status.is_server_error());
    }
}

#[test]
fn test_http_status_is_preserved() {
    assert_eq!(
        GatewayError::from_status(StatusCode::UNAUTHORIZED, "x".to_string()).http_status(),
        Some(401)
    );
    assert_eq!(
        GatewayError::from_status(StatusCode::BAD_GATEWAY, "x".to_string()).http_status(),
        Some(502)
    );
    assert_eq!(GatewayError::Network("x".to_string()).http_status(), None);
    assert_eq!(GatewayError::Configuration("x".to_string()).http_status(), None);
}

#[test]
fn test_auth_detection_spans_both_wire_dialects() {
    // HTTP 401 and Qianfan in-band token errors both count
    assert!(GatewayError::Auth("expired".to_string()).is_auth());
    assert!(!GatewayError::Forbidden("denied".to_string()).is_auth());
    assert!(!GatewayError::TokenAcquisition("refused".to_string()).is_auth());
}

#[test]
fn test_missing_credential_names_the_env_var() {
    let error = GatewayError::missing_credential("deepseek", "DEEPSEEK_API_KEY");
    assert_eq!(error.kind(), "configuration_error");

    let message = error.to_string();
    assert!(message.contains("deepseek"));
    assert!(message.contains("DEEPSEEK_API_KEY"));
}

#[test]
fn test_error_display_messages() {
    let error = GatewayError::RateLimited("quota exhausted".to_string());
    assert!(error.to_string().contains("quota exhausted"));

    let error = GatewayError::Server {
        status: 502,
        message: "bad gateway".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("502"));
    assert!(message.contains("bad gateway"));

    let error = GatewayError::UnknownProvider("gpt9000".to_string());
    assert!(error.to_string().contains("gpt9000"));
}

#[test]
fn test_errors_are_cloneable() {
    let error = GatewayError::Network("timeout".to_string());
    let cloned = error.clone();
    assert_eq!(error.kind(), cloned.kind());
    assert_eq!(error.to_string(), cloned.to_string());
}
