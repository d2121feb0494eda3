use super::convert::truncate_message;
use super::*;

fn decode_failure() -> serde_json::Error {
    serde_json::from_str::<u32>("not json").unwrap_err()
}

#[test]
fn test_http_status_display() {
    let err = Error::http_status(404, "Not Found");
    assert_eq!(err.to_string(), "HTTP error (404): Not Found");
}

#[test]
fn test_http_status_accessor() {
    let err = Error::http_status(500, "Internal Server Error");
    assert_eq!(err.status_code(), Some(500));
    assert!(!err.is_transport());
}

#[test]
fn test_http_status_accessor_through_context() {
    let err = Error::http_status(404, "Not Found").context("Failed to fetch /items/7");
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("/items/7"));
}

#[test]
fn test_network_error_is_transport() {
    let err = Error::network("Connection refused");
    assert!(err.is_transport());
    assert!(err.status_code().is_none());
}

#[test]
fn test_timeout_is_transport() {
    let err = Error::timeout("Request to http://example.com timed out after 100ms");
    assert!(err.is_transport());
    assert!(err.to_string().starts_with("Timeout"));
}

#[test]
fn test_cancelled_is_transport() {
    let err = Error::cancelled("Request cancelled");
    assert!(err.is_transport());
    assert_eq!(err.as_cancelled(), Some("Request cancelled"));

    let wrapped = err.context("Failed to fetch ticker");
    assert_eq!(wrapped.as_cancelled(), Some("Request cancelled"));
    assert!(wrapped.is_transport());
}

#[test]
fn test_unsupported_method_display() {
    let err = Error::unsupported_method("PATCH".to_string());
    assert_eq!(err.to_string(), "Unsupported method: PATCH");
    assert!(!err.is_transport());
}

#[test]
fn test_invalid_url_display() {
    let err = Error::invalid_url("relative URL without a base");
    assert!(err.to_string().starts_with("Invalid URL"));
}

#[test]
fn test_encode_and_decode_sources() {
    use std::error::Error as StdError;

    let encode = Error::encode(decode_failure());
    assert!(encode.to_string().contains("encode request body"));
    assert!(encode.source().is_some());

    let decode = Error::decode(decode_failure());
    assert!(decode.to_string().contains("decode response body"));
    assert!(decode.source().is_some());
}

#[test]
fn test_root_cause_penetrates_context() {
    let err = Error::network("Connection refused")
        .context("Failed to execute request")
        .context("Failed to fetch /items");

    assert!(matches!(err.root_cause(), Error::Network(_)));
}

#[test]
fn test_report_includes_chain() {
    let err = Error::network("Connection refused").context("Failed to fetch /items");
    let report = err.report();
    assert!(report.starts_with("Failed to fetch /items"));
    assert!(report.contains("Caused by: Network error"));
    assert!(report.contains("Connection refused"));
}

#[test]
fn test_context_ext_on_result() {
    let result: std::result::Result<(), NetworkError> =
        Err(NetworkError::Dns("no such host".to_string()));
    let err = result.context("Failed to resolve endpoint").unwrap_err();
    assert!(err.is_transport());
    assert!(err.report().contains("no such host"));
}

#[test]
fn test_context_ext_lazy() {
    let result: std::result::Result<(), NetworkError> =
        Err(NetworkError::Ssl("handshake failed".to_string()));
    let err = result
        .with_context(|| format!("Failed to fetch {}", "/secure"))
        .unwrap_err();
    assert!(err.to_string().contains("/secure"));
}

#[test]
fn test_network_error_body_read_display() {
    let err: Error = NetworkError::BodyRead("unexpected EOF".to_string()).into();
    assert!(err.to_string().contains("Network error"));
    assert!(err.report().contains("unexpected EOF"));
}

#[test]
fn test_truncate_message_short() {
    let msg = "short".to_string();
    assert_eq!(truncate_message(msg), "short");
}

#[test]
fn test_truncate_message_long() {
    let msg = "x".repeat(5000);
    let truncated = truncate_message(msg);
    assert!(truncated.ends_with("... (truncated)"));
    assert!(truncated.len() < 1100);
}

#[test]
fn test_config_error_field_name() {
    let err = ConfigError::too_high("timeout", "600s", "5 minutes");
    assert_eq!(err.field_name(), "timeout");

    let err = ConfigError::invalid("base_url", "cannot be empty");
    assert_eq!(err.field_name(), "base_url");
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_config_error_converts_to_error() {
    let err: Error = ConfigError::invalid("timeout", "cannot be zero").into();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_errors_are_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<NetworkError>();
    assert_send_sync::<ConfigError>();
}
