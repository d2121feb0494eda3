use super::request::{compose_url, merge_headers};
use super::response::decode_body;
use super::*;
use crate::error::Error;
use reqwest::header::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::time::Duration;

#[test]
fn test_rest_client_creation() {
    let client = RestClient::new("http://localhost:8888", Duration::from_secs(100));
    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url(), "http://localhost:8888");
}

#[test]
fn test_rest_config_default() {
    let config = RestConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert!(config.user_agent.starts_with("restkit/"));
    assert_eq!(config.pool_max_idle_per_host, 10);
    assert_eq!(config.pool_idle_timeout, Duration::from_secs(90));
}

#[test]
fn test_rest_config_new_keeps_base_url_verbatim() {
    let config = RestConfig::new("http://localhost:8888/", Duration::from_secs(5));
    assert_eq!(config.base_url, "http://localhost:8888/");
}

#[test]
fn test_rest_config_validate_ok() {
    let config = RestConfig::new("http://localhost:8888", Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
fn test_rest_config_validate_empty_base_url() {
    let config = RestConfig::new("", Duration::from_secs(30));
    let err = config.validate().unwrap_err();
    assert_eq!(err.field_name(), "base_url");
}

#[test]
fn test_rest_config_validate_zero_timeout() {
    let config = RestConfig::new("http://localhost:8888", Duration::ZERO);
    let err = config.validate().unwrap_err();
    assert_eq!(err.field_name(), "timeout");
}

#[test]
fn test_rest_config_validate_timeout_boundary() {
    let config = RestConfig::new("http://localhost:8888", Duration::from_secs(300));
    assert!(config.validate().is_ok());

    let config = RestConfig::new("http://localhost:8888", Duration::from_secs(301));
    assert!(config.validate().is_err());
}

#[test]
fn test_method_as_str() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[test]
fn test_method_parse_valid() {
    assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
    assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
    assert_eq!("PUT".parse::<Method>().unwrap(), Method::Put);
    assert_eq!("DELETE".parse::<Method>().unwrap(), Method::Delete);
}

#[test]
fn test_method_parse_unsupported() {
    let err = "PATCH".parse::<Method>().unwrap_err();
    assert!(matches!(err, Error::UnsupportedMethod(_)));
    assert!(err.to_string().contains("PATCH"));

    // Exact uppercase match only
    assert!("get".parse::<Method>().is_err());
}

#[test]
fn test_method_sends_json_body() {
    assert!(Method::Post.sends_json_body());
    assert!(Method::Put.sends_json_body());
    assert!(!Method::Get.sends_json_body());
    assert!(!Method::Delete.sends_json_body());
}

#[test]
fn test_compose_url_concatenates_verbatim() {
    let url = compose_url("http://localhost:8888", "/coba2", None).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8888/coba2");
}

#[test]
fn test_compose_url_no_slash_normalization() {
    let url = compose_url("http://localhost:8888/api", "/v2/items", None).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8888/api/v2/items");
}

#[test]
fn test_compose_url_invalid() {
    let err = compose_url("not a url", "/items", None).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[test]
fn test_compose_url_applies_query_params() {
    let params = HashMap::from([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ]);
    let url = compose_url("http://localhost:8888", "/items", Some(&params)).unwrap();

    let pairs: HashMap<String, String> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(pairs.get("a").map(String::as_str), Some("1"));
    assert_eq!(pairs.get("b").map(String::as_str), Some("2"));
}

#[test]
fn test_compose_url_query_overwrites_existing_key() {
    let params = HashMap::from([("a".to_string(), "new".to_string())]);
    let url = compose_url("http://localhost:8888", "/items?a=old&x=1", Some(&params)).unwrap();

    // Last write per key wins; keys re-serialize in sorted order
    assert_eq!(url.query(), Some("a=new&x=1"));
}

#[test]
fn test_compose_url_query_encoding() {
    let params = HashMap::from([("q".to_string(), "hello world".to_string())]);
    let url = compose_url("http://localhost:8888", "/search", Some(&params)).unwrap();
    assert_eq!(url.query(), Some("q=hello+world"));

    let decoded: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(decoded, vec![("q".to_string(), "hello world".to_string())]);
}

#[test]
fn test_merge_headers_default_content_type_for_body_methods() {
    let merged = merge_headers(Method::Post, None);
    assert_eq!(
        merged.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let merged = merge_headers(Method::Get, None);
    assert!(merged.get("content-type").is_none());

    let merged = merge_headers(Method::Delete, None);
    assert!(merged.is_empty());
}

#[test]
fn test_merge_headers_caller_overrides_default() {
    let mut caller = HeaderMap::new();
    caller.insert(
        "content-type",
        HeaderValue::from_static("application/vnd.custom+json"),
    );

    let merged = merge_headers(Method::Put, Some(caller));
    assert_eq!(
        merged.get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/vnd.custom+json")
    );
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_merge_headers_overwrite_not_append() {
    let mut caller = HeaderMap::new();
    caller.append("x-token", HeaderValue::from_static("first"));
    caller.append("x-token", HeaderValue::from_static("second"));

    let merged = merge_headers(Method::Get, Some(caller));
    let values: Vec<_> = merged.get_all("x-token").iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0], "second");
}

#[test]
fn test_decode_body_into_struct() {
    #[derive(serde::Deserialize)]
    struct Data {
        id: u64,
        name: String,
    }

    let data: Data = decode_body(br#"{"id":1,"name":"foo"}"#).unwrap();
    assert_eq!(data.id, 1);
    assert_eq!(data.name, "foo");
}

#[test]
fn test_decode_body_empty_fails() {
    let err = decode_body::<serde_json::Value>(b"").unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_rest_client_is_clone_and_send() {
    fn assert_clone_send<T: Clone + Send + Sync>() {}
    assert_clone_send::<RestClient>();
}
