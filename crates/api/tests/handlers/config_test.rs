use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tracing::Level;

use planning_api::config::ApiConfig;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| values.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let config = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/planning")]))
        .unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.database_url, "postgres://localhost/planning");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
}

#[test]
fn test_config_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("DATABASE_URL", "postgres://db/planning"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://a.test, ,http://b.test"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
    );
    assert_eq!(config.request_timeout, 5);
}

#[test]
fn test_config_requires_database_url() {
    let result = ApiConfig::from_lookup(lookup(&[]));

    assert!(result.is_err());
}

#[test]
fn test_config_rejects_bad_port() {
    let result = ApiConfig::from_lookup(lookup(&[
        ("API_PORT", "http"),
        ("DATABASE_URL", "postgres://db/planning"),
    ]));

    assert!(result.is_err());
}

#[test]
fn test_config_lenient_settings_fall_back() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/planning"),
        ("LOG_LEVEL", "loud"),
        ("API_REQUEST_TIMEOUT_SECONDS", "soon"),
    ]))
    .unwrap();

    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout, 30);

    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/planning"),
        ("LOG_LEVEL", "WARN"),
    ]))
    .unwrap();

    assert_eq!(config.log_level, Level::WARN);
}
