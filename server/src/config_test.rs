use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_backend_is_set() {
    let config = Config::from_lookup(lookup(&[("BACKEND_URL", "http://api:8080")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn backend_trailing_slash_trimmed() {
    let config = Config::from_lookup(lookup(&[("BACKEND_URL", " https://api.forgeline.test/ ")])).unwrap();
    assert_eq!(config.backend_url, "https://api.forgeline.test");
}

#[test]
fn backend_is_required() {
    assert_eq!(Config::from_lookup(lookup(&[])), Err(ConfigError::Missing { var: "BACKEND_URL" }));
    assert_eq!(
        Config::from_lookup(lookup(&[("BACKEND_URL", "  ")])),
        Err(ConfigError::Missing { var: "BACKEND_URL" })
    );
}

#[test]
fn backend_must_be_http() {
    let err = Config::from_lookup(lookup(&[("BACKEND_URL", "ftp://files")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_URL", .. }));
}

#[test]
fn numeric_overrides_parse() {
    let config = Config::from_lookup(lookup(&[
        ("BACKEND_URL", "http://api"),
        ("PORT", "8081"),
        ("MAX_BODY_BYTES", "1024"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8081);
    assert_eq!(config.max_body_bytes, 1024);
    assert_eq!(config.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn bad_port_is_reported() {
    let err = Config::from_lookup(lookup(&[("BACKEND_URL", "http://api"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}
