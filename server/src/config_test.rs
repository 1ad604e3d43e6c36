use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = PortalConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides_and_trims_backend_slash() {
    let cfg = PortalConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.lostective.test/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.lostective.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = PortalConfig::from_lookup(lookup(&[("PORT", "  "), ("BACKEND_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = PortalConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = PortalConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_backend() {
    let err = PortalConfig::from_lookup(lookup(&[("BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("localhost:8000".to_owned()));
}
