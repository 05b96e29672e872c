use std::collections::HashMap;
use std::net::SocketAddr;

use wellcheck_export::view::CrisisResources;
use wellcheck_server::config::{LogFormat, ServerConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.crisis, CrisisResources::default());
}

#[test]
fn overrides_from_environment() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("WELLCHECK_BIND", "0.0.0.0:8080"),
        ("WELLCHECK_LOG_FORMAT", "Pretty"),
        ("WELLCHECK_CRISIS_LOCAL", "Samaritans: 116 123"),
    ]))
    .unwrap();

    assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.crisis.local, "Samaritans: 116 123");
    assert_eq!(config.crisis.global, CrisisResources::default().global);
}

#[test]
fn blank_values_keep_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("WELLCHECK_BIND", "  "),
        ("WELLCHECK_CRISIS_GLOBAL", ""),
    ]))
    .unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn invalid_values_are_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("WELLCHECK_BIND", "localhost")])).unwrap_err();
    assert!(err.to_string().contains("WELLCHECK_BIND"));

    let err =
        ServerConfig::from_lookup(lookup(&[("WELLCHECK_LOG_FORMAT", "xml")])).unwrap_err();
    assert!(err.to_string().contains("xml"));
}
