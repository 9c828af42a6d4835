use super::*;

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn explicit_host_and_port() {
    let config = ServerConfig::from_values(Some("127.0.0.1"), Some("8080")).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn port_is_trimmed() {
    let config = ServerConfig::from_values(None, Some(" 4000 ")).unwrap();
    assert_eq!(config.port, 4000);
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_values(None, Some("http")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });
}

#[test]
fn zero_and_out_of_range_ports_are_rejected() {
    assert!(ServerConfig::from_values(None, Some("0")).is_err());
    assert!(ServerConfig::from_values(None, Some("70000")).is_err());
}

#[test]
fn empty_host_is_rejected() {
    let err = ServerConfig::from_values(Some("  "), None).unwrap_err();
    assert_eq!(err, ConfigError::EmptyHost);
}
