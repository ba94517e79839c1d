use super::*;

#[test]
fn from_values_uses_defaults() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR.to_string(), port: DEFAULT_PORT });
    assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn from_values_reads_overrides() {
    let cfg = ServerConfig::from_values(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_string()))
    );
    assert_eq!(
        ServerConfig::from_values(Some("http"), None),
        Err(ConfigError::InvalidPort("http".to_string()))
    );
}
