use super::*;

#[test]
fn parse_host_defaults_to_all_interfaces() {
    assert_eq!(parse_host(None), Ok("0.0.0.0".parse().unwrap()));
}

#[test]
fn parse_host_accepts_ipv4_and_ipv6() {
    assert_eq!(parse_host(Some(" 127.0.0.1 ")), Ok("127.0.0.1".parse().unwrap()));
    assert_eq!(parse_host(Some("::1")), Ok("::1".parse().unwrap()));
}

#[test]
fn parse_host_rejects_hostnames() {
    assert_eq!(
        parse_host(Some("localhost")),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

#[test]
fn parse_port_defaults_to_3000() {
    assert_eq!(parse_port(None), Ok(3000));
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_zero_and_garbage() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort { value: "0".to_owned() }));
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".to_owned() }));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn config_errors_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT \"x\": expected 1-65535");
}
