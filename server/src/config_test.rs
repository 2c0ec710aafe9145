use super::*;

#[test]
fn defaults_apply_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api, ApiConfig::default());
}

#[test]
fn explicit_values_are_parsed_and_normalized() {
    let cfg = ServerConfig::from_values(Some(" 8080 "), Some("https://api.example.test/")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api.base_url(), "https://api.example.test");
    assert_eq!(cfg.api.register_url(), "https://api.example.test/api/register");
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = ServerConfig::from_values(Some(""), None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn empty_base_means_same_origin() {
    let cfg = ServerConfig::from_values(None, Some("")).unwrap();
    assert_eq!(cfg.api.registrations_url(), "/api/registrations");
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(Some("eighty"), None),
        Err(ConfigError::InvalidPort("eighty".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_values(Some("70000"), None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
}

#[test]
fn non_http_base_is_rejected() {
    assert_eq!(
        ServerConfig::from_values(None, Some("ftp://files.example")),
        Err(ConfigError::InvalidApiBaseUrl("ftp://files.example".to_owned()))
    );
}

#[test]
fn from_env_reads_variables() {
    // SAFETY: no other test in this crate touches these variables.
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::set_var("DAR_API_BASE_URL", "http://localhost:5000");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.api.base_url(), "http://localhost:5000");
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("DAR_API_BASE_URL");
    }
}
