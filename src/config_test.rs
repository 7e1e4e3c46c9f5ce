use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
    assert!(cfg.assets_dir.ends_with("public"));
}

#[test]
fn values_override_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SITE_ADDR", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/voyager/assets"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/voyager/assets"));
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("SITE_ADDR", "")])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn malformed_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "notaport")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "notaport"));

    let err = ServerConfig::from_lookup(lookup(&[("PORT", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn malformed_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost:3000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid SITE_ADDR \"localhost:3000\": expected an IP address");
}

#[test]
fn from_env_reads_process_environment() {
    unsafe { std::env::remove_var("PORT") };
    unsafe { std::env::set_var("ASSETS_DIR", "/tmp/voyager-assets-test") };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.assets_dir, PathBuf::from("/tmp/voyager-assets-test"));
    unsafe { std::env::remove_var("ASSETS_DIR") };
}
