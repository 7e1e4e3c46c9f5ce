use super::*;

#[test]
fn config_errors_pass_through_unchanged() {
    let err: StartupError = ConfigError::InvalidPort { value: "abc".to_owned() }.into();
    assert!(matches!(err, StartupError::Config(_)));
    assert_eq!(err.to_string(), r#"invalid PORT "abc": expected 1-65535"#);
}

#[test]
fn leptos_configuration_errors_are_wrapped() {
    let err: StartupError = LeptosConfigError::ConfigSectionNotFound.into();
    assert!(matches!(err, StartupError::Leptos(LeptosConfigError::ConfigSectionNotFound)));
    assert_eq!(
        err.to_string(),
        "leptos configuration: package.metadata.leptos section missing from Cargo.toml"
    );
}

#[test]
fn bind_failure_names_the_address() {
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    let source = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
    let err = StartupError::Bind { addr, source };
    assert_eq!(err.to_string(), "failed to bind 127.0.0.1:3000: address in use");
}
