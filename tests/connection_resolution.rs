//! Connection resolution tests
//!
//! End-to-end path from a connection config file through precedence
//! resolution to a built client, without touching the process environment.

use nomad_tables::config::{ConfigError, ResolvedConnection};
use nomad_tables::{resolve, Client, ConfigLoader, ConnectionConfig, EnvSettings};
use std::io::Write;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_file_config_resolves_over_env() {
    let file = config_file(
        "address: http://nomad.internal:4646\nnamespace: platform\nsecret_id: from-file\n",
    );
    let config = ConfigLoader::load_file(file.path()).unwrap();
    let env = EnvSettings {
        address: Some("http://localhost:4646".to_string()),
        namespace: Some("default".to_string()),
        token: Some("from-env".to_string()),
    };

    let resolved = resolve(&config, &env).unwrap();
    assert_eq!(
        resolved,
        ResolvedConnection {
            address: "http://nomad.internal:4646".to_string(),
            namespace: Some("platform".to_string()),
            secret_id: Some("from-file".to_string()),
        }
    );
}

#[test]
fn test_partial_file_falls_back_to_env() {
    let file = config_file("address: http://nomad.internal:4646\n");
    let config = ConfigLoader::load_file(file.path()).unwrap();
    let env = EnvSettings {
        address: None,
        namespace: Some("default".to_string()),
        token: Some("t-123".to_string()),
    };

    let resolved = resolve(&config, &env).unwrap();
    assert_eq!(resolved.address, "http://nomad.internal:4646");
    assert_eq!(resolved.namespace.as_deref(), Some("default"));
    assert_eq!(resolved.secret_id.as_deref(), Some("t-123"));
}

#[test]
fn test_empty_config_and_env_reports_missing_address() {
    let err = resolve(&ConnectionConfig::default(), &EnvSettings::default()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingAddress));
    assert!(err.to_string().contains("NOMAD_ADDR"));
}

#[test]
fn test_resolved_connection_builds_a_client() {
    let resolved = ResolvedConnection {
        address: "http://127.0.0.1:4646".to_string(),
        namespace: Some("default".to_string()),
        secret_id: None,
    };
    let client = Client::new(&resolved).unwrap();
    assert_eq!(client.default_namespace(), Some("default"));
}

#[test]
fn test_client_debug_output_redacts_the_token() {
    let resolved = ResolvedConnection {
        address: "http://127.0.0.1:4646".to_string(),
        namespace: None,
        secret_id: Some("s.very-secret-token".to_string()),
    };
    let client = Client::new(&resolved).unwrap();
    let rendered = format!("{client:?}");
    assert!(rendered.contains("http://127.0.0.1:4646"));
    assert!(!rendered.contains("very-secret-token"), "{rendered}");
}

#[test]
fn test_unparseable_address_is_rejected() {
    let resolved = ResolvedConnection {
        address: "not a url".to_string(),
        namespace: None,
        secret_id: None,
    };
    let err = Client::new(&resolved).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddress { .. }));
}
