//! Integration tests for configuration assembly through the public API.
//!
//! These tests exercise the `ConfigLoader` builder chain the way the CLI
//! and external wrappers use it, without touching the process environment.

use flyway_config::{
    CacheExpiry, ConfigLoader, FlywayConfig, constants::NEVER_EXPIRE_MS, jdbc_url,
};

/// The canonical scenario: host, port, and database interpolate into the URL.
#[test]
fn test_scenario_db_local() {
    let config = ConfigLoader::new()
        .with_host("db.local".to_string())
        .with_port("5432".to_string())
        .with_database("app".to_string())
        .build();

    assert_eq!(config.flyway_args.url, "jdbc:postgresql://db.local:5432/app");
    assert_eq!(config.flyway_args.url, jdbc_url("db.local", "5432", "app"));
}

#[test]
fn test_default_expiry_is_never() {
    let config = ConfigLoader::new().build();

    assert_eq!(config.downloads.expiration, CacheExpiry::Never);
    assert_eq!(config.downloads.expiration.as_millis(), NEVER_EXPIRE_MS);
}

/// Wrappers may hand the JSON back to us; the shape must survive a reload.
#[test]
fn test_json_reload_preserves_fields() {
    let config = ConfigLoader::new()
        .with_host("db".to_string())
        .with_port("5432".to_string())
        .with_database("app".to_string())
        .with_username("migrator".to_string())
        .build();

    let json = config.to_json_pretty().expect("should render json");
    let reloaded: FlywayConfig = serde_json::from_str(&json).expect("should parse json");

    assert_eq!(reloaded.flyway_args.url, config.flyway_args.url);
    assert_eq!(reloaded.flyway_args.user.as_deref(), Some("migrator"));
    assert!(reloaded.flyway_args.password.is_none());
    assert_eq!(reloaded.downloads, config.downloads);
}

#[test]
fn test_yaml_rendering_contains_sentinel() {
    let yaml = ConfigLoader::new().build().to_yaml().expect("should render yaml");

    assert!(yaml.contains("flywayArgs:"));
    assert!(yaml.contains("expirationTimeInMs: -1"));
}
