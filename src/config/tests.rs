//! Configuration tests

use super::*;
use crate::models::Category;
use std::collections::HashMap;

/// Build an env lookup from a fixed set of pairs
fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// The generated template must parse and resolve back to the defaults.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), env_from(&[])).unwrap();
    assert_eq!(resolved, Config::default());
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.api.base_url = "http://localhost:3005".to_string();
    config.api.timeout_secs = Some(5);
    config
        .api
        .headers
        .insert("User-Agent".to_string(), "jokebox-test".to_string());
    config.ui.default_category = Category::General;
    config.ui.show_errors = false;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed = Config::parse_file_config(&config.to_toml()).unwrap();
    let resolved = Config::resolve(parsed, env_from(&[])).unwrap();
    assert_eq!(resolved, config);
}

/// Control characters and quotes must be written with TOML escapes.
#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.api.headers.insert(
        "X-Note".to_string(),
        "say \"hi\" \\ tab\there \u{1b}[0m \u{0}".to_string(),
    );
    config.logging.file_dir = std::path::PathBuf::from("C:\\logs\\jokebox");
    config.logging.file_prefix = "jokebox\u{7f}".to_string();

    let toml_str = config.to_toml();
    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Escaped config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), env_from(&[])).unwrap();
    assert_eq!(resolved, config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_defaults_match_joke_api() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "https://official-joke-api.appspot.com");
    assert_eq!(
        config.api.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(config.api.timeout_secs, None);
    assert_eq!(config.ui.default_category, Category::Programming);
    assert!(config.enable_tui);
}

#[test]
fn test_empty_file_uses_defaults() {
    let parsed = Config::parse_file_config("").unwrap();
    let resolved = Config::resolve(parsed, env_from(&[])).unwrap();
    assert_eq!(resolved, Config::default());
}

#[test]
fn test_file_headers_merge_over_defaults() {
    let parsed = Config::parse_file_config(
        r#"
[api.headers]
"X-Trace" = "on"
"#,
    )
    .unwrap();
    let resolved = Config::resolve(parsed, env_from(&[])).unwrap();

    assert_eq!(resolved.api.headers.len(), 2);
    assert_eq!(resolved.api.headers["X-Trace"], "on");
    assert_eq!(resolved.api.headers["Content-Type"], "application/json");
}

#[test]
fn test_invalid_file_is_error() {
    assert!(Config::parse_file_config("[ui]\ndefault_category = \"knock-knock\"").is_err());
    assert!(Config::parse_file_config("[api\nbase_url = ").is_err());
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let parsed = Config::parse_file_config(
        r#"
[api]
base_url = "http://from-file"

[ui]
default_category = "programming"
"#,
    )
    .unwrap();

    let resolved = Config::resolve(
        parsed,
        env_from(&[
            (ENV_API_URL, "http://from-env"),
            (ENV_CATEGORY, "general"),
            (ENV_NO_TUI, "1"),
        ]),
    )
    .unwrap();

    assert_eq!(resolved.api.base_url, "http://from-env");
    assert_eq!(resolved.ui.default_category, Category::General);
    assert!(!resolved.enable_tui);
}

#[test]
fn test_invalid_env_category_is_error() {
    let result = Config::resolve(FileConfig::default(), env_from(&[(ENV_CATEGORY, "dad")]));
    assert!(result.is_err());
}

#[test]
fn test_no_tui_accepts_true() {
    let resolved =
        Config::resolve(FileConfig::default(), env_from(&[(ENV_NO_TUI, "TRUE")])).unwrap();
    assert!(!resolved.enable_tui);

    let resolved =
        Config::resolve(FileConfig::default(), env_from(&[(ENV_NO_TUI, "0")])).unwrap();
    assert!(resolved.enable_tui);
}
