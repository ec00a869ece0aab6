use pretty_assertions::assert_eq;
use std::io::Write;
use survey_types::{resolve_resource_url, ResourceConfig};

fn with_base(base: &str) -> ResourceConfig {
    ResourceConfig {
        base_url: Some(base.to_string()),
        ..ResourceConfig::default()
    }
}

// ── resolve_resource_url ─────────────────────────────────────────

#[test]
fn missing_path_uses_fallback() {
    let config = ResourceConfig::default();
    assert_eq!(resolve_resource_url(&config, None), "/static/placeholder.png");
}

#[test]
fn blank_path_uses_fallback() {
    let config = with_base("https://cdn.example.com");
    assert_eq!(resolve_resource_url(&config, Some("   ")), "/static/placeholder.png");
}

#[test]
fn absolute_urls_pass_through() {
    let config = with_base("https://cdn.example.com");
    for url in [
        "https://other.example.com/a.png",
        "http://x/y.png",
        "data:image/png;base64,AAAA",
        "//cdn.example.org/z.png",
    ] {
        assert_eq!(resolve_resource_url(&config, Some(url)), url);
    }
}

#[test]
fn relative_path_joined_with_base() {
    let config = with_base("https://cdn.example.com/");
    assert_eq!(
        resolve_resource_url(&config, Some("/img/logo.png")),
        "https://cdn.example.com/img/logo.png"
    );
    assert_eq!(
        resolve_resource_url(&config, Some("img/logo.png")),
        "https://cdn.example.com/img/logo.png"
    );
}

#[test]
fn without_base_path_is_rooted() {
    let config = ResourceConfig::default();
    assert_eq!(resolve_resource_url(&config, Some("img/a.png")), "/img/a.png");
    assert_eq!(resolve_resource_url(&config, Some("/img/a.png")), "/img/a.png");
}

#[test]
fn blank_base_treated_as_unset() {
    let config = with_base("  ");
    assert_eq!(resolve_resource_url(&config, Some("a.png")), "/a.png");
}

// ── Config loading ───────────────────────────────────────────────

#[test]
fn from_toml_reads_resources_table() {
    let config = ResourceConfig::from_toml_str(
        r#"
        [resources]
        base_url = "https://cdn.example.com"
        fallback_path = "/img/none.svg"
        "#,
    )
    .unwrap();
    assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com"));
    assert_eq!(config.fallback_path, "/img/none.svg");
}

#[test]
fn from_toml_missing_table_is_default() {
    let config = ResourceConfig::from_toml_str("").unwrap();
    assert_eq!(config, ResourceConfig::default());
}

#[test]
fn from_toml_partial_table_fills_defaults() {
    let config = ResourceConfig::from_toml_str("[resources]\nbase_url = \"/media\"\n").unwrap();
    assert_eq!(config.base_url.as_deref(), Some("/media"));
    assert_eq!(config.fallback_path, "/static/placeholder.png");
}

#[test]
fn from_toml_invalid_is_error() {
    let err = ResourceConfig::from_toml_str("[resources\n").unwrap_err();
    assert!(format!("{err}").contains("invalid config"));
}

#[test]
fn load_from_missing_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = ResourceConfig::load_from(&dir.path().join("resources.toml"));
    assert_eq!(config, ResourceConfig::default());
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[resources]\nbase_url = \"https://cdn.example.com\"").unwrap();
    let config = ResourceConfig::load_from(file.path());
    assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com"));
}

#[test]
fn load_from_unparseable_file_falls_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not = [valid").unwrap();
    let config = ResourceConfig::load_from(file.path());
    assert_eq!(config, ResourceConfig::default());
}
