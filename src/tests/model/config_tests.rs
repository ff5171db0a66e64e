use super::*;

#[test]
fn missing_fields_fall_back_to_defaults() -> Result<()> {
    let cfg = AdminConfig::from_json(br#"{"base_url": "https://docs.example.org/"}"#)?;
    assert_eq!(cfg.base_url, "https://docs.example.org/");
    assert_eq!(cfg.api_prefix, "/admin/api");
    assert_eq!(cfg.admin_header, "X-Stream-Admin");
    assert_eq!(cfg.indent_unit, "\t");
    Ok(())
}

#[test]
fn api_url_joins_without_double_slashes() {
    let cfg = AdminConfig {
        base_url: "http://localhost:8000/".to_string(),
        ..AdminConfig::default()
    };
    assert_eq!(cfg.api_url("/list"), "http://localhost:8000/admin/api/list");
}

#[test]
fn rejects_non_http_base_url() {
    let err = AdminConfig::from_json(br#"{"base_url": "ftp://x"}"#).unwrap_err();
    assert!(format!("{:#}", err).contains("base_url"));
}

#[test]
fn cli_override_wins_over_env() {
    let cfg = AdminConfig::default().with_overrides(
        Some("http://env:1".to_string()),
        Some("http://cli:2".to_string()),
    );
    assert_eq!(cfg.base_url, "http://cli:2");

    let cfg = AdminConfig::default().with_overrides(Some("  ".to_string()), None);
    assert_eq!(cfg.base_url, AdminConfig::default().base_url);
}

#[test]
fn explicit_config_path_must_exist() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("nope.json");
    assert!(AdminConfig::load(Some(&missing)).is_err());

    let present = dir.path().join("cfg.json");
    std::fs::write(&present, br#"{"timeout_secs": 5}"#)?;
    let cfg = AdminConfig::load(Some(&present))?;
    assert_eq!(cfg.timeout_secs, 5);
    Ok(())
}
