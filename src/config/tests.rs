use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.gui.width, 420.0);
    assert_eq!(config.gui.height, 400.0);
    assert_eq!(config.gui.prompt_preview_chars, 60);
    assert!(config.store.path.is_none());
}

#[test]
fn test_partial_gui_section() {
    let config: Config = toml::from_str(
        r#"
[gui]
prompt_preview_chars = 20
"#,
    )
    .unwrap();
    assert_eq!(config.gui.prompt_preview_chars, 20);
    assert_eq!(config.gui.width, 420.0);
    assert_eq!(config.render_options().prompt_preview_chars, 20);
}

#[test]
fn test_store_path_override() {
    let config: Config = toml::from_str(
        r#"
[store]
path = "/tmp/custom-actions.json"
"#,
    )
    .unwrap();
    assert_eq!(config.store_path(), PathBuf::from("/tmp/custom-actions.json"));

    let default_path = Config::default().store_path();
    assert!(default_path.ends_with(".quick-actions/actions.json"));
}

#[test]
fn test_zero_preview_chars_is_clamped() {
    let mut config = Config::default();
    config.gui.prompt_preview_chars = 0;
    assert_eq!(config.render_options().prompt_preview_chars, 1);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.gui.width = 640.0;
    config.store.path = Some(dir.path().join("actions.json"));

    config.save_to_file(&path).unwrap();
    let loaded = Config::load_or_default(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_load_invalid_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gui\nwidth = ").unwrap();

    let err = Config::load_or_default(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
}
