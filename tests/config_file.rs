//! 설정 파일 생성/저장/로드 테스트.
use unit_conversion_toolbox::config::{load_or_default, Config, ConfigError, MAX_DECIMALS};
use unit_conversion_toolbox::quantity::Category;
use unit_conversion_toolbox::units::TemperatureUnit;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.decimals, 4);
    assert!(path.exists());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.decimals = 2;
    cfg.language = "ko".to_string();
    cfg.default_category = Category::Temperature;
    cfg.default_units.temperature = (TemperatureUnit::Kelvin, TemperatureUnit::Celsius);
    cfg.assistant_enabled = false;
    cfg.save(&path).expect("save");

    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimals = 6\ndefault_category = \"Weight\"\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.decimals, 6);
    assert_eq!(cfg.default_category, Category::Weight);
    assert_eq!(cfg.language, "auto");
    assert!(cfg.assistant_enabled);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimals = \"many\"\n").expect("write");
    let err = load_or_default(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn excessive_decimals_are_clamped_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimals = 500\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.decimals, MAX_DECIMALS);
}
