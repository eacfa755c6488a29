use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::quantity::Category;
use crate::units::*;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 소수점 자리수 상한.
pub const MAX_DECIMALS: usize = 12;

/// 분류별 기본 입력/변환 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub length: (LengthUnit, LengthUnit),
    pub weight: (WeightUnit, WeightUnit),
    pub temperature: (TemperatureUnit, TemperatureUnit),
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: (LengthUnit::Meters, LengthUnit::Feet),
            weight: (WeightUnit::Kilogram, WeightUnit::Pounds),
            temperature: (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
        }
    }
}

impl DefaultUnits {
    /// 분류의 기본 (입력, 변환) 단위 이름.
    pub fn names_for(&self, category: Category) -> (&'static str, &'static str) {
        match category {
            Category::Length => (self.length.0.name(), self.length.1.name()),
            Category::Weight => (self.weight.0.name(), self.weight.1.name()),
            Category::Temperature => (self.temperature.0.name(), self.temperature.1.name()),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en-us)
    pub language: String,
    /// 언어팩 TOML 디렉터리
    pub language_pack_dir: Option<String>,
    /// 결과 표시 소수점 자리수
    pub decimals: usize,
    pub default_category: Category,
    pub assistant_enabled: bool,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            decimals: 4,
            default_category: Category::Length,
            assistant_enabled: true,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.decimals = cfg.decimals.min(MAX_DECIMALS);
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
