use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::energy_source::EnergySource;
use crate::presets::{self, REFERENCE_DISCOUNT_FACTOR};
use crate::units::EnergyUnit;

/// 설정 파일의 기본 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 이름이 붙은 발전원 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedSource {
    pub name: String,
    #[serde(flatten)]
    pub source: EnergySource,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 연간 할인율(0.05 = 5%)
    pub discount_factor: f64,
    /// 보고서에 붙는 통화 표기. 환산은 하지 않는다.
    pub currency: String,
    /// LCOE를 보고할 발전량 단위
    pub report_unit: EnergyUnit,
    /// 계산 대상 발전원
    pub sources: Vec<NamedSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discount_factor: REFERENCE_DISCOUNT_FACTOR,
            currency: "PLN".to_string(),
            report_unit: EnergyUnit::MegawattHour,
            sources: presets::presets()
                .iter()
                .map(|p| NamedSource {
                    name: p.key.to_string(),
                    source: p.source,
                })
                .collect(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg = Config::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), sources = cfg.sources.len(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 이름으로 발전원을 찾는다. 설정에 없으면 내장 프리셋 키로 찾는다.
    pub fn find_source(&self, name: &str) -> Option<NamedSource> {
        if let Some(found) = self.sources.iter().find(|s| s.name == name) {
            return Some(found.clone());
        }
        presets::find_preset(name).map(|p| NamedSource {
            name: p.key.to_string(),
            source: p.source,
        })
    }
}
