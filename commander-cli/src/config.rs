//! 生成器配置
//!
//! 合并顺序（低 → 高）：代码内默认值 → YAML 文件（默认 `commander.yaml`）
//! → `COMMANDER_GENERATE_` 前缀的环境变量（嵌套键以 `__` 分隔）→ 命令行参数。
//!
use crate::error::GeneratorError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "commander.yaml";
pub const ENV_PREFIX: &str = "COMMANDER_GENERATE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 生成文件的根目录
    pub base: PathBuf,
    /// 自定义模板目录（含 `command.hbs` / `handler.hbs`），为空时使用内置模板
    pub templates: Option<PathBuf>,
    pub log: LogConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("app"),
            templates: None,
            log: LogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace / debug / info / warn / error
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl GeneratorConfig {
    pub fn load() -> Result<Self, GeneratorError> {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GeneratorError> {
        let config: GeneratorConfig = Self::figment(path.as_ref()).extract()?;
        Ok(config)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(GeneratorConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
