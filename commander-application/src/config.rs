//! 命令总线配置
//!
//! 合并顺序（低 → 高）：
//! 1. 代码内默认值；
//! 2. YAML 文件（默认 `commander.yaml`，不存在时忽略）；
//! 3. `COMMANDER_` 前缀的环境变量（嵌套键以 `__` 分隔）。
//!
use crate::error::AppError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "commander.yaml";
pub const ENV_PREFIX: &str = "COMMANDER_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommanderConfig {
    /// 全局装饰器标识，对每条命令按顺序执行
    pub decorators: Vec<String>,
    /// 构建总线时检查全部装饰器均已绑定
    pub verify_decorators: bool,
}

impl Default for CommanderConfig {
    fn default() -> Self {
        Self {
            decorators: Vec::new(),
            verify_decorators: true,
        }
    }
}

impl CommanderConfig {
    /// 从默认位置加载
    pub fn load() -> Result<Self, AppError> {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }

    /// 从指定 YAML 文件加载，并叠加环境变量
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let config: CommanderConfig = Self::figment(path.as_ref()).extract()?;
        Ok(config)
    }

    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(CommanderConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = CommanderConfig::load().expect("load defaults");
            assert_eq!(config, CommanderConfig::default());
            assert!(config.verify_decorators);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                decorators:
                  - audit
                  - app::locks::LockDecorator
                verify_decorators: true
                "#,
            )?;
            jail.set_env("COMMANDER_VERIFY_DECORATORS", "false");

            let config = CommanderConfig::load().expect("load config");
            assert_eq!(config.decorators, vec!["audit", "app::locks::LockDecorator"]);
            assert!(!config.verify_decorators);
            Ok(())
        });
    }
}
