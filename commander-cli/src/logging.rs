//! 日志初始化
//!
//! 默认级别来自配置，`RUST_LOG` 可进一步覆盖；输出到 stderr，避免与命令输出混在一起。
//!
use crate::config::{LogConfig, LogFormat};
use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init(config: &LogConfig) -> Result<()> {
    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("invalid log level: {}", config.level))?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let builder = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder.json().with_current_span(true).finish().try_init(),
        LogFormat::Pretty => builder.compact().finish().try_init(),
    }
    .context("failed to install tracing subscriber")
}
