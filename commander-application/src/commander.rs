//! 命令门面（Commander）
//!
//! 负责装配默认的翻译器与总线（`ValidationCommandBus<DefaultCommandBus>`），
//! 并为调用方提供：直接执行、带本次装饰器执行、从松散输入映射后执行。
//!
use crate::{
    command::Command,
    command_bus::CommandBus,
    config::CommanderConfig,
    container::Container,
    context::AppContext,
    default_command_bus::DefaultCommandBus,
    error::AppError,
    input::map_input_to_command,
    translator::{BasicCommandTranslator, CommandTranslator},
    validation_command_bus::ValidationCommandBus,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct Commander {
    container: Arc<Container>,
    bus: ValidationCommandBus<DefaultCommandBus>,
}

impl Commander {
    /// 以默认翻译器装配总线，不带全局装饰器
    pub fn new(container: Arc<Container>) -> Self {
        let translator: Arc<dyn CommandTranslator> =
            Arc::new(BasicCommandTranslator::new(container.clone()));
        let inner = DefaultCommandBus::new(container.clone(), translator.clone());
        let bus = ValidationCommandBus::new(inner, container.clone(), translator);

        Self { container, bus }
    }

    /// 按配置装配：登记全局装饰器，并按需在装配期检查其是否绑定为装饰器（不调用工厂）
    pub fn from_config(container: Arc<Container>, config: &CommanderConfig) -> Result<Self, AppError> {
        if config.verify_decorators {
            for identifier in &config.decorators {
                container.ensure_decorator(identifier)?;
            }
        }

        let mut commander = Self::new(container);
        for identifier in &config.decorators {
            commander.bus = commander.bus.decorate(identifier.clone());
        }

        tracing::info!(
            decorators = ?commander.bus.decorators(),
            "command bus assembled"
        );

        Ok(commander)
    }

    /// 追加全局装饰器（链式）
    pub fn decorate(mut self, identifier: impl Into<String>) -> Self {
        self.bus = self.bus.decorate(identifier);
        self
    }

    pub fn bus(&self) -> &ValidationCommandBus<DefaultCommandBus> {
        &self.bus
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// 执行命令
    pub async fn execute<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        self.bus.execute(ctx, cmd).await
    }

    /// 执行命令，并在全局装饰器之后追加本次调用的装饰器
    pub async fn execute_decorated<C>(
        &self,
        ctx: &AppContext,
        cmd: C,
        decorators: &[String],
    ) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        self.bus.execute_with(ctx, cmd, decorators).await
    }

    /// 先把输入映射为命令，再带本次装饰器执行
    pub async fn execute_input<C>(
        &self,
        ctx: &AppContext,
        input: &Map<String, Value>,
        decorators: &[String],
    ) -> Result<C::Output, AppError>
    where
        C: Command + DeserializeOwned,
    {
        let cmd = map_input_to_command::<C>(input)?;
        self.execute_decorated(ctx, cmd, decorators).await
    }
}
