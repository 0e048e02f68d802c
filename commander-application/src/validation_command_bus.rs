//! 带校验与装饰的命令总线（ValidationCommandBus）
//!
//! 每次执行都是一条独立的线性管线：`validate → decorate₀ → decorate₁ → … → handle`，
//! 任一阶段出错即短路返回，不重试、不做本地恢复。
//!
use crate::{
    command::{AnyCommand, Command},
    command_bus::CommandBus,
    container::Container,
    context::AppContext,
    error::AppError,
    translator::CommandTranslator,
};
use async_trait::async_trait;
use std::sync::Arc;

/// 在内部总线之外追加校验与装饰器的总线
///
/// 装饰器标识在构建期登记（有序、仅追加、不去重），构建完成后不可再修改，
/// 因而同一实例可以在多个任务间共享。
#[derive(Clone)]
pub struct ValidationCommandBus<B>
where
    B: CommandBus,
{
    inner: B,
    container: Arc<Container>,
    translator: Arc<dyn CommandTranslator>,
    decorators: Vec<String>,
}

impl<B> ValidationCommandBus<B>
where
    B: CommandBus,
{
    pub fn new(inner: B, container: Arc<Container>, translator: Arc<dyn CommandTranslator>) -> Self {
        Self {
            inner,
            container,
            translator,
            decorators: Vec::new(),
        }
    }

    /// 登记一个装饰器标识，在处理器之前按登记顺序执行（链式）
    pub fn decorate(mut self, identifier: impl Into<String>) -> Self {
        self.decorators.push(identifier.into());
        self
    }

    /// 已登记的装饰器标识（按登记顺序）
    pub fn decorators(&self) -> &[String] {
        &self.decorators
    }

    /// 执行命令，并在已登记的装饰器之后追加本次调用专属的装饰器
    ///
    /// 本次调用的装饰器不会被记录到总线上。
    pub async fn execute_with<C>(
        &self,
        ctx: &AppContext,
        cmd: C,
        extra_decorators: &[String],
    ) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        // 若存在校验器，先行校验
        self.validate_command(ctx, &cmd).await?;

        // 依次执行装饰器，结果丢弃
        let chain = self.decorators.iter().chain(extra_decorators.iter());
        for identifier in chain {
            self.run_decorator(ctx, identifier, &cmd).await?;
        }

        // 交给内部总线完成处理
        self.inner.execute(ctx, cmd).await
    }

    async fn validate_command<C>(&self, ctx: &AppContext, cmd: &C) -> Result<(), AppError>
    where
        C: Command,
    {
        let validator_id = self.translator.to_validator(cmd);

        if !self.container.has(&validator_id) {
            tracing::trace!(command = C::NAME, "no validator registered");
            return Ok(());
        }

        let validator = self.container.make_validator::<C>(&validator_id)?;

        validator.validate(ctx, cmd).await.inspect_err(|err| {
            tracing::debug!(
                command = C::NAME,
                validator = %validator_id,
                error = %err,
                "command rejected by validator"
            );
        })
    }

    async fn run_decorator(
        &self,
        ctx: &AppContext,
        identifier: &str,
        cmd: &dyn AnyCommand,
    ) -> Result<(), AppError> {
        // 先按登记信息判断种类，工厂自身的错误原样返回
        self.container.ensure_decorator(identifier)?;
        let decorator = self.container.make_decorator(identifier)?;

        tracing::debug!(
            command = cmd.command_name(),
            decorator = identifier,
            "running decorator"
        );

        decorator.execute(ctx, cmd).await
    }
}

#[async_trait]
impl<B> CommandBus for ValidationCommandBus<B>
where
    B: CommandBus,
{
    async fn execute<C: Command>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError> {
        self.execute_with(ctx, cmd, &[]).await
    }
}
