use crate::{
    command::{AnyCommand, Command},
    context::AppContext,
    error::AppError,
};
use async_trait::async_trait;

/// 命令总线（Command Bus）
///
/// - 负责把命令交给对应的处理器并返回其结果；
/// - 可层层包装（如 `ValidationCommandBus` 包装 `DefaultCommandBus`）；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
#[async_trait]
pub trait CommandBus: Send + Sync {
    /// 执行命令
    ///
    /// - `ctx`：应用上下文（链路追踪、幂等键等）
    /// - `cmd`：具体命令实例
    async fn execute<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command;
}

/// 装饰总线（Decorator）
///
/// 在真正的处理器之前、按注册顺序执行的横切逻辑（审计、鉴权、清洗等）。
/// 装饰器以类型擦除的方式接收命令，需要时通过 `downcast_ref` 还原；
/// 其返回值被丢弃，只有错误会影响管线（中止后续装饰器与处理器）。
#[async_trait]
pub trait CommandDecorator: Send + Sync {
    async fn execute(&self, ctx: &AppContext, cmd: &dyn AnyCommand) -> Result<(), AppError>;
}
