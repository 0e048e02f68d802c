use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;

/// 命令校验器
///
/// 返回任何错误都会中止本次执行，处理器不会被调用。
#[async_trait]
pub trait CommandValidator<C>: Send + Sync
where
    C: Command,
{
    async fn validate(&self, ctx: &AppContext, cmd: &C) -> Result<(), AppError>;
}
