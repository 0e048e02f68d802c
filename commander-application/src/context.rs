use commander_domain::domain_event::BusinessContext;

/// 应用层上下文（Application Context）
///
/// 承载一次命令执行所需的横切信息，在校验器、装饰器与处理器之间原样传递：
/// - 业务语境（`BusinessContext`）：关联追踪 `correlation_id`、因果链 `causation_id`、
///   执行者类型/ID 等；
/// - 幂等键（`idempotency_key`）：供装饰器或处理器实现请求幂等（如重复提交保护）。
///
/// 典型用法：
/// ```rust
/// use commander_application::context::AppContext;
/// use commander_domain::domain_event::BusinessContext;
///
/// let ctx = AppContext {
///     biz: BusinessContext::builder()
///         .correlation_id("cor-123".into())
///         .actor_type("user".into())
///         .actor_id("u-1".into())
///         .build(),
///     idempotency_key: Some("idem-xyz".into()),
/// };
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AppContext {
    /// 业务语境（链路追踪、审计主体、操作因果）
    pub biz: BusinessContext,
    /// 幂等键（可选）：为空则由装饰器或处理器决定是否参与幂等
    pub idempotency_key: Option<String>,
}

impl AppContext {
    pub fn new(biz: BusinessContext) -> Self {
        Self {
            biz,
            idempotency_key: None,
        }
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// 便于日志字段读取的关联ID
    pub fn correlation_id(&self) -> Option<&str> {
        self.biz.correlation_id()
    }
}
