use bon::Builder;
use serde::{Deserialize, Serialize};

/// 业务上下文信息
///
/// 随一次命令执行在校验器、装饰器、处理器与事件监听器之间传递，
/// 只承载追踪与审计所需的字段，不参与命令路由。
#[derive(Builder, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContext {
    /// 关联ID：同一业务请求链路上的所有命令共享
    correlation_id: Option<String>,
    /// 因果ID：触发本次命令的上游命令/事件
    causation_id: Option<String>,
    /// 触发命令的主体类型（如用户、系统等）
    actor_type: Option<String>,
    /// 触发命令的主体ID
    actor_id: Option<String>,
}

impl BusinessContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    /// 派生下游上下文：保留关联ID与主体，因果ID改为给定值
    pub fn caused_by(&self, causation_id: impl Into<String>) -> Self {
        Self {
            causation_id: Some(causation_id.into()),
            ..self.clone()
        }
    }
}
