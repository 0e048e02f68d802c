//! 事件监听器（EventListener）
//!
//! 声明监听器关心的事件名，并对命中的事件执行处理逻辑。
//! 未声明的事件会被分发器直接跳过，不视为错误。
//!
use crate::domain_event::{DomainEvent, short_event_name};
use async_trait::async_trait;

/// 监听器订阅的事件名集合
///
/// 名称既可以是完整事件名（`shop.orders.OrderPlaced`），也可以是短名（`OrderPlaced`）。
/// 路由所依赖的事件名宜通过宏参数显式固定，类型路径推导出的默认名称不保证稳定。
#[derive(Clone, Debug)]
pub enum HandledEventType {
    One(String),
    Many(Vec<String>),
    All,
}

impl HandledEventType {
    /// 判断给定事件名是否在订阅范围内
    pub fn matches(&self, event_name: &str) -> bool {
        match self {
            HandledEventType::One(name) => name_matches(name, event_name),
            HandledEventType::Many(names) => names.iter().any(|n| name_matches(n, event_name)),
            HandledEventType::All => true,
        }
    }
}

fn name_matches(declared: &str, event_name: &str) -> bool {
    declared == event_name || declared == short_event_name(event_name)
}

/// 事件监听器：处理一类或多类领域事件
#[async_trait]
pub trait EventListener<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 监听器名称（用于日志与错误定位）
    fn listener_name(&self) -> &str;
    /// 返回该监听器订阅的事件
    fn handled_event_type(&self) -> HandledEventType;
    /// 处理事件
    async fn handle(&self, event: &E) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_matches_full_and_short_names() {
        let t = HandledEventType::One("OrderPlaced".into());
        assert!(t.matches("shop.orders.OrderPlaced"));
        assert!(t.matches("OrderPlaced"));
        assert!(!t.matches("shop.orders.OrderCancelled"));

        let full = HandledEventType::One("shop.orders.OrderPlaced".into());
        assert!(full.matches("shop.orders.OrderPlaced"));
        assert!(!full.matches("billing.OrderPlaced"));
    }

    #[test]
    fn many_and_all() {
        let t = HandledEventType::Many(vec!["Placed".into(), "Cancelled".into()]);
        assert!(t.matches("shop.OrderEvent.Placed"));
        assert!(t.matches("shop.OrderEvent.Cancelled"));
        assert!(!t.matches("shop.OrderEvent.Shipped"));
        assert!(HandledEventType::All.matches("anything"));
    }
}
