use std::any::type_name;
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 事件名默认由类型路径推导：`shop::orders::OrderPlaced` → `shop.orders.OrderPlaced`。
/// 事件名仅用于日志、追踪与监听器路由，分发机制本身不依赖它。
/// 默认名称并不稳定（见 [`event_name_of`]），监听器依赖的事件名建议显式指定。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件名（形如 `shop.orders.OrderEvent.Placed` 或自定义名称）
    fn event_name(&self) -> String {
        event_name_of::<Self>()
    }
}

/// 由类型路径推导事件名，命名空间分隔符统一为 `.`
///
/// 泛型参数部分原样保留，只替换最外层路径中的 `::`。
///
/// 注意：推导依赖 `std::any::type_name`，其输出格式标准库不保证稳定，
/// 可能随编译器版本变化。需要被监听器按名路由、写入日志检索或跨进程传递的事件，
/// 应通过 `#[domain_event(name = "...")]` 或变体上的 `#[event(name = "...")]` 固定名称。
pub fn event_name_of<E: ?Sized>() -> String {
    normalize(type_name::<E>())
}

/// 取事件名最后一段（短名），如 `shop.orders.OrderPlaced` → `OrderPlaced`
pub fn short_event_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn normalize(path: &str) -> String {
    path.replace("::", ".").replace('\\', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OrderPlaced;

    impl DomainEvent for OrderPlaced {}

    #[test]
    fn event_name_uses_dotted_type_path() {
        let name = OrderPlaced.event_name();
        assert!(name.ends_with(".OrderPlaced"), "{name}");
        assert!(!name.contains("::"));
        assert!(name.starts_with("commander_domain."));
    }

    #[test]
    fn short_name_is_last_segment() {
        assert_eq!(short_event_name("shop.orders.OrderPlaced"), "OrderPlaced");
        assert_eq!(short_event_name("OrderPlaced"), "OrderPlaced");
        assert_eq!(short_event_name("shop.OrderEvent.Placed"), "Placed");
    }

    #[test]
    fn backslash_namespaces_are_normalized_too() {
        assert_eq!(normalize(r"Acme\Orders\OrderPlaced"), "Acme.Orders.OrderPlaced");
    }
}
