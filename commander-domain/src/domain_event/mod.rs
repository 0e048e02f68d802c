//! 领域事件（Domain Event）与业务上下文
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`）、事件名的推导规则，
//! 以及随命令在各层之间传递的 `BusinessContext`。

mod business_context;
mod domain_event_trait;

pub use business_context::BusinessContext;
pub use domain_event_trait::{DomainEvent, event_name_of, short_event_name};
