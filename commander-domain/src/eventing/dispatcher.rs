//! 事件分发器（EventDispatcher）协议
//!
//! 接收实体释放出的一批事件并负责投递，投递方式由实现决定。
//!
use crate::{domain_event::DomainEvent, error::DomainResult as Result};
use async_trait::async_trait;
use std::sync::Arc;

/// 事件分发器：分发一批已发生的领域事件
#[async_trait]
pub trait EventDispatcher<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 按给定顺序分发全部事件；空批次直接成功
    async fn dispatch(&self, events: Vec<E>) -> Result<()>;
}

#[async_trait]
impl<E, D> EventDispatcher<E> for Arc<D>
where
    E: DomainEvent,
    D: EventDispatcher<E> + ?Sized,
{
    async fn dispatch(&self, events: Vec<E>) -> Result<()> {
        (**self).dispatch(events).await
    }
}
